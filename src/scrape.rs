//! HTTP client for the external scraping backend
//!
//! Wraps `POST /scrape` and `GET /health`. The scrape call never fails
//! from the caller's perspective: transport failures, non-success
//! statuses, and malformed bodies all come back as an error-status
//! [`ScrapeResponse`] carrying a message and a machine-readable code.

use crate::error::{JobscoutError, Result};
use crate::types::{DatePosted, ScrapeResponse, SearchParams};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Keyword applied when the user leaves the field blank
pub const DEFAULT_KEYWORD: &str = "junior developer";

/// Error code for failures local to this client (transport, bad body)
pub const CODE_CLIENT_ERROR: &str = "CLIENT_ERROR";

/// Fallback code when the backend errors without a structured code
pub const CODE_SCRAPING_ERROR: &str = "SCRAPING_ERROR";

/// Outbound body for `POST /scrape`, with defaults applied
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ScrapeRequest {
    job_keyword: String,
    countries: Vec<String>,
    date_posted: DatePosted,
    experience_levels: Vec<String>,
    workplace_types: Vec<String>,
}

impl ScrapeRequest {
    fn from_params(params: &SearchParams) -> Self {
        Self {
            job_keyword: params
                .job_keyword
                .clone()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_KEYWORD.to_string()),
            countries: params.countries.clone(),
            date_posted: params.date_posted.unwrap_or_default(),
            experience_levels: params.experience_levels.clone().unwrap_or_default(),
            workplace_types: params.workplace_types.clone().unwrap_or_default(),
        }
    }
}

/// Client for the scraping backend collaborator
pub struct ScrapeClient {
    client: Client,
    base_url: String,
}

impl ScrapeClient {
    /// Create a new scrape client for the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("jobscout/0.2.0")
            .build()
            .map_err(|e| JobscoutError::Scrape(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into();
        tracing::info!("Initialized scrape client: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a search to the scraping backend
    ///
    /// Applies the default keyword, date filter, and empty level/type
    /// sets before dispatch. A single attempt is made; there are no
    /// retries. Always resolves to a tagged [`ScrapeResponse`].
    pub async fn scrape(&self, params: &SearchParams) -> ScrapeResponse {
        let url = format!("{}/scrape", self.base_url);
        let body = ScrapeRequest::from_params(params);

        tracing::debug!(
            keyword = %body.job_keyword,
            countries = body.countries.len(),
            "Dispatching scrape request"
        );

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Scrape request failed: {}", e);
                return ScrapeResponse::client_error(e.to_string(), CODE_CLIENT_ERROR);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = error_body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Failed to scrape jobs")
                .to_string();
            let code = error_body
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or(CODE_SCRAPING_ERROR)
                .to_string();
            tracing::warn!("Scrape backend returned {}: {}", status, message);
            return ScrapeResponse::client_error(message, code);
        }

        match response.json::<ScrapeResponse>().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to parse scrape response: {}", e);
                ScrapeResponse::client_error(
                    format!("Failed to parse scrape response: {}", e),
                    CODE_CLIENT_ERROR,
                )
            }
        }
    }

    /// Probe the backend's availability endpoint
    ///
    /// Returns false on any failure, never an error.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Scrape backend health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_client_creation() {
        let client = ScrapeClient::new("http://localhost:5000");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_request_defaults_applied() {
        let params = SearchParams {
            countries: vec!["Norway".to_string()],
            ..Default::default()
        };
        let body = ScrapeRequest::from_params(&params);
        assert_eq!(body.job_keyword, DEFAULT_KEYWORD);
        assert_eq!(body.date_posted, DatePosted::Past24h);
        assert!(body.experience_levels.is_empty());
        assert!(body.workplace_types.is_empty());
    }

    #[test]
    fn test_request_keeps_explicit_values() {
        let params = SearchParams {
            job_keyword: Some("senior engineer".to_string()),
            countries: vec!["Japan".to_string()],
            date_posted: Some(DatePosted::PastWeek),
            experience_levels: Some(vec!["2".to_string()]),
            workplace_types: Some(vec!["2".to_string(), "3".to_string()]),
        };
        let body = ScrapeRequest::from_params(&params);
        assert_eq!(body.job_keyword, "senior engineer");
        assert_eq!(body.date_posted, DatePosted::PastWeek);
        assert_eq!(body.experience_levels, vec!["2"]);
        assert_eq!(body.workplace_types, vec!["2", "3"]);
    }

    #[test]
    fn test_request_empty_keyword_falls_back_to_default() {
        let params = SearchParams {
            job_keyword: Some(String::new()),
            countries: vec!["Chile".to_string()],
            ..Default::default()
        };
        let body = ScrapeRequest::from_params(&params);
        assert_eq!(body.job_keyword, DEFAULT_KEYWORD);
    }

    #[test]
    fn test_request_serializes_wire_field_names() {
        let params = SearchParams {
            countries: vec!["Brazil".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(ScrapeRequest::from_params(&params)).unwrap();
        assert_eq!(json["job_keyword"], DEFAULT_KEYWORD);
        assert_eq!(json["date_posted"], "24h");
        assert!(json["experience_levels"].as_array().unwrap().is_empty());
        assert!(json["workplace_types"].as_array().unwrap().is_empty());
    }
}
