//! Shared fixtures for integration tests

use jobscout::types::{Job, SearchParams};

#[allow(dead_code)]
pub fn sample_params() -> SearchParams {
    SearchParams {
        job_keyword: Some("junior developer".to_string()),
        countries: vec!["Germany".to_string()],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn sample_job(url: &str) -> Job {
    Job {
        country: "Germany".to_string(),
        job_title: "Junior Rust Developer".to_string(),
        company_name: "Acme GmbH".to_string(),
        company_url: "https://acme.example".to_string(),
        location: "Berlin".to_string(),
        benefit: "Remote friendly".to_string(),
        posted: "2 days ago".to_string(),
        company_description: "Developer tools vendor".to_string(),
        job_url: url.to_string(),
        job_description: "Write and review Rust".to_string(),
    }
}

/// Base URL that refuses connections immediately (reserved port 1)
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
