//! Configuration management for Jobscout
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files and environment variables.

use crate::error::{JobscoutError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable overriding the scraping backend base URL
pub const ENV_SCRAPER_URL: &str = "JOBSCOUT_SCRAPER_URL";
/// Environment variable overriding the AI service base URL
pub const ENV_AI_URL: &str = "JOBSCOUT_AI_URL";
/// Environment variable overriding the history data directory
pub const ENV_DATA_DIR: &str = "JOBSCOUT_DATA_DIR";

/// Main configuration structure for Jobscout
///
/// Holds the base URLs of the two external collaborators and the
/// history persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scraping backend settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// AI chat service settings
    #[serde(default)]
    pub ai: AiConfig,

    /// History persistence settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Scraping backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the scraping backend
    #[serde(default = "default_scraper_url")]
    pub base_url: String,
}

fn default_scraper_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_scraper_url(),
        }
    }
}

/// AI chat service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the AI service
    #[serde(default = "default_ai_url")]
    pub base_url: String,
}

fn default_ai_url() -> String {
    "http://localhost:5001".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_url(),
        }
    }
}

/// History persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryConfig {
    /// Directory holding the history database
    ///
    /// When unset, the platform data directory is used (see
    /// `history::backend::SledBackend::open_default`).
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults
    /// when the file does not exist, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(JobscoutError::Io)?;
            serde_yaml::from_str(&contents).map_err(JobscoutError::Yaml)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Build a configuration from defaults plus environment overrides only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `JOBSCOUT_*` environment variable overrides in place
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_SCRAPER_URL) {
            if !url.is_empty() {
                self.scraper.base_url = url;
            }
        }
        if let Ok(url) = std::env::var(ENV_AI_URL) {
            if !url.is_empty() {
                self.ai.base_url = url;
            }
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.is_empty() {
                self.history.data_dir = Some(dir);
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `JobscoutError::Config` if either collaborator base URL
    /// does not parse as an absolute URL.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.scraper.base_url).map_err(|e| {
            JobscoutError::Config(format!(
                "Invalid scraper base URL '{}': {}",
                self.scraper.base_url, e
            ))
        })?;
        Url::parse(&self.ai.base_url).map_err(|e| {
            JobscoutError::Config(format!("Invalid AI base URL '{}': {}", self.ai.base_url, e))
        })?;
        Ok(())
    }
}
