//! Error types for Jobscout
//!
//! This module defines all error types used throughout the crate,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Jobscout operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, scrape orchestration, chat exchanges, and
/// history persistence.
#[derive(Error, Debug)]
pub enum JobscoutError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scraping backend errors (transport failures or structured error bodies)
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// AI chat service errors
    #[error("Chat error: {0}")]
    Chat(String),

    /// History persistence errors (backend read/write failures)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Jobscout operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
