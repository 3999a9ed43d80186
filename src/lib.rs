//! Jobscout - client core for a job-search app
//!
//! This library provides the non-UI core of a job-search client: a
//! durable, bounded search-history store, a search orchestrator in front
//! of an external scraping backend, and a chat-session client in front
//! of an external AI service.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `history`: persistent history store with pluggable blob backends
//! - `scrape`: HTTP client for the scraping backend collaborator
//! - `search`: search orchestration (validate, scrape, commit to history)
//! - `chat`: HTTP client and session state for the AI service collaborator
//! - `config`: configuration loading and validation
//! - `types`: shared domain and wire types
//! - `error`: error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use jobscout::{Config, HistoryStore, ScrapeClient, SearchOrchestrator, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!
//!     let orchestrator = SearchOrchestrator::new(
//!         ScrapeClient::new(&config.scraper.base_url)?,
//!         HistoryStore::open_default(config.history.data_dir.as_deref())?,
//!     );
//!
//!     let params = SearchParams {
//!         countries: vec!["Germany".to_string()],
//!         ..Default::default()
//!     };
//!     let outcome = orchestrator.run_search(&params).await;
//!     println!("success: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod history;
pub mod scrape;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use chat::{ChatClient, ChatOutcome, ChatSession};
pub use config::Config;
pub use error::{JobscoutError, Result};
pub use history::{HistoryStore, MAX_HISTORY_ITEMS};
pub use scrape::ScrapeClient;
pub use search::{SearchOrchestrator, SearchOutcome};
pub use types::{ChatMessage, ChatResponse, HistoryEntry, Job, ScrapeResponse, SearchParams};
