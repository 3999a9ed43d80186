//! Search orchestration: validate, scrape, commit to history
//!
//! Ties the [`ScrapeClient`] and [`HistoryStore`] together. A search is
//! validated locally, forwarded to the scraping backend, and committed
//! to history only on a successful response carrying jobs.

use crate::history::HistoryStore;
use crate::scrape::{ScrapeClient, CODE_SCRAPING_ERROR};
use crate::types::{HistoryEntry, Job, SearchParams};

/// Error code for searches rejected before dispatch
pub const CODE_INVALID_COUNTRIES: &str = "INVALID_COUNTRIES";

/// Outcome of one orchestrated search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The backend returned jobs and the search was committed to history
    Success {
        jobs: Vec<Job>,
        /// Server-reported total, falling back to the list length
        total_jobs: usize,
        /// The history entry created for this search
        entry: HistoryEntry,
    },
    /// The search was rejected locally or failed at the backend;
    /// history is untouched
    Error { message: String, code: String },
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }
}

/// Orchestrates user searches against the scraping backend
pub struct SearchOrchestrator {
    scraper: ScrapeClient,
    history: HistoryStore,
}

impl SearchOrchestrator {
    /// Create an orchestrator over a scrape client and history store
    pub fn new(scraper: ScrapeClient, history: HistoryStore) -> Self {
        Self { scraper, history }
    }

    /// Access the underlying history store
    ///
    /// Callers read it to build the chat context and to render the
    /// history view.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Run one search end to end
    ///
    /// An empty country set is rejected locally with
    /// [`CODE_INVALID_COUNTRIES`], without contacting the backend or
    /// touching history. A successful scrape commits exactly one new
    /// history entry; any failure leaves history unchanged.
    pub async fn run_search(&self, params: &SearchParams) -> SearchOutcome {
        if params.countries.is_empty() {
            tracing::debug!("Rejecting search with no countries selected");
            return SearchOutcome::Error {
                message: "countries parameter is required".to_string(),
                code: CODE_INVALID_COUNTRIES.to_string(),
            };
        }

        let response = self.scraper.scrape(params).await;

        if response.is_success() {
            if let Some(jobs) = response.jobs {
                let total_jobs = response.total_jobs.unwrap_or(jobs.len());
                let entry = self.history.add_search(
                    params.clone(),
                    jobs.clone(),
                    total_jobs,
                    response.timestamp,
                );
                tracing::info!(total_jobs, entry = %entry.id, "Search committed to history");
                return SearchOutcome::Success {
                    jobs,
                    total_jobs,
                    entry,
                };
            }
        }

        SearchOutcome::Error {
            message: response
                .error
                .unwrap_or_else(|| "Failed to scrape jobs".to_string()),
            code: response
                .code
                .unwrap_or_else(|| CODE_SCRAPING_ERROR.to_string()),
        }
    }
}
