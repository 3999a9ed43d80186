//! Persistent search-history store
//!
//! Keeps a bounded, newest-first collection of past searches in a single
//! named blob slot behind a pluggable [`HistoryBackend`]. Corrupt or
//! unreadable state never propagates to callers; reads degrade to an
//! empty collection and the failure is logged.

use crate::error::Result;
use crate::types::{HistoryEntry, Job, SearchParams};
use chrono::{DateTime, Utc};
use ulid::Ulid;

pub mod backend;
pub use backend::{HistoryBackend, MemoryBackend, NoopBackend, SledBackend};

/// Storage slot holding the JSON-serialized history collection
pub const HISTORY_SLOT: &str = "job_search_history";

/// Maximum number of history entries retained
pub const MAX_HISTORY_ITEMS: usize = 50;

/// Client-local durable record of past searches
///
/// The store owns the collection exclusively: entries are created by
/// [`HistoryStore::add_search`], immutable afterwards, and removed only
/// by explicit deletion or clear-all. Every write persists the full
/// collection (overwrite, not append).
pub struct HistoryStore {
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Create a store over an explicit backend
    pub fn new(backend: Box<dyn HistoryBackend>) -> Self {
        Self { backend }
    }

    /// Create a store over the default durable backend
    ///
    /// # Errors
    ///
    /// Returns `JobscoutError::Storage` if the database cannot be opened.
    pub fn open_default(data_dir: Option<&str>) -> Result<Self> {
        Ok(Self::new(Box::new(SledBackend::open_default(data_dir)?)))
    }

    /// Create a volatile in-memory store
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Create a store safe for contexts without durable storage
    ///
    /// All reads return empty and all writes are no-ops.
    pub fn detached() -> Self {
        Self::new(Box::new(NoopBackend::new()))
    }

    /// Record a successful search at the head of the history
    ///
    /// Assigns a fresh ULID id and the current instant, prepends the
    /// entry, evicts the oldest entry past [`MAX_HISTORY_ITEMS`], and
    /// persists the whole collection. Returns the created entry.
    pub fn add_search(
        &self,
        search_params: SearchParams,
        jobs: Vec<Job>,
        total_jobs: usize,
        timestamp: impl Into<String>,
    ) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Ulid::new().to_string(),
            search_params,
            jobs,
            total_jobs,
            timestamp: timestamp.into(),
            date_added: Utc::now(),
        };

        let mut history = self.get_history();
        history.insert(0, entry.clone());
        if history.len() > MAX_HISTORY_ITEMS {
            history.truncate(MAX_HISTORY_ITEMS);
        }
        self.save_history(&history);

        tracing::debug!(id = %entry.id, total = history.len(), "Added search to history");
        entry
    }

    /// Read the full history, newest first
    ///
    /// An absent slot yields an empty collection. Unreadable or
    /// malformed state is logged and yields an empty collection; the
    /// whole collection is dropped on corruption rather than salvaging
    /// individual entries.
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        let bytes = match self.backend.get(HISTORY_SLOT) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read history: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("Malformed history state, dropping collection: {}", e);
                Vec::new()
            }
        }
    }

    /// Find a history entry by id
    pub fn get_search_by_id(&self, id: &str) -> Option<HistoryEntry> {
        self.get_history().into_iter().find(|entry| entry.id == id)
    }

    /// Delete the entry with the given id, if present
    ///
    /// Unknown ids leave the collection unchanged.
    pub fn delete_search(&self, id: &str) {
        let history = self.get_history();
        let filtered: Vec<HistoryEntry> =
            history.into_iter().filter(|entry| entry.id != id).collect();
        self.save_history(&filtered);
    }

    /// Remove all persisted history state
    pub fn clear_history(&self) {
        if let Err(e) = self.backend.remove(HISTORY_SLOT) {
            tracing::warn!("Failed to clear history: {}", e);
        }
    }

    /// Persist the full collection, logging write failures
    fn save_history(&self, history: &[HistoryEntry]) {
        let bytes = match serde_json::to_vec(history) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(HISTORY_SLOT, &bytes) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Format an instant as an absolute display date (e.g. "Jan 5, 2025, 14:30")
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %H:%M").to_string()
}

/// Describe how long ago an instant was, in display form
///
/// Under a minute reads "Just now"; minutes, hours, and days are spelled
/// out up to a week; anything older falls back to [`format_date`].
pub fn relative_time(date: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(date);
    let mins = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} minute{} ago", mins, if mins > 1 { "s" } else { "" })
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else if days < 7 {
        format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
    } else {
        format_date(date)
    }
}
