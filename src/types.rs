//! Shared domain and wire types for Jobscout
//!
//! These types mirror the JSON contracts of the two external collaborators
//! (scraping backend and AI service) and the records the history store
//! persists locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single job listing returned by the scraping backend
///
/// Jobs carry no identity of their own; display uniqueness is derived
/// from `job_url` plus position in the returned list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub country: String,
    pub job_title: String,
    pub company_name: String,
    pub company_url: String,
    pub location: String,
    pub benefit: String,
    pub posted: String,
    pub company_description: String,
    pub job_url: String,
    pub job_description: String,
}

/// Date-posted filter accepted by the scraping backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DatePosted {
    #[serde(rename = "any")]
    Any,
    #[default]
    #[serde(rename = "24h")]
    Past24h,
    #[serde(rename = "week")]
    PastWeek,
    #[serde(rename = "month")]
    PastMonth,
}

/// User-supplied search parameters
///
/// `countries` is the only required field; the orchestrator applies
/// defaults for everything else before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_keyword: Option<String>,
    pub countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<DatePosted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_levels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace_types: Option<Vec<String>>,
}

/// Status tag shared by collaborator response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response body from the scraping backend's `POST /scrape`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub status: ResponseStatus,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jobs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<SearchParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ScrapeResponse {
    /// Build a client-side error response with the current timestamp
    pub fn client_error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            timestamp: Utc::now().to_rfc3339(),
            total_jobs: None,
            parameters: None,
            jobs: None,
            error: Some(message.into()),
            code: Some(code.into()),
        }
    }

    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// One persisted search: the parameters used, the jobs returned, and
/// bookkeeping for ordering and display
///
/// Entries are immutable after creation; the store only ever deletes them.
/// `date_added` serializes as an RFC-3339 string and is reconstructed into
/// a `DateTime<Utc>` on read. The camelCase wire names are the AI
/// service's contract for `search_history` items and double as the
/// persisted format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier (ULID, sortable by creation time)
    pub id: String,
    /// The parameters that produced this search
    #[serde(rename = "searchParams")]
    pub search_params: SearchParams,
    /// Full ordered job list as returned by the backend
    pub jobs: Vec<Job>,
    /// Resolved total count (server-reported, or list length)
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
    /// Server-supplied timestamp string
    pub timestamp: String,
    /// Client-assigned creation instant
    #[serde(rename = "dateAdded")]
    pub date_added: DateTime<Utc>,
}

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// ISO-8601 timestamp string
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a user message stamped with the current time
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Create an assistant message carrying the server's timestamp
    pub fn assistant(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Response body from the AI service's `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: ResponseStatus,
    pub conversation_id: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ChatResponse {
    /// Build a client-side error response, echoing the conversation id
    /// the caller already held (or "unknown" when none existed)
    pub fn client_error(
        message: impl Into<String>,
        code: impl Into<String>,
        conversation_id: Option<&str>,
    ) -> Self {
        Self {
            status: ResponseStatus::Error,
            conversation_id: conversation_id.unwrap_or("unknown").to_string(),
            message: String::new(),
            timestamp: Utc::now().to_rfc3339(),
            history_length: None,
            error: Some(message.into()),
            code: Some(code.into()),
        }
    }

    /// Whether the AI service reported success
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Detail payload from the AI service's `GET /conversation/{id}`
///
/// The service owns this shape; everything beyond the id is kept as raw
/// JSON so schema drift on the collaborator side does not break fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDetail {
    pub conversation_id: String,
    #[serde(flatten)]
    pub detail: serde_json::Value,
}
