//! HTTP client and session state for the external AI chat service
//!
//! [`ChatClient`] wraps the service's `/chat`, `/conversation/{id}`, and
//! `/health` endpoints. `send_message` and `check_health` always resolve
//! to a tagged result; the conversation fetch/delete pass-throughs are
//! the only operations allowed to raise.
//!
//! [`ChatSession`] owns the in-memory transcript and the conversation id
//! for one chat UI session, including the optimistic append/retract
//! discipline around each exchange.

use crate::error::{JobscoutError, Result};
use crate::types::{ChatMessage, ChatResponse, ConversationDetail, HistoryEntry, Job};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Error code for chat exchanges that fail on the client side
pub const CODE_CHAT_ERROR: &str = "CHAT_ERROR";

/// Outbound body for `POST /chat`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    jobs: &'a [Job],
    search_history: &'a [HistoryEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

/// Client for the AI service collaborator
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    /// Create a new chat client for the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("jobscout/0.2.0")
            .build()
            .map_err(|e| JobscoutError::Chat(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into();
        tracing::info!("Initialized chat client: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a message with the current jobs and history as context
    ///
    /// The conversation id, when present, correlates the message into
    /// the server-side session. Always resolves to a tagged
    /// [`ChatResponse`]; a failed exchange echoes the caller's
    /// conversation id back unchanged.
    pub async fn send_message(
        &self,
        message: &str,
        jobs: &[Job],
        search_history: &[HistoryEntry],
        conversation_id: Option<&str>,
    ) -> ChatResponse {
        let url = format!("{}/chat", self.base_url);
        let body = ChatRequest {
            message,
            jobs,
            search_history,
            conversation_id,
        };

        tracing::debug!(
            jobs = jobs.len(),
            history = search_history.len(),
            conversation = conversation_id.unwrap_or("<new>"),
            "Dispatching chat message"
        );

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                return ChatResponse::client_error(e.to_string(), CODE_CHAT_ERROR, conversation_id);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = error_body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Failed to send message")
                .to_string();
            let code = error_body
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or(CODE_CHAT_ERROR)
                .to_string();
            tracing::warn!("AI service returned {}: {}", status, message);
            return ChatResponse::client_error(message, code, conversation_id);
        }

        match response.json::<ChatResponse>().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to parse chat response: {}", e);
                ChatResponse::client_error(
                    format!("Failed to parse chat response: {}", e),
                    CODE_CHAT_ERROR,
                    conversation_id,
                )
            }
        }
    }

    /// Probe the AI service's availability endpoint
    ///
    /// Returns false on any failure, never an error.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("AI service health check failed: {}", e);
                false
            }
        }
    }

    /// Fetch a conversation by id
    ///
    /// Thin pass-through with no fallback semantics: transport failures
    /// and non-success statuses propagate to the caller.
    pub async fn get_conversation(&self, conversation_id: &str) -> Result<ConversationDetail> {
        let url = format!("{}/conversation/{}", self.base_url, conversation_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(JobscoutError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobscoutError::Chat(format!(
                "Failed to fetch conversation {}: {}",
                conversation_id, status
            ))
            .into());
        }

        Ok(response.json().await.map_err(JobscoutError::Http)?)
    }

    /// Delete a conversation by id
    ///
    /// Thin pass-through; returns the service's deletion confirmation
    /// payload and propagates failures to the caller.
    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<serde_json::Value> {
        let url = format!("{}/conversation/{}", self.base_url, conversation_id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(JobscoutError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobscoutError::Chat(format!(
                "Failed to delete conversation {}: {}",
                conversation_id, status
            ))
            .into());
        }

        Ok(response.json().await.map_err(JobscoutError::Http)?)
    }
}

/// Outcome of one [`ChatSession::send`] exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The assistant replied; the message is already on the transcript
    Reply(ChatMessage),
    /// The exchange failed; the optimistic user message was retracted
    Error { message: String, code: String },
}

impl ChatOutcome {
    pub fn is_reply(&self) -> bool {
        matches!(self, ChatOutcome::Reply(_))
    }
}

/// One chat UI session: an evolving conversation id and its transcript
///
/// The transcript lives in memory only and is append-only except for the
/// compensating retract of a failed exchange. The conversation id is
/// absent until the first successful response and thereafter always
/// adopts the server's value, since the server is authoritative for
/// session continuity. `send` takes `&mut self`, so a session admits one
/// outstanding exchange at a time.
pub struct ChatSession {
    client: ChatClient,
    conversation_id: Option<String>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a session over an existing chat client
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            conversation_id: None,
            transcript: Vec::new(),
        }
    }

    /// Current conversation id, absent until the first successful reply
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// The ordered transcript of this session
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Access to the underlying client (for health checks and the
    /// conversation pass-throughs)
    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// Exchange one message with the AI service
    ///
    /// The user message is appended optimistically before the network
    /// call. On success the assistant reply is appended and the server's
    /// conversation id adopted; on failure the optimistic message is
    /// retracted so the transcript never shows a user message with no
    /// resolution, and the conversation id is left unchanged.
    pub async fn send(
        &mut self,
        text: &str,
        jobs: &[Job],
        search_history: &[HistoryEntry],
    ) -> ChatOutcome {
        self.transcript.push(ChatMessage::user(text));

        let response = self
            .client
            .send_message(text, jobs, search_history, self.conversation_id.as_deref())
            .await;

        if response.is_success() {
            self.conversation_id = Some(response.conversation_id);
            let reply = ChatMessage::assistant(response.message, response.timestamp);
            self.transcript.push(reply.clone());
            ChatOutcome::Reply(reply)
        } else {
            self.transcript.pop();
            ChatOutcome::Error {
                message: response
                    .error
                    .unwrap_or_else(|| "Failed to send message".to_string()),
                code: response.code.unwrap_or_else(|| CODE_CHAT_ERROR.to_string()),
            }
        }
    }
}
