//! Completion-service collaborator: trait, errors, and the HTTP client.
//!
//! The generation loop only sees the [`CompletionService`] trait: given a
//! system instruction and a user instruction, return one text reply or a
//! typed [`CompletionError`]. Failure is a value, not an exception; the
//! loop converts errors into sentinel drafts without aborting the batch.
//!
//! The production implementation is [`OpenAiClient`], a blocking HTTP
//! client speaking the OpenAI-style chat-completions protocol. The service
//! credential comes from the `MAILDRAFT_API_KEY` environment variable and
//! is never read from the config file.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the completion-service credential.
pub const CREDENTIAL_ENV_VAR: &str = "MAILDRAFT_API_KEY";

/// A typed per-request failure from the completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Connection, TLS, timeout, or response-decoding failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service error (status {status}): {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body, trimmed, for diagnostics.
        message: String,
    },

    /// The service answered successfully but with no usable text.
    #[error("service returned an empty reply")]
    EmptyReply,
}

/// The external text-completion collaborator.
///
/// Implementations must be safe to call once per record, sequentially;
/// nothing in this crate calls `complete` concurrently.
pub trait CompletionService {
    /// Request one text completion for a system/user instruction pair.
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

/// Read the service credential from the environment.
///
/// Returns `None` when the variable is unset or blank, so callers can
/// produce one clear "credential missing" message instead of sending an
/// empty bearer token.
pub fn credential_from_env() -> Option<String> {
    std::env::var(CREDENTIAL_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// ============================================================================
// OpenAI-style chat-completions wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking HTTP client for an OpenAI-style chat-completions endpoint.
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    api_base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client with a caller-imposed request timeout.
    ///
    /// The completion contract defines no timeout of its own, so the
    /// timeout here bounds every `complete` call.
    pub fn new(
        api_key: String,
        api_base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_base_url,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.api_base_url.trim_end_matches('/')
        )
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let reply: ChatResponse = response
            .json()
            .map_err(|e| CompletionError::Transport(format!("failed to decode reply: {}", e)))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(CompletionError::EmptyReply);
        }

        Ok(content)
    }
}
