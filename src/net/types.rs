//! Wire types for the assistants collection endpoint, plus the error type
//! shared by transport, parsing, and configuration.
//!
//! DESIGN
//! ======
//! `Assistant` mirrors the server JSON exactly (`uuid`, `system_prompt`, ...)
//! so a record that is read and re-serialized keeps every field unchanged.
//! A `null` voice id is kept as `null` rather than skipped.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by configuration, transport, and response parsing.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The server returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// A success response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

impl ApiError {
    /// Machine-readable error code, emitted as the `code` field on
    /// controller log events.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
        }
    }

    /// Human-readable message for the view.
    ///
    /// Only a non-success response can carry a server message (its `error`
    /// field); every other failure, and an empty or missing `error`, yields
    /// `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ApiResponse { body, .. } => server_error_message(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract a non-empty `error` string from a JSON error body.
fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Placeholder shown where an assistant has no voice or no tools.
pub const EMPTY_CELL: &str = "—";

/// A server-owned assistant record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    #[serde(rename = "uuid")]
    pub id: String,
    pub name: String,
    pub system_prompt: String,
    pub voice_id: Option<String>,
    #[serde(default)]
    pub enabled_tools: Vec<String>,
}

impl Assistant {
    /// The voice id, or `None` when absent or blank.
    #[must_use]
    pub fn voice(&self) -> Option<&str> {
        self.voice_id.as_deref().filter(|v| !v.is_empty())
    }

    /// Voice column text: the voice id, or [`EMPTY_CELL`].
    #[must_use]
    pub fn voice_label(&self) -> &str {
        self.voice().unwrap_or(EMPTY_CELL)
    }

    /// Tools column text: comma-separated tags, or [`EMPTY_CELL`].
    #[must_use]
    pub fn tools_label(&self) -> String {
        if self.enabled_tools.is_empty() {
            EMPTY_CELL.to_owned()
        } else {
            self.enabled_tools.join(", ")
        }
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Body of `POST /api/assistants`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssistantRequest {
    pub name: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
