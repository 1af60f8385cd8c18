//! Error types for the posts API client.
//!
//! # Design
//! Transport failures (no response at all) and server failures (a response
//! with a non-2xx status) are kept apart because the view reports them
//! differently: one is a connectivity problem, the other carries whatever the
//! backend said.
//!
//! Server message extraction: the error body is read as a JSON object and the
//! first non-empty string in `message`, then `error`, wins. Any other body
//! shape yields no message and callers fall back to a generic text that
//! includes the status code.

use thiserror::Error;

use crate::http::{HttpResponse, TransportError};

/// Errors returned by `PostClient` parse methods and `PostsApi` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response reached the client.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build a `Server` error from a non-2xx response.
    pub fn from_response(response: &HttpResponse) -> Self {
        ApiError::Server {
            status: response.status,
            message: extract_message(&response.body),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Human-readable text for notices and the error view.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(detail) => format!("Cannot reach the server: {detail}"),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server {
                status,
                message: None,
            } => format!("Server error (HTTP {status})"),
            ApiError::Deserialization(_) => "The server sent an unexpected response".to_string(),
            ApiError::Serialization(_) => "The post could not be encoded".to_string(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}
