//! Client error types

use console_core::CoreError;
use serde_json::Value;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned 401
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server returned another error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the credentials of this request
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// HTTP status carried by the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human-readable message supplied by the server, if any.
    ///
    /// JSON bodies are searched for `message`, `error` and `detail`; a plain
    /// text body is used as-is.
    pub fn user_message(&self) -> Option<String> {
        let body = match self {
            Self::Unauthorized(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::BadRequest(body)
            | Self::ServerError { message: body, .. } => body,
            _ => return None,
        };

        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => ["message", "error", "detail"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .filter(|message| !message.trim().is_empty())
                .map(ToString::to_string),
            Ok(Value::String(message)) if !message.trim().is_empty() => Some(message),
            Ok(_) => None,
            Err(_) => Some(body.to_string()),
        }
    }
}

/// Errors surfaced by the auth service
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejected; the message is meant for display
    #[error("{0}")]
    LoginFailed(String),

    /// Token could not be persisted
    #[error(transparent)]
    Storage(#[from] CoreError),
}
