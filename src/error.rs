//! Error type shared by every client operation.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Migadu client.
///
/// Every failed call yields exactly one of these; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The domain could not be converted to its ASCII-compatible form.
    #[error("invalid domain name `{domain}`: {reason}")]
    Encoding { domain: String, reason: String },

    /// The API answered with HTTP 404.
    #[error("resource not found: {message}")]
    NotFound { message: String },

    /// The API answered with any other non-2xx status.
    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: StatusCode, message: String },

    /// Connection, timeout or TLS failure in the underlying HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the record shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client configuration is incomplete or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error is the API's HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// HTTP status reported by the API, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Error::RequestFailed { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}
