//! Errors raised by exchanges with the backend REST API.

use reqwest::StatusCode;

/// Error type for a single request/response exchange.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Could not reach the server: {0}")]
    Connect(String),

    #[error("Server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns the HTTP status for errors produced by a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server answered 401 Unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// True for failures where no response was received at all.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Timeout | Self::Connect(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status,
                body: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
