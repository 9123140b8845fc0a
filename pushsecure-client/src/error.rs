//! PushSecure client error types.

use thiserror::Error;

/// Result type for PushSecure client operations.
pub type Result<T> = std::result::Result<T, PushSecureError>;

/// PushSecure client errors.
///
/// Transport failures, server rejections and unparseable bodies are kept
/// apart so callers can tell "the server said no" from "the client could not
/// read the answer".
#[derive(Debug, Error)]
pub enum PushSecureError {
    /// The request never produced a response (unreachable, timeout, reset).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Protocol {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A body did not match the expected JSON shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The API host or a route could not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request could not be assembled (bad header name or value).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PushSecureError {
    /// Check if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if the server rejected the request.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol { .. })
    }

    /// Check if a body could not be (de)serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Get the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the response body of a protocol error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Protocol { body, .. } => Some(body),
            _ => None,
        }
    }
}
