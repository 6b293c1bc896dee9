//! Error types for the Mode client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Mode client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or connection failure (DNS, connect, TLS, timeout).
    #[error("HTTP request failed")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the Mode API.
    #[error("API error ({status}) at {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body does not fit the expected record.
    #[error("Failed to decode {resource} at `{path}`: {message}")]
    Decode {
        resource: &'static str,
        path: String,
        message: String,
    },

    /// A local precondition was violated before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Signature token issuance or teardown failed.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Host and workspace do not form a valid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was closed while a request was waiting for a connection slot.
    #[error("Client is closed")]
    Closed,
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication(_)) || matches!(self.status(), Some(401 | 403))
    }
}
