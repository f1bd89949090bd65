//! Errors raised while talking to the Jellyfin REST API.

use thiserror::Error;

/// Result type for Jellyfin requests.
pub type JellyfinResult<T> = Result<T, JellyfinError>;

/// Failures of a single upstream round trip.
///
/// None of these are recovered locally: they abort the tool invocation that
/// triggered the request and are reported to the MCP host.
#[derive(Debug, Error)]
pub enum JellyfinError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request did not complete within the configured timeout.
    #[error("Request to {path} timed out")]
    Timeout { path: String },

    /// Network or protocol failure while sending the request.
    #[error("Request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Jellyfin answered with a non-success status code.
    #[error("Jellyfin returned {status} for {path}")]
    Status {
        path: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Invalid response from Jellyfin: {0}")]
    Decode(#[from] serde_json::Error),
}

impl JellyfinError {
    /// Classify a reqwest failure for the given request path.
    pub fn from_request(path: impl Into<String>, source: reqwest::Error) -> Self {
        let path = path.into();
        if source.is_timeout() {
            Self::Timeout { path }
        } else if let Some(status) = source.status() {
            Self::Status { path, status }
        } else {
            Self::Request { path, source }
        }
    }
}
