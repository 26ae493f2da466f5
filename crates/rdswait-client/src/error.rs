//! Error types for the status client.

use thiserror::Error;

/// Errors that can occur while constructing the status client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// HTTP client construction failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
