//! Core domain errors.

use thiserror::Error;

use crate::ids::ResourceId;

/// Failure reported by a [`StatusSource`](crate::StatusSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request was cancelled before the provider answered.
    #[error("request cancelled")]
    Cancelled,

    /// The provider rejected the request or could not be reached.
    #[error("{message}")]
    Provider {
        /// Provider error code, when the provider sent one.
        code: Option<String>,
        message: String,
    },

    /// The provider answered with something that is not a status document.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The request could not be built (bad endpoint, bad identifier encoding).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl SourceError {
    /// Provider error without an error code.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            code: None,
            message: message.into(),
        }
    }
}

/// Classified outcome of a failed probe.
///
/// The set is closed: the poll loop matches it exhaustively to decide
/// whether to retry, fail, or stop.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The run was cancelled while the probe was in flight.
    #[error("probe cancelled")]
    Cancelled,

    /// The query matched no instance.
    #[error("no such instance: {0}")]
    NotFound(ResourceId),

    /// The query matched more than one instance.
    #[error("status query for {identifier} matched {matches} instances")]
    Ambiguous {
        identifier: ResourceId,
        matches: usize,
    },

    /// The single match carried no status value.
    #[error("no status for instance: {0}")]
    MissingStatus(ResourceId),

    /// The provider call failed.
    #[error("status query failed: {0}")]
    Transient(#[source] SourceError),

    /// The provider call failed in a way rdswait does not recognize.
    #[error("unrecoverable status query failure: {0}")]
    Fatal(#[source] SourceError),
}
