//! Errors surfaced by a wait run.

use thiserror::Error;

use rdswait_client::ClientError;
use rdswait_core::ProbeError;

/// Invalid command line or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("instance identifier must not be empty")]
    EmptyIdentifier,

    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    #[error("base delay must be greater than zero")]
    ZeroBaseDelay,

    #[error("base delay must be at most {max_secs} seconds")]
    BaseDelayTooLarge { max_secs: u64 },

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// How a poll loop ended when it did not reach the target state.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The run was cancelled, by a signal or by the caller.
    #[error("wait cancelled")]
    Cancelled,

    /// A probe failed and the error policy gave up.
    #[error(transparent)]
    Failed(ProbeError),
}

/// Anything that can end a run unsuccessfully.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to create status client: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Wait(#[from] WaitError),
}
