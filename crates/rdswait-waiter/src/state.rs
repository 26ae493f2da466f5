//! Per-invocation run state.

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use rdswait_core::{ResourceId, RunId};

use crate::config::Config;
use crate::delay::DelayPolicy;

/// Everything one wait run needs. Created once at startup.
///
/// Only the cancellation token changes afterwards, and only from
/// not-cancelled to cancelled.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Correlates log lines of this run.
    pub run_id: RunId,

    /// Instance being watched.
    pub resource: ResourceId,

    /// Retry non-cancellation query failures.
    pub ignore_errors: bool,

    /// Delay between probes.
    pub delay: DelayPolicy,

    /// Shared with the signal listener.
    pub cancel: CancellationToken,

    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl RunState {
    /// Create a new RunState with a fresh cancellation token.
    pub fn new(resource: ResourceId, ignore_errors: bool, delay: DelayPolicy) -> Self {
        Self {
            run_id: RunId::generate(),
            resource,
            ignore_errors,
            delay,
            cancel: CancellationToken::new(),
            started_at: Utc::now(),
        }
    }

    /// Build the run state for a validated config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resource.clone(), config.ignore_errors, config.delay)
    }
}
