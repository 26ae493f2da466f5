//! The poll loop: probe, wait, repeat until the instance is available.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use rdswait_core::{InstanceStatus, ProbeError, StatusSource};

use crate::error::WaitError;
use crate::prober::Prober;
use crate::state::RunState;

/// Outcome of a successful wait.
#[derive(Debug, Clone)]
pub struct WaitSummary {
    /// Probes issued, including the one that observed the target state.
    pub probes: u32,

    /// Query failures that were retried under ignore-errors.
    pub retries: u32,

    /// The status that ended the wait.
    pub status: InstanceStatus,

    /// Time spent waiting.
    pub elapsed: Duration,
}

/// Probe `state.resource` until it reports the target state.
///
/// The first probe is issued immediately. Between probes the loop sleeps for
/// one [`DelayPolicy`](crate::DelayPolicy) draw; the sleep and every probe are
/// raced against `state.cancel`.
///
/// Error policy:
/// - [`ProbeError::Cancelled`] ends the run as cancelled, always.
/// - [`ProbeError::Fatal`] fails the run, always.
/// - every other error fails the run unless `state.ignore_errors` is set,
///   in which case it is logged and retried after the usual delay.
pub async fn wait_until_available<S>(
    prober: &Prober<S>,
    state: &RunState,
) -> Result<WaitSummary, WaitError>
where
    S: StatusSource + ?Sized,
{
    let started = Instant::now();
    let mut probes = 0u32;
    let mut retries = 0u32;

    loop {
        probes += 1;
        match prober.probe(&state.resource, &state.cancel).await {
            Ok(status) => {
                info!(status = %status, probe = probes, "instance status: {}", status);
                if status.is_available() {
                    return Ok(WaitSummary {
                        probes,
                        retries,
                        status,
                        elapsed: started.elapsed(),
                    });
                }
            }
            Err(ProbeError::Cancelled) => return Err(WaitError::Cancelled),
            Err(err @ ProbeError::Fatal(_)) => return Err(WaitError::Failed(err)),
            Err(
                err @ (ProbeError::NotFound(_)
                | ProbeError::Ambiguous { .. }
                | ProbeError::MissingStatus(_)
                | ProbeError::Transient(_)),
            ) => {
                if !state.ignore_errors {
                    return Err(WaitError::Failed(err));
                }
                retries += 1;
                warn!(error = %err, retries, "retrying: {}", err);
            }
        }

        let delay = state.delay.next_delay();
        debug!(delay = ?delay, "Waiting before next probe");
        tokio::select! {
            biased;
            _ = state.cancel.cancelled() => return Err(WaitError::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
