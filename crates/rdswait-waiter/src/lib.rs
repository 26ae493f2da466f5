//! rdswait: block until a database instance reports `available`.
//!
//! A [`Prober`] asks a [`StatusSource`](rdswait_core::StatusSource) for the
//! instance's status and classifies what comes back; [`wait_until_available`]
//! drives it on a jittered interval and applies the error policy. A
//! background listener turns SIGINT/SIGTERM into cancellation of the run.

pub mod config;
pub mod delay;
pub mod error;
pub mod poll;
pub mod prober;
pub mod signals;
pub mod state;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use tracing::{error, info, Instrument};

use rdswait_client::HttpStatusSource;

pub use config::{Args, Config};
pub use delay::DelayPolicy;
pub use error::{ConfigError, RunError, WaitError};
pub use poll::{wait_until_available, WaitSummary};
pub use prober::Prober;
pub use signals::spawn_signal_listener;
pub use state::RunState;

/// Run one wait against the configured HTTP status API.
pub async fn run(config: Config) -> Result<WaitSummary, RunError> {
    let source = Arc::new(HttpStatusSource::new(config.http.clone())?);
    let state = RunState::from_config(&config);

    info!(
        run_id = %state.run_id,
        instance = %state.resource,
        endpoint = %source.base_url(),
        ignore_errors = state.ignore_errors,
        started_at = %state.started_at.to_rfc3339(),
        "Waiting for instance to become available"
    );

    let listener = spawn_signal_listener(state.cancel.clone());
    let prober = Prober::new(source);
    let span = tracing::info_span!("wait", run_id = %state.run_id, instance = %state.resource);
    let result = wait_until_available(&prober, &state).instrument(span).await;

    // Lets the listener exit.
    state.cancel.cancel();
    if let Err(e) = listener.await {
        error!(error = %e, "Signal listener failed");
    }

    Ok(result?)
}
