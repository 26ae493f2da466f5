//! Translates SIGINT/SIGTERM into cancellation of the run.

use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Spawn the signal listener for a run.
///
/// The first SIGINT or SIGTERM is logged and cancels `cancel`. If the token
/// is cancelled first (the run finished), the listener exits without
/// effect.
pub fn spawn_signal_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Run finished, signal listener exiting");
            }
            received = shutdown_signal() => match received {
                Ok(name) => {
                    warn!(signal = name, "{} received - terminating...", name);
                    cancel.cancel();
                }
                Err(e) => {
                    error!(error = %e, "Failed to install signal handler");
                }
            },
        }
    })
}

/// Resolves with the name of the first termination signal received.
#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    tokio::select! {
        result = signal::ctrl_c() => result.map(|_| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    signal::ctrl_c().await.map(|_| "ctrl-c")
}
