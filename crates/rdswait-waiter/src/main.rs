//! rdswait binary

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rdswait_waiter::{Args, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match rdswait_waiter::run(config).await {
        Ok(summary) => {
            info!(
                probes = summary.probes,
                retries = summary.retries,
                elapsed_secs = summary.elapsed.as_secs(),
                "Instance is available"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Wait failed");
            ExitCode::FAILURE
        }
    }
}
