//! Profile Sample Application Entry Point
//!
//! Runs the lens scenarios over a sample profile and logs what each update
//! copied and shared. Set `RUST_LOG=profile=debug` to see every step.

use profile::error::ProfileError;
use profile::scenario::run_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), ProfileError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,profile=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Profile Sample Application...");

    match run_all() {
        Ok(reports) => {
            tracing::info!(count = reports.len(), "All scenarios passed");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "Scenario failed");
            Err(error)
        }
    }
}
