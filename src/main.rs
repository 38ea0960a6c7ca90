//! norns-reload entry point.
//!
//! Asks the norns to reload its current script and prints a status line
//! once it has.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use norns_reload::config::TriggerConfig;
use norns_reload::error::TriggerError;
use norns_reload::service::ReloadTrigger;
use norns_reload::ReloadOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the status line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run().await {
        Ok(outcome) => {
            if let Some(line) = outcome.status_line() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "reload failed");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> Result<ReloadOutcome, TriggerError> {
    // Load configuration
    let config = TriggerConfig::from_env()?;

    ReloadTrigger::new(config).run().await
}
