//! Reload trigger: connects to the device and drives one session.

use crate::config::TriggerConfig;
use crate::domain::ReloadOutcome;
use crate::error::TriggerError;
use crate::ws::{client, connection};

/// One-shot remote trigger for `norns.script.load()`.
///
/// Each call to [`ReloadTrigger::run`] opens its own connection; nothing is
/// shared between runs.
#[derive(Debug, Clone)]
pub struct ReloadTrigger {
    config: TriggerConfig,
}

impl ReloadTrigger {
    /// Creates a trigger for the given endpoint.
    #[must_use]
    pub const fn new(config: TriggerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this trigger dials.
    #[must_use]
    pub const fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Connects, sends the reload command and waits for the acknowledgment.
    ///
    /// Never retries and never times out.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::Connect`] if the device cannot be reached,
    /// or the session errors of [`connection::run_session`].
    pub async fn run(&self) -> Result<ReloadOutcome, TriggerError> {
        tracing::info!(
            url = %self.config.url,
            subprotocol = %self.config.subprotocol,
            "connecting to norns"
        );
        let socket = client::connect(&self.config).await?;
        connection::run_session(socket).await
    }
}
