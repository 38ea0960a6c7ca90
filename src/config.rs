//! Trigger configuration loaded from environment variables.
//!
//! With nothing set, the trigger talks to the stock norns endpoint. Both
//! settings can be overridden through the environment (or a `.env` file via
//! `dotenvy`), which is mostly useful for devices that are not reachable as
//! `norns.local`.

use crate::error::TriggerError;

/// Endpoint of the norns WebSocket bus.
pub const DEFAULT_URL: &str = "ws://norns.local:5555/";

/// Subprotocol spoken by the norns bus.
pub const DEFAULT_SUBPROTOCOL: &str = "bus.sp.nanomsg.org";

/// Top-level trigger configuration.
///
/// Loaded once at startup via [`TriggerConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// WebSocket endpoint (e.g. `ws://norns.local:5555/`).
    pub url: String,

    /// Subprotocol requested during the handshake.
    pub subprotocol: String,
}

impl TriggerConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::InvalidUrl`] if `url` is not a `ws://` URL
    /// with a host, and [`TriggerError::InvalidSubprotocol`] if
    /// `subprotocol` is not a single header token.
    pub fn new(
        url: impl Into<String>,
        subprotocol: impl Into<String>,
    ) -> Result<Self, TriggerError> {
        let url = url.into();
        let subprotocol = subprotocol.into();
        validate_url(&url)?;
        validate_subprotocol(&subprotocol)?;
        Ok(Self { url, subprotocol })
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `NORNS_URL` and `NORNS_SUBPROTOCOL`, falling back to
    /// [`DEFAULT_URL`] and [`DEFAULT_SUBPROTOCOL`]. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails the checks of
    /// [`TriggerConfig::new`].
    pub fn from_env() -> Result<Self, TriggerError> {
        dotenvy::dotenv().ok();

        let url = env_or("NORNS_URL", DEFAULT_URL);
        let subprotocol = env_or("NORNS_SUBPROTOCOL", DEFAULT_SUBPROTOCOL);

        Self::new(url, subprotocol)
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            subprotocol: DEFAULT_SUBPROTOCOL.to_string(),
        }
    }
}

/// Reads an environment variable, returning `default` when it is missing
/// or blank.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn validate_url(url: &str) -> Result<(), TriggerError> {
    let invalid = |reason: &str| TriggerError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    // TLS is not compiled in; the device only serves plain ws.
    let Some(rest) = url.strip_prefix("ws://") else {
        return Err(invalid("scheme must be ws"));
    };
    let host = rest.split(['/', '?']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    Ok(())
}

fn validate_subprotocol(subprotocol: &str) -> Result<(), TriggerError> {
    let is_token = !subprotocol.is_empty()
        && subprotocol
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ',' | ';' | '"'));
    if is_token {
        Ok(())
    } else {
        Err(TriggerError::InvalidSubprotocol(subprotocol.to_string()))
    }
}
