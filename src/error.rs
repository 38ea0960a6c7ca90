//! Trigger error types with process exit code mapping.
//!
//! [`TriggerError`] is the single error type of the crate. Each variant maps
//! to a `sysexits`-style exit code so scripts wrapping the binary can tell a
//! bad configuration apart from an unreachable device.

use tokio_tungstenite::tungstenite::Error as WsError;

use crate::domain::TriggerState;

/// Errors raised while reloading the norns script.
///
/// # Exit Codes
///
/// | Code | Category              | Variants                           |
/// |------|-----------------------|------------------------------------|
/// | 78   | Configuration         | `InvalidUrl`, `InvalidSubprotocol` |
/// | 69   | Device unavailable    | `Connect`                          |
/// | 74   | I/O on open session   | `Send`, `Receive`                  |
/// | 70   | Internal              | `InvalidTransition`                |
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// The configured endpoint is not a usable `ws://` URL.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configured subprotocol cannot be sent as a header value.
    #[error("invalid subprotocol {0:?}")]
    InvalidSubprotocol(String),

    /// The TCP connection or WebSocket handshake failed.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        /// Endpoint that was dialled.
        url: String,
        /// Underlying transport or handshake error.
        #[source]
        source: WsError,
    },

    /// The reload command could not be written to the open connection.
    #[error("failed to send reload command: {0}")]
    Send(#[source] WsError),

    /// The connection failed while waiting for the acknowledgment.
    #[error("connection error while waiting for acknowledgment: {0}")]
    Receive(#[source] WsError),

    /// The session lifecycle was driven out of order.
    #[error("invalid state transition: {from} -> {to}")]
    InvalidTransition {
        /// State the session was in.
        from: TriggerState,
        /// State that was requested.
        to: TriggerState,
    },
}

impl TriggerError {
    /// Returns the process exit code for this variant.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidUrl { .. } | Self::InvalidSubprotocol(_) => 78,
            Self::Connect { .. } => 69,
            Self::Send(_) | Self::Receive(_) => 74,
            Self::InvalidTransition { .. } => 70,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_ex_config() {
        let err = TriggerError::InvalidUrl {
            url: "http://norns.local".to_string(),
            reason: "scheme must be ws".to_string(),
        };
        assert_eq!(err.exit_code(), 78);
        assert_eq!(
            TriggerError::InvalidSubprotocol(String::new()).exit_code(),
            78
        );
    }

    #[test]
    fn connect_error_maps_to_ex_unavailable() {
        let err = TriggerError::Connect {
            url: "ws://norns.local:5555/".to_string(),
            source: WsError::ConnectionClosed,
        };
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("ws://norns.local:5555/"));
    }

    #[test]
    fn session_io_errors_map_to_ex_ioerr() {
        assert_eq!(TriggerError::Send(WsError::AlreadyClosed).exit_code(), 74);
        assert_eq!(TriggerError::Receive(WsError::AlreadyClosed).exit_code(), 74);
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = TriggerError::InvalidTransition {
            from: TriggerState::Closed,
            to: TriggerState::Open,
        };
        assert_eq!(err.exit_code(), 70);
        assert_eq!(err.to_string(), "invalid state transition: closed -> open");
    }
}
