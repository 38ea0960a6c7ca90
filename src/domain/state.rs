//! Lifecycle of a single reload session.
//!
//! A session only ever moves forward: `Connecting → Open → Closed`. It
//! reaches `Closed` either because the device acknowledged the reload or
//! because the peer ended the stream first.

use std::fmt;

use crate::error::TriggerError;

/// Lifecycle state of the one connection a trigger owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// Handshake has not completed yet.
    #[default]
    Connecting,
    /// Handshake completed; the session may send and listen.
    Open,
    /// Terminal state. Nothing is sent or read afterwards.
    Closed,
}

impl TriggerState {
    /// Creates a session in the `Connecting` state.
    #[must_use]
    pub const fn new() -> Self {
        Self::Connecting
    }

    /// Moves `Connecting → Open`.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::InvalidTransition`] from any other state.
    pub fn open(&mut self) -> Result<(), TriggerError> {
        self.transition(Self::Open)
    }

    /// Moves `Open → Closed`.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::InvalidTransition`] from any other state.
    pub fn close(&mut self) -> Result<(), TriggerError> {
        self.transition(Self::Closed)
    }

    /// Returns `true` while the connection is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` once the session has finished.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    fn transition(&mut self, to: Self) -> Result<(), TriggerError> {
        match (*self, to) {
            (Self::Connecting, Self::Open) | (Self::Open, Self::Closed) => {
                tracing::debug!(from = %self, to = %to, "session state transition");
                *self = to;
                Ok(())
            }
            (from, to) => Err(TriggerError::InvalidTransition { from, to }),
        }
    }
}

impl fmt::Display for TriggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}
