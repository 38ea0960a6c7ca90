//! Result of a finished reload session.

/// Line printed to stdout once the device has reloaded its script.
pub const UPDATED_STATUS_LINE: &str = "-- Updated Norns --";

/// How a session that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The device answered `<ok>` and the connection was closed by us.
    Acknowledged,
    /// The device ended the stream without acknowledging.
    PeerClosed,
}

impl ReloadOutcome {
    /// Returns `true` if the device confirmed the reload.
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }

    /// Returns the stdout status line for this outcome, if any.
    #[must_use]
    pub const fn status_line(&self) -> Option<&'static str> {
        match self {
            Self::Acknowledged => Some(UPDATED_STATUS_LINE),
            Self::PeerClosed => None,
        }
    }
}
