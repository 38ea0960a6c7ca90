//! Wire messages exchanged with the norns bus.
//!
//! The bus carries plain Lua text: we send one chunk of code and the device
//! echoes `<ok>` once it has evaluated it.

use tokio_tungstenite::tungstenite::Message;

/// Lua sent to the device to reload the current script.
pub const RELOAD_COMMAND: &str = "norns.script.load()\n";

/// Payload the device answers with once the command has run.
pub const ACK: &str = "<ok>";

/// Builds the text frame carrying [`RELOAD_COMMAND`].
#[must_use]
pub fn reload_command() -> Message {
    Message::text(RELOAD_COMMAND)
}

/// Classification of a data frame received from the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The payload is the acknowledgment.
    Ack,
    /// Any other payload, e.g. REPL output or `busy`.
    Other(String),
}

impl Reply {
    /// Classifies a payload, ignoring surrounding whitespace.
    ///
    /// U+FEFF is treated as whitespace as well.
    #[must_use]
    pub fn classify(payload: &str) -> Self {
        let trimmed = payload.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if trimmed == ACK {
            Self::Ack
        } else {
            Self::Other(payload.to_string())
        }
    }

    /// Classifies a frame.
    ///
    /// Text frames and UTF-8 binary frames are classified by payload.
    /// Control frames and non-UTF-8 binary frames yield `None`.
    #[must_use]
    pub fn from_message(message: &Message) -> Option<Self> {
        match message {
            Message::Text(text) => Some(Self::classify(text.as_str())),
            Message::Binary(bytes) => std::str::from_utf8(bytes).ok().map(Self::classify),
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => None,
        }
    }

    /// Returns `true` for [`Reply::Ack`].
    #[must_use]
    pub const fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }
}
