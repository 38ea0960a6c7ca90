//! Domain layer: session lifecycle and outcomes.
//!
//! Contains the core domain types that are independent of the WebSocket
//! transport:
//! - [`TriggerState`]: forward-only lifecycle of the single connection
//! - [`ReloadOutcome`]: how a session ended

pub mod outcome;
pub mod state;

pub use outcome::{ReloadOutcome, UPDATED_STATUS_LINE};
pub use state::TriggerState;
