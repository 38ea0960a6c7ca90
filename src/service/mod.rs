//! Service layer: ties configuration, transport and session together.
//!
//! [`ReloadTrigger`] is the entry point used by the binary.

pub mod reload_trigger;

pub use reload_trigger::ReloadTrigger;
