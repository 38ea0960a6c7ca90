//! # norns-reload
//!
//! Reloads the running script on a norns sound computer.
//!
//! The device exposes its Lua REPL over a nanomsg bus bridged to WebSocket.
//! This crate opens one connection to it, sends `norns.script.load()`, and
//! closes the connection once the device answers `<ok>`.
//!
//! ## Architecture
//!
//! ```text
//! main (tracing, config)
//!     │
//!     ├── ReloadTrigger (service/)
//!     │
//!     ├── client::connect (ws/)       handshake, subprotocol
//!     ├── connection::run_session     send once, listen, close on ack
//!     │
//!     └── TriggerState, ReloadOutcome (domain/)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

pub use config::TriggerConfig;
pub use domain::ReloadOutcome;
pub use error::TriggerError;
pub use service::ReloadTrigger;
