//! WebSocket layer: handshake, wire messages, and the reload session.
//!
//! The device exposes its Lua REPL on a nanomsg bus bridged to WebSocket.
//! This layer speaks just enough of it to send one command and wait for
//! the acknowledgment.

pub mod client;
pub mod connection;
pub mod messages;
