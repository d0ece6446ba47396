//! WebSocket message protocol definitions.
//!
//! All messages are JSON-encoded and use snake_case type tags.

use serde::{Deserialize, Serialize};
use stacks_ledger::LedgerEvent;

/// Messages sent from client to server.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Keep-alive ping.
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A ledger event fanned out to every connected client.
    Event { event: LedgerEvent },

    /// Response to a ping.
    Pong,

    /// Something went wrong processing a client message.
    Error { message: String },
}

impl ServerMessage {
    /// Create an error message.
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}
