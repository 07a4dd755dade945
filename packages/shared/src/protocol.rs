//! WebSocket wire protocol.
//!
//! Every frame is a JSON text frame tagged by `type`:
//!
//! ```text
//! client → server  {"type":"send_message","user":"bob","text":"hi","timestamp":"10:00"}
//! server → client  {"type":"receive_message","user":"bob","text":"hi","timestamp":"10:00"}
//! server → client  {"type":"presence_update","count":3}
//! ```

use serde::{Deserialize, Serialize};

/// Chat message body shared by `send_message` and `receive_message`.
///
/// All fields are required; a frame missing any of them is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    /// Display name chosen by the sender
    pub user: String,
    /// Message body
    pub text: String,
    /// Time label formatted by the sending client
    pub timestamp: String,
}

/// Events sent from a client to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    SendMessage(ChatPayload),
}

/// Events pushed from the server to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    ReceiveMessage(ChatPayload),
    PresenceUpdate { count: usize },
}
