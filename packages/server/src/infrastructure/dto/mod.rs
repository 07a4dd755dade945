//! Data Transfer Objects (DTOs) for the WebSocket protocol.
//!
//! The wire types live in `chatcast_shared::protocol` so the client can use
//! them too; this module holds the server-side conversion and encoding.

pub mod conversion;

pub use chatcast_shared::protocol::{ChatPayload, ClientEvent, ServerEvent};

/// Encode a server event as a JSON text frame body.
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

/// Decode a client text frame.
pub fn decode_client_event(text: &str) -> Result<ClientEvent, serde_json::Error> {
    serde_json::from_str(text)
}
