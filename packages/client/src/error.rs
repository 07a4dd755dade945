//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Display name is empty or whitespace only
    #[error("Display name must not be empty")]
    EmptyName,

    /// Server refused the WebSocket upgrade (e.g. disallowed origin)
    #[error("Connection rejected by server (HTTP {0})")]
    Rejected(u16),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
