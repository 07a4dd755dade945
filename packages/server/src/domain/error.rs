//! Domain errors.

use thiserror::Error;

use super::{ConnectionId, SessionEvent, SessionState};

/// Errors raised by the connection registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The connection is already registered; the registry is left unchanged
    #[error("Connection '{0}' is already registered")]
    AlreadyRegistered(ConnectionId),
}

/// Errors raised while building a chat message from client input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message text is empty or whitespace only
    #[error("Message text is empty")]
    EmptyText,
}

/// Errors raised by the session state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid session transition: {event:?} while {from:?}")]
    InvalidTransition {
        from: SessionState,
        event: SessionEvent,
    },
}
