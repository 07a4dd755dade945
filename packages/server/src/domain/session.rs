//! Per-connection session lifecycle.
//!
//! ```text
//! Connecting ──Accepted──▶ Open ──Disconnected──▶ Closed
//!     │                    │  ▲
//!     │                    └──┘ MessageReceived
//!     └──────────Disconnected──────────▶ Closed
//! ```
//!
//! `Closed` is terminal. A dropped connection never reopens; the client has to
//! start a new session with a new `ConnectionId`.

use super::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The connection was accepted and registered
    Accepted,
    /// A message-send event arrived on the connection
    MessageReceived,
    /// Close frame, read/write error or end of stream
    Disconnected,
}

impl SessionState {
    /// Apply an event and return the next state.
    pub fn next(self, event: SessionEvent) -> Result<SessionState, SessionError> {
        match (self, event) {
            (SessionState::Connecting, SessionEvent::Accepted) => Ok(SessionState::Open),
            (SessionState::Open, SessionEvent::MessageReceived) => Ok(SessionState::Open),
            (SessionState::Connecting | SessionState::Open, SessionEvent::Disconnected) => {
                Ok(SessionState::Closed)
            }
            (from, event) => Err(SessionError::InvalidTransition { from, event }),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SessionState::Closed)
    }
}
