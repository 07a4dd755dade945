//! Entities.

use super::{ClientTimestamp, MessageError, MessageText, UserName};

/// A chat message on its way through one broadcast fan-out.
///
/// Never stored. Not linked to the connection it arrived on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub user: UserName,
    pub text: MessageText,
    pub timestamp: ClientTimestamp,
}

impl ChatMessage {
    pub fn new(user: UserName, text: MessageText, timestamp: ClientTimestamp) -> Self {
        Self {
            user,
            text,
            timestamp,
        }
    }

    /// Build a message from raw client fields, rejecting blank text.
    pub fn from_raw(user: String, text: String, timestamp: String) -> Result<Self, MessageError> {
        Ok(Self::new(
            UserName::new(user),
            MessageText::new(text)?,
            ClientTimestamp::new(timestamp),
        ))
    }
}
