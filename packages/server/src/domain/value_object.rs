//! Value objects.

use std::fmt;

use uuid::Uuid;

use super::MessageError;

/// Server-assigned identity of one WebSocket connection.
///
/// A reconnecting client always gets a fresh `ConnectionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a new random connection ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ConnectionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Self-declared display name. Free-form, not unique, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Message body. Must contain at least one non-whitespace character.
///
/// The text is kept verbatim (no trimming) so it is relayed exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, MessageError> {
        if value.trim().is_empty() {
            return Err(MessageError::EmptyText);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = MessageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Time label formatted by the sending client. Opaque to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTimestamp(String);

impl ClientTimestamp {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Number of currently open connections.
///
/// Derived from registry cardinality only, so it can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PresenceCount(usize);

impl PresenceCount {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PresenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_generate_is_unique() {
        // テスト項目: 生成される ConnectionId は毎回異なる
        // given (前提条件):

        // when (操作):
        let id1 = ConnectionId::generate();
        let id2 = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_message_text_accepts_non_blank_text() {
        // テスト項目: 空白以外の文字を含むテキストは受け付けられ、そのまま保持される
        // given (前提条件):
        let text = "  hi  ".to_string();

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "  hi  ");
    }

    #[test]
    fn test_message_text_rejects_empty_text() {
        // テスト項目: 空文字列は EmptyText エラーになる
        // given (前提条件):
        let text = String::new();

        // when (操作):
        let result = MessageText::new(text);

        // then (期待する結果):
        assert_eq!(result, Err(MessageError::EmptyText));
    }

    #[test]
    fn test_message_text_rejects_whitespace_only_text() {
        // テスト項目: 空白文字のみのテキストは EmptyText エラーになる
        // given (前提条件):
        let text = " \t\n ".to_string();

        // when (操作):
        let result = MessageText::try_from(text);

        // then (期待する結果):
        assert_eq!(result, Err(MessageError::EmptyText));
    }

    #[test]
    fn test_user_name_is_not_validated() {
        // テスト項目: UserName は空文字列でも受け付けられる（検証しない）
        // given (前提条件):
        let name = String::new();

        // when (操作):
        let user = UserName::new(name);

        // then (期待する結果):
        assert_eq!(user.as_str(), "");
    }

    #[test]
    fn test_presence_count_default_is_zero() {
        // テスト項目: PresenceCount の初期値は 0
        // given (前提条件):

        // when (操作):
        let count = PresenceCount::default();

        // then (期待する結果):
        assert_eq!(count.value(), 0);
    }
}
