//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use chatcast_shared::{
    protocol::ChatPayload,
    time::{Clock, local_time_label},
};

use crate::error::ClientError;

/// Label shown instead of the local user's own name
pub const OWN_NAME_LABEL: &str = "You";

/// Validate the display name chosen at startup.
pub fn validate_name(name: &str) -> Result<String, ClientError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::EmptyName);
    }
    Ok(name.to_string())
}

/// Build the payload for one input line, or `None` if the line is blank.
///
/// The text is sent as typed; only blank lines are filtered.
pub fn compose_message(name: &str, line: &str, clock: &dyn Clock) -> Option<ChatPayload> {
    if line.trim().is_empty() {
        return None;
    }

    Some(ChatPayload {
        user: name.to_string(),
        text: line.to_string(),
        timestamp: local_time_label(clock),
    })
}

/// Name to display for a message sender.
///
/// Names are not unique, so this only compares the display name.
pub fn display_name<'a>(sender: &'a str, own_name: &str) -> &'a str {
    if sender == own_name {
        OWN_NAME_LABEL
    } else {
        sender
    }
}

/// Check if the client should exit immediately based on the error type.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::Rejected(_) | ClientError::EmptyName)
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    // Don't reconnect if the error requires immediate exit
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}

#[cfg(test)]
mod tests {
    use chatcast_shared::time::FixedClock;

    use super::*;

    #[test]
    fn test_validate_name_trims_whitespace() {
        // テスト項目: 表示名の前後の空白は取り除かれる
        // given (前提条件):
        let name = "  alice ";

        // when (操作):
        let result = validate_name(name);

        // then (期待する結果):
        assert_eq!(result.unwrap(), "alice");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        // テスト項目: 空白のみの表示名はエラーになる
        // given (前提条件):
        let name = "   ";

        // when (操作):
        let result = validate_name(name);

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::EmptyName)));
    }

    #[test]
    fn test_compose_message_keeps_text_as_typed() {
        // テスト項目: 入力行はそのままテキストとして送信される
        // given (前提条件):
        let clock = FixedClock::new(1672567205123);

        // when (操作):
        let payload = compose_message("alice", " hello ", &clock).unwrap();

        // then (期待する結果):
        assert_eq!(payload.user, "alice");
        assert_eq!(payload.text, " hello ");
        assert_eq!(payload.timestamp.len(), 8);
    }

    #[test]
    fn test_compose_message_skips_blank_line() {
        // テスト項目: 空白のみの入力行は送信されない
        // given (前提条件):
        let clock = FixedClock::new(0);

        // when (操作):
        let payload = compose_message("alice", "  \t", &clock);

        // then (期待する結果):
        assert!(payload.is_none());
    }

    #[test]
    fn test_display_name_for_own_message() {
        // テスト項目: 自分の表示名と同じ送信者は "You" と表示される
        // given (前提条件):

        // when (操作):
        let own = display_name("alice", "alice");
        let other = display_name("bob", "alice");

        // then (期待する結果):
        assert_eq!(own, "You");
        assert_eq!(other, "bob");
    }

    #[test]
    fn test_should_exit_immediately_when_rejected() {
        // テスト項目: サーバーに拒否された場合、即座に終了すべきと判定される
        // given (前提条件):
        let error = ClientError::Rejected(403);

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // テスト項目: 再接続回数が上限未満の場合、再接続すべきと判定される
        // given (前提条件):
        let error = ClientError::ConnectionError("network error".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 3, 5);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_attempt_reconnect_at_limit() {
        // テスト項目: 再接続回数が上限に達した場合、再接続すべきではないと判定される
        // given (前提条件):
        let error = ClientError::ConnectionError("network error".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 5, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_attempt_reconnect_when_rejected() {
        // テスト項目: 拒否された場合は上限未満でも再接続しない
        // given (前提条件):
        let error = ClientError::Rejected(403);

        // when (操作):
        let result = should_attempt_reconnect(&error, 0, 5);

        // then (期待する結果):
        assert!(!result);
    }
}
