//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatMessage, MessageError, PresenceCount};

use super::{ChatPayload, ServerEvent};

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<ChatPayload> for ChatMessage {
    type Error = MessageError;

    fn try_from(dto: ChatPayload) -> Result<Self, Self::Error> {
        ChatMessage::from_raw(dto.user, dto.text, dto.timestamp)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<ChatMessage> for ChatPayload {
    fn from(model: ChatMessage) -> Self {
        Self {
            user: model.user.into_string(),
            text: model.text.into_string(),
            timestamp: model.timestamp.into_string(),
        }
    }
}

impl From<PresenceCount> for ServerEvent {
    fn from(count: PresenceCount) -> Self {
        ServerEvent::PresenceUpdate {
            count: count.value(),
        }
    }
}

impl From<ChatMessage> for ServerEvent {
    fn from(model: ChatMessage) -> Self {
        ServerEvent::ReceiveMessage(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(text: &str) -> ChatPayload {
        ChatPayload {
            user: "bob".to_string(),
            text: text.to_string(),
            timestamp: "10:00".to_string(),
        }
    }

    #[test]
    fn test_payload_to_domain() {
        // テスト項目: ChatPayload がドメインエンティティに変換される
        // given (前提条件):
        let dto = payload("hi");

        // when (操作):
        let message = ChatMessage::try_from(dto).unwrap();

        // then (期待する結果):
        assert_eq!(message.user.as_str(), "bob");
        assert_eq!(message.text.as_str(), "hi");
        assert_eq!(message.timestamp.as_str(), "10:00");
    }

    #[test]
    fn test_blank_payload_is_rejected() {
        // テスト項目: テキストが空白のみの ChatPayload は変換できない
        // given (前提条件):
        let dto = payload("  ");

        // when (操作):
        let result = ChatMessage::try_from(dto);

        // then (期待する結果):
        assert_eq!(result, Err(MessageError::EmptyText));
    }

    #[test]
    fn test_domain_to_receive_message_is_verbatim() {
        // テスト項目: ドメインエンティティが受信時と同じ内容の receive_message に変換される
        // given (前提条件):
        let dto = payload(" hi there ");
        let message = ChatMessage::try_from(dto.clone()).unwrap();

        // when (操作):
        let event: ServerEvent = message.into();

        // then (期待する結果):
        assert_eq!(event, ServerEvent::ReceiveMessage(dto));
    }

    #[test]
    fn test_presence_count_to_presence_update() {
        // テスト項目: PresenceCount が presence_update に変換される
        // given (前提条件):
        let count = PresenceCount::new(2);

        // when (操作):
        let event: ServerEvent = count.into();

        // then (期待する結果):
        assert_eq!(event, ServerEvent::PresenceUpdate { count: 2 });
    }
}
