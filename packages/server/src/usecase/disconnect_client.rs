//! UseCase: クライアント切断処理

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, PresenceCount};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// ConnectionRegistry（レジストリの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// クライアント切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(PresenceCount)` - 登録解除後の在室数（残りの全員に通知済み）
    /// * `None` - 既に登録解除されていた（何もしない）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<PresenceCount> {
        match self.registry.deregister(connection_id).await {
            Some(presence) => {
                tracing::info!(
                    "Connection '{}' deregistered. Total users: {}",
                    connection_id,
                    presence
                );
                Some(presence)
            }
            None => {
                tracing::warn!(
                    "Connection '{}' was already deregistered, ignoring",
                    connection_id
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::MockConnectionRegistry;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_disconnect_client_success() {
        // テスト項目: 登録済みのコネクションを切断すると残りの在室数が返される
        // given (前提条件):
        let id = ConnectionId::generate();
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_deregister()
            .with(eq(id))
            .times(1)
            .returning(|_| Some(PresenceCount::new(2)));
        let usecase = DisconnectClientUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(&id).await;

        // then (期待する結果):
        assert_eq!(result, Some(PresenceCount::new(2)));
    }

    #[tokio::test]
    async fn test_disconnect_unknown_client_is_noop() {
        // テスト項目: 未登録のコネクションの切断は None を返すだけで失敗しない
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry.expect_deregister().times(1).returning(|_| None);
        let usecase = DisconnectClientUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(&ConnectionId::generate()).await;

        // then (期待する結果):
        assert_eq!(result, None);
    }
}
