//! UseCase: 在室数の取得

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, PresenceCount};

/// 在室数取得のユースケース
pub struct GetPresenceUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl GetPresenceUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> PresenceCount {
        self.registry.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::MockConnectionRegistry;

    #[tokio::test]
    async fn test_get_presence_returns_registry_count() {
        // テスト項目: レジストリの在室数がそのまま返される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_count()
            .times(1)
            .returning(|| PresenceCount::new(3));
        let usecase = GetPresenceUseCase::new(Arc::new(registry));

        // when (操作):
        let count = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(count.value(), 3);
    }
}
