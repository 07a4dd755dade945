//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - 新しい ConnectionId の払い出しとレジストリへの登録
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規コネクションの登録
//! - 異常系：レジストリが登録を拒否した場合

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, PresenceCount, PusherChannel};

use super::error::ConnectError;

/// 登録されたコネクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedClient {
    pub connection_id: ConnectionId,
    /// 登録直後に通知された在室数
    pub presence: PresenceCount,
}

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// ConnectionRegistry（レジストリの抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - コネクションへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectedClient)` - 登録成功（在室数は全員に通知済み）
    /// * `Err(ConnectError)` - 登録失敗
    pub async fn execute(&self, sender: PusherChannel) -> Result<ConnectedClient, ConnectError> {
        let connection_id = ConnectionId::generate();
        let presence = self.registry.register(connection_id, sender).await?;

        tracing::info!(
            "Connection '{}' registered. Total users: {}",
            connection_id,
            presence
        );

        Ok(ConnectedClient {
            connection_id,
            presence,
        })
    }
}
