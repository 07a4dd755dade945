//! Connection Registry trait 定義
//!
//! 接続中のコネクションの集合を管理し、在室数の唯一の情報源となります。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, PresenceCount, PusherChannel, RegistryError};

/// Connection Registry trait
///
/// 登録・登録解除は在室数の通知と不可分に行われます。実装は、集合を変更した
/// ロックを保持したまま新しい在室数を全コネクションに配信しなければなりません。
/// これにより、通知される在室数が飛んだり前後したりすることはありません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// コネクションを登録し、新しい在室数を全コネクション（自身を含む）に通知
    ///
    /// 登録済みの場合は何も変更せず `RegistryError::AlreadyRegistered` を返す
    async fn register(
        &self,
        connection_id: ConnectionId,
        channel: PusherChannel,
    ) -> Result<PresenceCount, RegistryError>;

    /// コネクションを登録解除し、新しい在室数を残りのコネクションに通知
    ///
    /// 未登録の場合は何もせず `None` を返す（在室数は減らない）
    async fn deregister(&self, connection_id: &ConnectionId) -> Option<PresenceCount>;

    /// 現在の在室数を取得
    async fn count(&self) -> PresenceCount;
}
