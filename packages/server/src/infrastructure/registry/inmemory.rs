//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! プロセス内の HashMap をレジストリとして使用します（単一インスタンスのみ）。
//!
//! 登録・登録解除では、マップのロックを保持したまま新しい在室数を
//! `push_event` で全コネクションに配信します。

use async_trait::async_trait;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, PresenceCount, PusherChannel, RegistryError},
    infrastructure::{
        dto::ServerEvent,
        message_pusher::{ChannelMap, SharedChannels, push_event},
    },
};

/// インメモリ Connection Registry 実装
pub struct InMemoryConnectionRegistry {
    /// 接続中のコネクションの送信キュー（`WebSocketBroadcaster` と共有）
    channels: SharedChannels,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new(channels: SharedChannels) -> Self {
        Self { channels }
    }
}

/// Announce the current cardinality of `channels` to every connection in it.
fn announce_presence(channels: &ChannelMap) -> PresenceCount {
    let count = PresenceCount::new(channels.len());
    let report = push_event(channels, &ServerEvent::from(count));
    tracing::debug!(
        "Announced presence count {} to {} connection(s) ({} failed)",
        count,
        report.delivered,
        report.failed
    );
    count
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(
        &self,
        connection_id: ConnectionId,
        channel: PusherChannel,
    ) -> Result<PresenceCount, RegistryError> {
        let mut channels = self.channels.lock().await;

        if channels.contains_key(&connection_id) {
            tracing::warn!(
                "Connection '{}' is already registered, ignoring",
                connection_id
            );
            return Err(RegistryError::AlreadyRegistered(connection_id));
        }

        channels.insert(connection_id, channel);
        Ok(announce_presence(&channels))
    }

    async fn deregister(&self, connection_id: &ConnectionId) -> Option<PresenceCount> {
        let mut channels = self.channels.lock().await;

        if channels.remove(connection_id).is_none() {
            tracing::debug!(
                "Connection '{}' is not registered, nothing to remove",
                connection_id
            );
            return None;
        }

        Some(announce_presence(&channels))
    }

    async fn count(&self) -> PresenceCount {
        let channels = self.channels.lock().await;
        PresenceCount::new(channels.len())
    }
}
