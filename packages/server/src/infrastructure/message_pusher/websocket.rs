//! WebSocket を使った MessageBroadcaster 実装
//!
//! ## 責務
//!
//! - 接続中コネクションの送信キュー（`PusherChannel`）へのファンアウト
//!
//! ## 設計ノート
//!
//! 送信キューのマップ（`SharedChannels`）は `InMemoryConnectionRegistry` と共有します。
//! このマップの Mutex がサーバー全体の直列化ポイントです：
//! - レジストリの登録・登録解除と在室数の通知
//! - チャットメッセージのブロードキャスト
//!
//! はすべて同じロックの下で行われるため、全受信者が同じ順序でイベントを受け取ります。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ChatMessage, ConnectionId, DeliveryReport, MessageBroadcaster, PusherChannel},
    infrastructure::dto::{ServerEvent, encode_server_event},
};

/// Outbound queues of all registered connections
pub type ChannelMap = HashMap<ConnectionId, PusherChannel>;

/// Channel map shared between the registry and the broadcaster
pub type SharedChannels = Arc<Mutex<ChannelMap>>;

/// Encode `event` once and queue it on every channel in `channels`.
///
/// The caller must hold the `SharedChannels` lock. A closed queue is logged and
/// skipped; it never stops delivery to the remaining connections.
pub fn push_event(channels: &ChannelMap, event: &ServerEvent) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    let payload = match encode_server_event(event) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to encode server event {:?}: {}", event, e);
            return report;
        }
    };

    for (connection_id, sender) in channels.iter() {
        // ブロードキャストでは一部の送信失敗を許容
        match sender.send(payload.clone()) {
            Ok(()) => {
                tracing::trace!("Pushed event to connection '{}'", connection_id);
                report.record(true);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to push event to connection '{}': {}",
                    connection_id,
                    e
                );
                report.record(false);
            }
        }
    }

    report
}

/// WebSocket を使った MessageBroadcaster 実装
pub struct WebSocketBroadcaster {
    /// 接続中のコネクションの送信キュー
    channels: SharedChannels,
}

impl WebSocketBroadcaster {
    /// 新しい WebSocketBroadcaster を作成
    ///
    /// `channels` は `InMemoryConnectionRegistry` と同じものを渡すこと
    pub fn new(channels: SharedChannels) -> Self {
        Self { channels }
    }
}

#[async_trait]
impl MessageBroadcaster for WebSocketBroadcaster {
    async fn broadcast_message(&self, message: &ChatMessage) -> DeliveryReport {
        let event = ServerEvent::from(message.clone());

        let channels = self.channels.lock().await;
        let report = push_event(&channels, &event);

        tracing::debug!(
            "Broadcasted message from '{}' to {} connection(s) ({} failed)",
            message.user.as_str(),
            report.delivered,
            report.failed
        );
        report
    }
}
