//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 検証済みメッセージが Broadcaster にそのまま渡されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージのブロードキャスト
//! - エッジケース：一部の配信失敗（呼び出し元にはエラーにならない）

use std::sync::Arc;

use crate::domain::{ChatMessage, DeliveryReport, MessageBroadcaster};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// MessageBroadcaster（メッセージ通知の抽象化）
    broadcaster: Arc<dyn MessageBroadcaster>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(broadcaster: Arc<dyn MessageBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// メッセージ送信を実行
    ///
    /// 送信者を含む全てのコネクションにブロードキャストする。
    /// 配信失敗は `DeliveryReport` に集計されるのみで、再送はしない。
    pub async fn execute(&self, message: ChatMessage) -> DeliveryReport {
        tracing::info!(
            "Message received: [{}]: {}",
            message.user.as_str(),
            message.text.as_str()
        );

        let report = self.broadcaster.broadcast_message(&message).await;
        if report.failed > 0 {
            tracing::warn!(
                "Message from '{}' could not be delivered to {} connection(s)",
                message.user.as_str(),
                report.failed
            );
        }
        report
    }
}
