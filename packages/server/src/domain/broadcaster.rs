//! Broadcast Channel trait 定義

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ChatMessage;

/// Outbound queue of one connection.
///
/// Unbounded so a slow peer never blocks delivery to the others.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Outcome of one fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryReport {
    /// Connections the event was queued for
    pub delivered: usize,
    /// Connections whose outbound queue was already closed
    pub failed: usize,
}

impl DeliveryReport {
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.delivered += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Message Broadcaster trait
///
/// メッセージを登録中の全コネクション（送信者を含む）に配信します。
/// 個々の配信失敗は配信ループを止めず、呼び出し元にエラーとして返しません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageBroadcaster: Send + Sync {
    /// メッセージを全コネクションにブロードキャスト
    async fn broadcast_message(&self, message: &ChatMessage) -> DeliveryReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_report_records_outcomes() {
        // テスト項目: 配信結果が成功・失敗ごとに集計される
        // given (前提条件):
        let mut report = DeliveryReport::default();

        // when (操作):
        report.record(true);
        report.record(false);
        report.record(true);

        // then (期待する結果):
        assert_eq!(
            report,
            DeliveryReport {
                delivered: 2,
                failed: 1
            }
        );
    }
}
