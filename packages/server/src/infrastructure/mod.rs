//! Infrastructure layer.
//!
//! Domain 層が定義する trait の具体的な実装を提供します。
//!
//! - `dto`: ワイヤープロトコルとドメインモデルの変換
//! - `message_pusher`: WebSocket の送信キューへのファンアウト
//! - `registry`: インメモリのコネクションレジストリ

pub mod dto;
pub mod message_pusher;
pub mod registry;
