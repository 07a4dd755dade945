//! メッセージ送信（通知）の実装
//!
//! ## 実装
//!
//! - `websocket`: WebSocket コネクションの送信キューを使った実装

pub mod websocket;

pub use websocket::{ChannelMap, SharedChannels, WebSocketBroadcaster, push_event};
