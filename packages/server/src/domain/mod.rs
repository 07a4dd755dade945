//! Domain layer.
//!
//! 接続・メッセージ・在室数のモデルと、Infrastructure 層が実装するインターフェース
//! （`ConnectionRegistry`, `MessageBroadcaster`）を定義します。

pub mod broadcaster;
pub mod entity;
pub mod error;
pub mod registry;
pub mod session;
pub mod value_object;

pub use broadcaster::{DeliveryReport, MessageBroadcaster, PusherChannel};
pub use entity::ChatMessage;
pub use error::{MessageError, RegistryError, SessionError};
pub use registry::ConnectionRegistry;
pub use session::{SessionEvent, SessionState};
pub use value_object::{ClientTimestamp, ConnectionId, MessageText, PresenceCount, UserName};
