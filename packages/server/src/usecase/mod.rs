//! UseCase layer.
//!
//! セッションハンドラ（UI 層）から呼ばれるアプリケーションロジックです。

mod connect_client;
mod disconnect_client;
mod error;
mod get_presence;
mod send_message;

pub use connect_client::{ConnectClientUseCase, ConnectedClient};
pub use disconnect_client::DisconnectClientUseCase;
pub use error::ConnectError;
pub use get_presence::GetPresenceUseCase;
pub use send_message::SendMessageUseCase;
