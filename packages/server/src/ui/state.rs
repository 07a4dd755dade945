//! Server state shared by all handlers.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetPresenceUseCase, SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// GetPresenceUseCase（在室数取得のユースケース）
    pub get_presence_usecase: Arc<GetPresenceUseCase>,
    /// Origin allowed to open cross-origin connections
    pub allowed_origin: HeaderValue,
}
