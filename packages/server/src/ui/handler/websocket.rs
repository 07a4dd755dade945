//! WebSocket session handler.
//!
//! One upgraded connection runs two tasks:
//! - the receive loop, which processes inbound frames strictly in order
//! - the pusher loop, which drains the connection's outbound queue into the socket
//!
//! When either ends, the other is aborted and the connection is deregistered.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatMessage, ConnectionId, SessionEvent, SessionState},
    infrastructure::dto::{ClientEvent, decode_client_event},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let origin = headers.get(header::ORIGIN);
    if !is_origin_allowed(origin, &state.allowed_origin) {
        tracing::warn!(
            "Rejecting WebSocket connection from disallowed origin {:?}",
            origin
        );
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(ws
        .on_failed_upgrade(|e| tracing::warn!("WebSocket upgrade failed: {}", e))
        .on_upgrade(move |socket| handle_socket(socket, state)))
}

/// Browsers always send `Origin`; requests without one come from non-browser
/// clients and are let through.
fn is_origin_allowed(origin: Option<&HeaderValue>, allowed_origin: &HeaderValue) -> bool {
    match origin {
        Some(origin) => origin == allowed_origin,
        None => true,
    }
}

fn advance(session: SessionState, event: SessionEvent, connection_id: &str) -> SessionState {
    match session.next(event) {
        Ok(next) => {
            tracing::debug!("Session '{}': {:?} -> {:?}", connection_id, session, next);
            next
        }
        Err(e) => {
            tracing::warn!("Session '{}': {}", connection_id, e);
            session
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let mut session = SessionState::Connecting;

    // Create the outbound queue for this connection
    let (tx, rx) = mpsc::unbounded_channel();

    // Register inside the upgraded task so a failed upgrade never leaves an entry behind
    let connected = match state.connect_client_usecase.execute(tx).await {
        Ok(connected) => connected,
        Err(e) => {
            tracing::warn!("Failed to register connection: {}", e);
            advance(session, SessionEvent::Disconnected, "unregistered");
            return;
        }
    };
    let connection_id = connected.connection_id;
    let label = connection_id.to_string();
    session = advance(session, SessionEvent::Accepted, &label);

    let (sender, receiver) = socket.split();

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = tokio::spawn(receive_loop(receiver, state.clone(), connection_id));

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    session = advance(session, SessionEvent::Disconnected, &label);
    state
        .disconnect_client_usecase
        .execute(&connection_id)
        .await;

    debug_assert!(session.is_closed());
}

/// Spawns a task that receives events from the outbound queue and pushes them to the WebSocket sender.
///
/// # Arguments
///
/// * `rx` - Outbound queue of this connection
/// * `sender` - WebSocket sink to send events to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task. The task ends when the queue is closed
/// or a write to the socket fails.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.into())).await {
                tracing::debug!("Failed to write to socket: {}", e);
                break;
            }
        }
    })
}

async fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    connection_id: ConnectionId,
) {
    let label = connection_id.to_string();
    let mut session = SessionState::Open;

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                session = advance(session, SessionEvent::MessageReceived, &label);
                if let Some(message) = parse_chat_message(text.as_str()) {
                    state.send_message_usecase.execute(message).await;
                }
            }
            Message::Binary(data) => {
                tracing::warn!(
                    "Dropping binary frame ({} bytes) from '{}'",
                    data.len(),
                    connection_id
                );
            }
            Message::Close(_) => {
                tracing::info!("Connection '{}' requested close", connection_id);
                break;
            }
            // Ping/pong is handled automatically by the WebSocket protocol
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }
}

/// Parse a text frame into a validated chat message.
///
/// Malformed payloads and blank messages are logged and dropped.
fn parse_chat_message(text: &str) -> Option<ChatMessage> {
    let event = match decode_client_event(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Dropping malformed payload: {}", e);
            return None;
        }
    };

    match event {
        ClientEvent::SendMessage(payload) => match ChatMessage::try_from(payload) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!("Dropping message: {}", e);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_message_success() {
        // テスト項目: 正しい send_message はメッセージとして受け付けられる
        // given (前提条件):
        let text = r#"{"type":"send_message","user":"bob","text":"hi","timestamp":"10:00"}"#;

        // when (操作):
        let result = parse_chat_message(text);

        // then (期待する結果):
        let message = result.unwrap();
        assert_eq!(message.user.as_str(), "bob");
        assert_eq!(message.text.as_str(), "hi");
        assert_eq!(message.timestamp.as_str(), "10:00");
    }

    #[test]
    fn test_parse_chat_message_drops_blank_text() {
        // テスト項目: 空白のみのテキストは破棄される
        // given (前提条件):
        let text = r#"{"type":"send_message","user":"bob","text":"   ","timestamp":"10:00"}"#;

        // when (操作):
        let result = parse_chat_message(text);

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_chat_message_drops_missing_field() {
        // テスト項目: 必須フィールドが欠けたメッセージは破棄される
        // given (前提条件):
        let text = r#"{"type":"send_message","text":"hi","timestamp":"10:00"}"#;

        // when (操作):
        let result = parse_chat_message(text);

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_chat_message_drops_non_json() {
        // テスト項目: JSON でないテキストは破棄される
        // given (前提条件):
        let text = "hello";

        // when (操作):
        let result = parse_chat_message(text);

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[test]
    fn test_origin_allowed_when_matching() {
        // テスト項目: 許可された Origin からの接続は受け付けられる
        // given (前提条件):
        let allowed = HeaderValue::from_static("http://localhost:3000");
        let origin = HeaderValue::from_static("http://localhost:3000");

        // when (操作):
        let result = is_origin_allowed(Some(&origin), &allowed);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_origin_rejected_when_different() {
        // テスト項目: 許可されていない Origin からの接続は拒否される
        // given (前提条件):
        let allowed = HeaderValue::from_static("http://localhost:3000");
        let origin = HeaderValue::from_static("http://evil.example");

        // when (操作):
        let result = is_origin_allowed(Some(&origin), &allowed);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_origin_absent_is_allowed() {
        // テスト項目: Origin ヘッダーが無い接続（ブラウザ以外）は受け付けられる
        // given (前提条件):
        let allowed = HeaderValue::from_static("http://localhost:3000");

        // when (操作):
        let result = is_origin_allowed(None, &allowed);

        // then (期待する結果):
        assert!(result);
    }
}
