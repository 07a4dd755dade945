//! Broadcast chat server library.
//!
//! Clients connect over WebSocket, every message is relayed to every connected
//! client (sender included), and the number of connected clients is broadcast
//! on every connect and disconnect.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;

use config::{ConfigError, ServerConfig};
use infrastructure::{message_pusher::WebSocketBroadcaster, registry::InMemoryConnectionRegistry};
use ui::Server;
use usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetPresenceUseCase, SendMessageUseCase,
};

/// Wire up all dependencies for a server instance.
///
/// The registry lives exactly as long as the returned `Server`.
///
/// # Errors
///
/// Returns `ConfigError` if the allowed origin is not a valid origin.
pub fn build_server(config: &ServerConfig) -> Result<Server, ConfigError> {
    // Initialize dependencies in order:
    // 1. Shared outbound channels
    // 2. Registry and Broadcaster
    // 3. UseCases
    // 4. Server

    // 1. Outbound queues of all connections (the single serialization point)
    let channels = Arc::new(Mutex::new(HashMap::new()));

    // 2. Registry and Broadcaster share the same channels
    let registry = Arc::new(InMemoryConnectionRegistry::new(channels.clone()));
    let broadcaster = Arc::new(WebSocketBroadcaster::new(channels));

    // 3. UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(registry.clone()));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(registry.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(broadcaster));
    let get_presence_usecase = Arc::new(GetPresenceUseCase::new(registry));

    // 4. Server
    Ok(Server::new(
        connect_client_usecase,
        disconnect_client_usecase,
        send_message_usecase,
        get_presence_usecase,
        config.allowed_origin_header()?,
    ))
}
