//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::ui::state::AppState;

/// Response body of `GET /api/presence`
#[derive(Debug, Serialize)]
pub struct PresenceDto {
    pub count: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the number of currently connected clients
pub async fn get_presence(State(state): State<Arc<AppState>>) -> Json<PresenceDto> {
    let count = state.get_presence_usecase.execute().await;
    Json(PresenceDto {
        count: count.value(),
    })
}
