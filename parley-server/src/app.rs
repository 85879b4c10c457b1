use std::sync::Arc;

use axum::{Router, routing::get};

use crate::dispatch::Relay;
use crate::signaling::{SignalingService, ws_handler};

/// Shared state handed to the WebSocket handler.
pub struct AppState {
    pub signaling: SignalingService,
    pub relay: Arc<Relay>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/ws", get(ws_handler)).with_state(state)
}
