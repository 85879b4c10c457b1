use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use parley_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::signaling::EventSink;

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Owns the outbound queue of every live WebSocket. Events are
/// serialized here and enqueued; each connection's writer task drains
/// its own queue, so a stalled socket cannot stall anyone else.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
        }
    }

    pub fn add_connection(&self, id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(id, tx);
    }

    pub fn remove_connection(&self, id: &ConnectionId) {
        self.inner.connections.remove(id);
    }

    pub fn send_event(&self, id: ConnectionId, event: &ServerEvent) {
        if let Some(conn) = self.inner.connections.get(&id) {
            match serde_json::to_string(event) {
                Ok(json) => {
                    if let Err(e) = conn.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", id, e);
                    }
                }
                Err(e) => error!("Failed to serialize server event: {}", e),
            }
        } else {
            debug!("Dropping event for disconnected connection {}", id);
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for SignalingService {
    async fn send(&self, target: ConnectionId, event: ServerEvent) {
        self.send_event(target, &event);
    }
}
