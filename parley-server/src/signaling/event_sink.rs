use async_trait::async_trait;
use parley_core::{ConnectionId, ServerEvent};

/// Output seam between the relay logic and the transport. The WebSocket
/// layer implements this in production; tests substitute a capture sink.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event to one connection. Best effort: a dead or
    /// unknown target must never fail the sender's operation.
    async fn send(&self, target: ConnectionId, event: ServerEvent);
}
