use async_trait::async_trait;
use parley_core::{ConnectionId, Member, RoomMessage, ServerEvent};
use parley_server::EventSink;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Mock EventSink that captures all outbound events.
#[derive(Clone)]
pub struct MockEventSink {
    /// Channel to stream captured events.
    tx: mpsc::UnboundedSender<(ConnectionId, ServerEvent)>,
    /// All captured events, in send order (for verification).
    events: Arc<Mutex<Vec<(ConnectionId, ServerEvent)>>>,
}

impl MockEventSink {
    /// Create a new MockEventSink and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ConnectionId, ServerEvent)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = Self {
            tx,
            events: Arc::new(Mutex::new(Vec::new())),
        };
        (sink, rx)
    }

    /// Create a MockEventSink without a receiver (events are only stored).
    pub fn new_stored_only() -> Self {
        let (tx, _rx) = mpsc::unbounded_channel();
        Self {
            tx,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every event delivered to a specific connection, in send order.
    pub async fn events_for(&self, id: &ConnectionId) -> Vec<ServerEvent> {
        self.events
            .lock()
            .await
            .iter()
            .filter(|(target, _)| target == id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// The most recent user-list delivered to a connection (if any).
    pub async fn last_user_list_for(&self, id: &ConnectionId) -> Option<Vec<Member>> {
        self.events_for(id)
            .await
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ServerEvent::UserList { members } => Some(members),
                _ => None,
            })
    }

    /// All chat-stream messages delivered to a connection.
    pub async fn messages_for(&self, id: &ConnectionId) -> Vec<RoomMessage> {
        self.events_for(id)
            .await
            .into_iter()
            .filter_map(|event| match event {
                ServerEvent::NewMessage(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// The most recent rooms-list delivered to a connection (if any).
    pub async fn last_rooms_list_for(&self, id: &ConnectionId) -> Option<Vec<String>> {
        self.events_for(id)
            .await
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ServerEvent::RoomsList { rooms } => Some(rooms),
                _ => None,
            })
    }
}

impl Default for MockEventSink {
    fn default() -> Self {
        Self::new_stored_only()
    }
}

#[async_trait]
impl EventSink for MockEventSink {
    async fn send(&self, target: ConnectionId, event: ServerEvent) {
        tracing::debug!("[MockSink] {} <- {:?}", target, event);

        self.events.lock().await.push((target, event.clone()));
        let _ = self.tx.send((target, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sink_captures_events() {
        let (sink, mut rx) = MockEventSink::new();
        let id = ConnectionId::new();

        sink.send(id, ServerEvent::Welcome { id }).await;

        let (target, event) = rx.recv().await.unwrap();
        assert_eq!(target, id);
        assert!(matches!(event, ServerEvent::Welcome { .. }));

        let stored = sink.events_for(&id).await;
        assert_eq!(stored.len(), 1);
    }
}
