use parley_core::ServerEvent;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect, send_text};

#[tokio::test]
async fn test_message_without_room_is_rejected() {
    init_tracing();

    let (relay, sink) = create_test_relay();
    let loner = connect(&relay).await;

    send_text(&relay, loner, "is anyone there").await;

    // The sender gets an explicit error and nothing is broadcast.
    let events = sink.events_for(&loner).await;
    assert!(events.iter().any(|event| matches!(
        event,
        ServerEvent::CallError { message } if message == "You are not in a room"
    )));
    assert!(sink.messages_for(&loner).await.is_empty());
}
