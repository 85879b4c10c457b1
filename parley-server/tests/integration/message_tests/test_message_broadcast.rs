use parley_core::RoomMessage;
use parley_server::PALETTE;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect, connect_and_join, create_room, send_text};

#[tokio::test]
async fn test_message_reaches_every_member() {
    init_tracing();

    let (relay, sink) = create_test_relay();
    let creator = connect(&relay).await;
    create_room(&relay, creator, "lobby", "pw1").await;

    let alice = connect_and_join(&relay, "lobby", "pw1", "alice").await;
    let bob = connect_and_join(&relay, "lobby", "pw1", "bob").await;

    send_text(&relay, alice, "hello room").await;

    // Everyone including the sender gets the message, attributed with
    // the sender's name and color.
    for id in [&alice, &bob] {
        let messages = sink.messages_for(id).await;
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            RoomMessage::Text {
                username,
                color,
                timestamp,
                message,
            } => {
                assert_eq!(username, "alice");
                assert_eq!(color, PALETTE[0]);
                assert_eq!(message, "hello room");
                assert!(!timestamp.is_empty());
            }
            other => panic!("expected text message, got {other:?}"),
        }
    }
}
