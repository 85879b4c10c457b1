use parley_core::{CallKind, ClientEvent, RoomMessage, ServerEvent};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect, connect_and_join, create_room};

#[tokio::test]
async fn test_second_start_replaces_active_call() {
    init_tracing();

    let (relay, sink) = create_test_relay();
    let creator = connect(&relay).await;
    create_room(&relay, creator, "lobby", "pw1").await;

    let alice = connect_and_join(&relay, "lobby", "pw1", "alice").await;
    let bob = connect_and_join(&relay, "lobby", "pw1", "bob").await;
    let carol = connect_and_join(&relay, "lobby", "pw1", "carol").await;

    relay
        .handle(alice, ClientEvent::StartCall { is_video: true })
        .await;
    relay
        .handle(bob, ClientEvent::StartCall { is_video: false })
        .await;

    // The second start replaces the session outright and re-announces.
    assert_eq!(relay.calls().session_kind("lobby"), Some(CallKind::Audio));
    let notices = sink
        .messages_for(&carol)
        .await
        .into_iter()
        .filter(|message| matches!(message, RoomMessage::CallNotice { .. }))
        .count();
    assert_eq!(notices, 2);

    // A joiner now sees only the new session's membership and kind.
    relay
        .handle(carol, ClientEvent::JoinCall { is_video: false })
        .await;
    let carol_events = sink.events_for(&carol).await;
    assert!(carol_events.iter().any(|event| matches!(
        event,
        ServerEvent::CallParticipants { participants, is_video: false }
            if participants.len() == 1 && participants[0].username == "bob"
    )));
}
