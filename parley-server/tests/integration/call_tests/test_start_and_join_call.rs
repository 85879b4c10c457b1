use parley_core::{ClientEvent, RoomMessage, ServerEvent};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect, connect_and_join, create_room};

#[tokio::test]
async fn test_start_and_join_call() {
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

    // The caller gets a confirmation; every room member sees the call
    // notice in the message stream.
    let alice_events = sink.events_for(&alice).await;
    assert!(
        alice_events
            .iter()
            .any(|event| matches!(event, ServerEvent::CallStarted { is_video: true }))
    );
    for id in [&alice, &bob, &carol] {
        let messages = sink.messages_for(id).await;
        assert!(messages.iter().any(|message| matches!(
            message,
            RoomMessage::CallNotice { starter, active: true, .. } if starter == "alice"
        )));
    }

    relay
        .handle(bob, ClientEvent::JoinCall { is_video: true })
        .await;

    // The joiner learns who is already on the call and the call kind.
    let bob_events = sink.events_for(&bob).await;
    assert!(bob_events.iter().any(|event| matches!(
        event,
        ServerEvent::CallParticipants { participants, is_video: true }
            if participants.len() == 1
                && participants[0].username == "alice"
                && participants[0].id == alice
    )));
    assert!(
        bob_events
            .iter()
            .any(|event| matches!(event, ServerEvent::JoinedCall { is_video: true }))
    );

    // The prior participant is told individually, naming the joiner.
    let alice_events = sink.events_for(&alice).await;
    assert!(alice_events.iter().any(|event| matches!(
        event,
        ServerEvent::UserJoinedCall { username, id } if username == "bob" && *id == bob
    )));

    // Uninvolved room members hear nothing about the membership change.
    let carol_events = sink.events_for(&carol).await;
    assert!(
        !carol_events
            .iter()
            .any(|event| matches!(event, ServerEvent::UserJoinedCall { .. }))
    );
}
