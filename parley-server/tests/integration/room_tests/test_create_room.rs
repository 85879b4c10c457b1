use parley_core::{ClientEvent, ServerEvent};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect, create_room};

#[tokio::test]
async fn test_create_room_and_duplicate() {
    init_tracing();

    let (relay, sink) = create_test_relay();
    let conn = connect(&relay).await;

    create_room(&relay, conn, "lobby", "pw1").await;
    let events = sink.events_for(&conn).await;
    assert!(events.iter().any(|event| matches!(
        event,
        ServerEvent::RoomCreated { room } if room == "lobby"
    )));

    // Same name again, even with a different credential, is rejected.
    create_room(&relay, conn, "lobby", "pw2").await;
    let events = sink.events_for(&conn).await;
    assert!(events.iter().any(|event| matches!(
        event,
        ServerEvent::RoomError { message } if message == "Room already exists"
    )));

    relay.handle(conn, ClientEvent::GetRooms).await;
    assert_eq!(
        sink.last_rooms_list_for(&conn).await.unwrap(),
        vec!["lobby"]
    );
}
