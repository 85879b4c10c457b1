use std::sync::Arc;

use parley_core::{
    CallKind, CallParticipant, ClientEvent, ConnectionId, Identity, Member, MessageKind,
    RoomMessage, ServerEvent,
};
use tracing::{debug, info};

use crate::call::{CallDeparture, CallManager};
use crate::error::RelayError;
use crate::registry::ConnectionRegistry;
use crate::room::{ColorPalette, RoomDirectory};
use crate::signaling::EventSink;

/// The event dispatcher. Applies one connection's events to the shared
/// room/call/registry state and fans the resulting notifications out
/// through the sink.
///
/// Locking discipline: each store guards itself, locks are taken one at
/// a time, and every notification list is collected before the first
/// send so no lock is ever held across an await.
pub struct Relay {
    registry: ConnectionRegistry,
    rooms: RoomDirectory,
    calls: CallManager,
    palette: ColorPalette,
    sink: Arc<dyn EventSink>,
}

impl Relay {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            rooms: RoomDirectory::new(),
            calls: CallManager::new(),
            palette: ColorPalette::new(),
            sink,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn rooms(&self) -> &RoomDirectory {
        &self.rooms
    }

    pub fn calls(&self) -> &CallManager {
        &self.calls
    }

    /// Track a fresh connection and announce its server-assigned id.
    pub async fn on_connect(&self, id: ConnectionId) {
        self.registry.register(id);
        info!("Connection opened: {}", id);
        self.sink.send(id, ServerEvent::Welcome { id }).await;
    }

    /// Apply one inbound event.
    pub async fn handle(&self, id: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::CreateRoom { room, credential } => {
                self.create_room(id, room, credential).await;
            }
            ClientEvent::JoinRoom {
                room,
                credential,
                username,
            } => {
                self.join_room(id, room, credential, username).await;
            }
            ClientEvent::SendMessage {
                kind,
                message,
                image_data,
            } => {
                self.send_message(id, kind, message, image_data).await;
            }
            ClientEvent::GetRooms => {
                let rooms = self.rooms.list();
                self.sink.send(id, ServerEvent::RoomsList { rooms }).await;
            }
            ClientEvent::StartCall { is_video } => {
                self.start_call(id, is_video).await;
            }
            ClientEvent::JoinCall { .. } => {
                self.join_call(id).await;
            }
            ClientEvent::WebrtcOffer { payload, target_id } => {
                let event = ServerEvent::WebrtcOffer {
                    payload,
                    sender_id: id,
                };
                self.relay_signal(id, target_id, event).await;
            }
            ClientEvent::WebrtcAnswer { payload, target_id } => {
                let event = ServerEvent::WebrtcAnswer {
                    payload,
                    sender_id: id,
                };
                self.relay_signal(id, target_id, event).await;
            }
            ClientEvent::WebrtcIceCandidate { payload, target_id } => {
                let event = ServerEvent::WebrtcIceCandidate {
                    payload,
                    sender_id: id,
                };
                self.relay_signal(id, target_id, event).await;
            }
            ClientEvent::EndCall => {
                self.end_call(id).await;
            }
        }
    }

    /// Run the full cleanup for a closed channel: leave the room (with
    /// its announcements), prune any call the connection was part of,
    /// then release the identity.
    pub async fn on_disconnect(&self, id: ConnectionId) {
        if let Some(identity) = self.registry.resolve(&id) {
            self.depart_room(id, &identity).await;
        }
        self.registry.deregister(&id);
        info!("Connection closed: {}", id);
    }

    async fn create_room(&self, id: ConnectionId, room: String, credential: String) {
        match self.rooms.create(&room, &credential) {
            Ok(()) => {
                info!("Room created: {}", room);
                self.sink.send(id, ServerEvent::RoomCreated { room }).await;
            }
            Err(e) => {
                self.sink
                    .send(
                        id,
                        ServerEvent::RoomError {
                            message: e.to_string(),
                        },
                    )
                    .await;
            }
        }
    }

    async fn join_room(&self, id: ConnectionId, room: String, credential: String, username: String) {
        if self.registry.resolve(&id).is_some() {
            self.join_error(id, RelayError::AlreadyBound).await;
            return;
        }
        // Validate before the palette assignment so a rejected join
        // never burns a color slot.
        if let Err(e) = self.rooms.verify(&room, &credential) {
            self.join_error(id, e).await;
            return;
        }

        let color = self.palette.color_for(&username);
        let identity = Identity {
            username: username.clone(),
            color: color.clone(),
            room: room.clone(),
        };
        if let Err(e) = self.registry.bind(id, identity) {
            self.join_error(id, e).await;
            return;
        }

        let member = Member {
            username: username.clone(),
            color: color.clone(),
        };
        let members = match self.rooms.join(&room, &credential, member) {
            Ok(members) => members,
            Err(e) => {
                // The room vanished between checks; roll the binding back.
                self.registry.unbind(&id);
                self.join_error(id, e).await;
                return;
            }
        };

        info!("{} joined room {}", username, room);

        let recipients = self.registry.connections_in(&room);
        let mut batch = Vec::new();
        batch.push((id, ServerEvent::JoinSuccess { room, color }));
        for &conn in &recipients {
            if conn != id {
                batch.push((
                    conn,
                    ServerEvent::UserJoined {
                        username: username.clone(),
                    },
                ));
            }
        }
        for &conn in &recipients {
            batch.push((
                conn,
                ServerEvent::UserList {
                    members: members.clone(),
                },
            ));
        }
        self.deliver(batch).await;
    }

    async fn send_message(
        &self,
        id: ConnectionId,
        kind: MessageKind,
        message: Option<String>,
        image_data: Option<String>,
    ) {
        let Some(identity) = self.registry.resolve(&id) else {
            self.state_error(id, RelayError::NotInRoom).await;
            return;
        };

        let room = identity.room;
        let payload = match kind {
            MessageKind::Text => RoomMessage::Text {
                username: identity.username,
                color: identity.color,
                timestamp: timestamp(),
                message: message.unwrap_or_default(),
            },
            MessageKind::Image => RoomMessage::Image {
                username: identity.username,
                color: identity.color,
                timestamp: timestamp(),
                image_data: image_data.unwrap_or_default(),
            },
        };
        self.broadcast_message(&room, payload).await;
    }

    async fn start_call(&self, id: ConnectionId, is_video: bool) {
        let Some(identity) = self.registry.resolve(&id) else {
            self.state_error(id, RelayError::NotInRoom).await;
            return;
        };

        let kind = CallKind::from_is_video(is_video);
        let starter = CallParticipant {
            username: identity.username.clone(),
            id,
        };
        self.calls.start(&identity.room, starter, kind);
        info!(
            "{} call started in {} by {}",
            if is_video { "Video" } else { "Audio" },
            identity.room,
            identity.username,
        );

        // The announcement goes through the message stream for every
        // room member, then the caller alone gets the confirmation.
        let notice = RoomMessage::CallNotice {
            starter: identity.username,
            call: kind,
            timestamp: timestamp(),
            active: true,
        };
        let recipients = self.registry.connections_in(&identity.room);
        let mut batch: Vec<(ConnectionId, ServerEvent)> = recipients
            .into_iter()
            .map(|conn| (conn, ServerEvent::NewMessage(notice.clone())))
            .collect();
        batch.push((id, ServerEvent::CallStarted { is_video }));
        self.deliver(batch).await;
    }

    async fn join_call(&self, id: ConnectionId) {
        let Some(identity) = self.registry.resolve(&id) else {
            self.state_error(id, RelayError::NotInRoom).await;
            return;
        };

        let participant = CallParticipant {
            username: identity.username.clone(),
            id,
        };
        match self.calls.join(&identity.room, participant) {
            Ok((others, kind)) => {
                // Prior participants are told individually; the room at
                // large hears nothing.
                let mut batch = Vec::new();
                for other in &others {
                    batch.push((
                        other.id,
                        ServerEvent::UserJoinedCall {
                            username: identity.username.clone(),
                            id,
                        },
                    ));
                }
                batch.push((
                    id,
                    ServerEvent::CallParticipants {
                        participants: others,
                        is_video: kind.is_video(),
                    },
                ));
                batch.push((
                    id,
                    ServerEvent::JoinedCall {
                        is_video: kind.is_video(),
                    },
                ));
                self.deliver(batch).await;
            }
            Err(e) => self.state_error(id, e).await,
        }
    }

    async fn end_call(&self, id: ConnectionId) {
        let Some(identity) = self.registry.resolve(&id) else {
            self.state_error(id, RelayError::NotInRoom).await;
            return;
        };

        match self.calls.leave(&identity.room, &id) {
            Ok(departure) => {
                self.announce_call_departure(&identity.room, id, departure)
                    .await;
            }
            Err(e) => self.state_error(id, e).await,
        }
    }

    /// Forward an opaque negotiation payload to its target. An unknown
    /// target is a silent drop; the negotiating endpoints own their own
    /// retry logic.
    async fn relay_signal(&self, sender: ConnectionId, target: ConnectionId, event: ServerEvent) {
        if !self.registry.contains(&target) {
            debug!("Dropping signal from {} to unknown target {}", sender, target);
            return;
        }
        self.sink.send(target, event).await;
    }

    async fn depart_room(&self, id: ConnectionId, identity: &Identity) {
        if let Some((members, room_deleted)) = self.rooms.leave(&identity.room, &identity.username)
        {
            let recipients: Vec<ConnectionId> = self
                .registry
                .connections_in(&identity.room)
                .into_iter()
                .filter(|conn| *conn != id)
                .collect();
            let mut batch = Vec::new();
            for &conn in &recipients {
                batch.push((
                    conn,
                    ServerEvent::UserLeft {
                        username: identity.username.clone(),
                    },
                ));
            }
            for &conn in &recipients {
                batch.push((
                    conn,
                    ServerEvent::UserList {
                        members: members.clone(),
                    },
                ));
            }
            self.deliver(batch).await;

            if room_deleted {
                info!("Room deleted: {}", identity.room);
                self.calls.remove_room(&identity.room);
            }
        }

        if let Ok(departure) = self.calls.leave(&identity.room, &id) {
            self.announce_call_departure(&identity.room, id, departure)
                .await;
        }
    }

    async fn announce_call_departure(
        &self,
        room: &str,
        actor: ConnectionId,
        departure: CallDeparture,
    ) {
        match departure {
            CallDeparture::Ended { departed } => {
                info!("Call ended in {}", room);
                let batch: Vec<(ConnectionId, ServerEvent)> = self
                    .registry
                    .connections_in(room)
                    .into_iter()
                    .filter(|conn| *conn != actor)
                    .map(|conn| {
                        (
                            conn,
                            ServerEvent::CallEnded {
                                username: departed.username.clone(),
                            },
                        )
                    })
                    .collect();
                self.deliver(batch).await;
            }
            CallDeparture::Remaining {
                departed,
                participants,
            } => {
                let batch: Vec<(ConnectionId, ServerEvent)> = participants
                    .into_iter()
                    .map(|participant| {
                        (
                            participant.id,
                            ServerEvent::UserLeftCall {
                                username: departed.username.clone(),
                            },
                        )
                    })
                    .collect();
                self.deliver(batch).await;
            }
        }
    }

    async fn broadcast_message(&self, room: &str, payload: RoomMessage) {
        let recipients = self.registry.connections_in(room);
        let batch: Vec<(ConnectionId, ServerEvent)> = recipients
            .into_iter()
            .map(|conn| (conn, ServerEvent::NewMessage(payload.clone())))
            .collect();
        self.deliver(batch).await;
    }

    async fn join_error(&self, id: ConnectionId, error: RelayError) {
        debug!("Rejected join from {}: {}", id, error);
        self.sink
            .send(
                id,
                ServerEvent::JoinError {
                    message: error.to_string(),
                },
            )
            .await;
    }

    async fn state_error(&self, id: ConnectionId, error: RelayError) {
        debug!("Rejected event from {}: {}", id, error);
        self.sink
            .send(
                id,
                ServerEvent::CallError {
                    message: error.to_string(),
                },
            )
            .await;
    }

    async fn deliver(&self, batch: Vec<(ConnectionId, ServerEvent)>) {
        for (target, event) in batch {
            self.sink.send(target, event).await;
        }
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
