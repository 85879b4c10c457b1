use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::call::CallParticipant;
use crate::model::connection::ConnectionId;
use crate::model::member::Member;
use crate::model::message::{MessageKind, RoomMessage};

/// Inbound wire events, one per client action.
///
/// WebRTC payloads are opaque: the relay forwards them to the target
/// connection without inspecting their contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    CreateRoom {
        room: String,
        credential: String,
    },
    JoinRoom {
        room: String,
        credential: String,
        username: String,
    },
    SendMessage {
        kind: MessageKind,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        image_data: Option<String>,
    },
    GetRooms,
    StartCall {
        is_video: bool,
    },
    JoinCall {
        is_video: bool,
    },
    WebrtcOffer {
        payload: Value,
        target_id: ConnectionId,
    },
    WebrtcAnswer {
        payload: Value,
        target_id: ConnectionId,
    },
    WebrtcIceCandidate {
        payload: Value,
        target_id: ConnectionId,
    },
    EndCall,
}

/// Outbound wire events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    Welcome {
        id: ConnectionId,
    },
    RoomCreated {
        room: String,
    },
    RoomError {
        message: String,
    },
    JoinSuccess {
        room: String,
        color: String,
    },
    JoinError {
        message: String,
    },
    RoomsList {
        rooms: Vec<String>,
    },
    NewMessage(RoomMessage),
    UserJoined {
        username: String,
    },
    UserLeft {
        username: String,
    },
    UserList {
        members: Vec<Member>,
    },
    CallStarted {
        is_video: bool,
    },
    CallParticipants {
        participants: Vec<CallParticipant>,
        is_video: bool,
    },
    JoinedCall {
        is_video: bool,
    },
    UserJoinedCall {
        username: String,
        id: ConnectionId,
    },
    UserLeftCall {
        username: String,
    },
    WebrtcOffer {
        payload: Value,
        sender_id: ConnectionId,
    },
    WebrtcAnswer {
        payload: Value,
        sender_id: ConnectionId,
    },
    WebrtcIceCandidate {
        payload: Value,
        sender_id: ConnectionId,
    },
    CallEnded {
        username: String,
    },
    CallError {
        message: String,
    },
}
