pub mod model;

pub use model::{
    CallKind, CallParticipant, ClientEvent, ConnectionId, Identity, Member, MessageKind,
    RoomMessage, ServerEvent,
};
