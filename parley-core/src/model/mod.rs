mod call;
mod connection;
mod event;
mod member;
mod message;

pub use call::{CallKind, CallParticipant};
pub use connection::ConnectionId;
pub use event::{ClientEvent, ServerEvent};
pub use member::{Identity, Member};
pub use message::{MessageKind, RoomMessage};
