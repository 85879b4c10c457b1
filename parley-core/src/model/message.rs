use serde::{Deserialize, Serialize};

use crate::model::call::CallKind;

/// Payload kind of a client `send-message` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

/// One entry in a room's message stream. Call notices share the stream
/// with chat messages so clients render them inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RoomMessage {
    Text {
        username: String,
        color: String,
        timestamp: String,
        message: String,
    },
    Image {
        username: String,
        color: String,
        timestamp: String,
        image_data: String,
    },
    CallNotice {
        starter: String,
        call: CallKind,
        timestamp: String,
        active: bool,
    },
}
