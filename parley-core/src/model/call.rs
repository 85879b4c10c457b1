use serde::{Deserialize, Serialize};

use crate::model::connection::ConnectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Audio,
    Video,
}

impl CallKind {
    pub fn from_is_video(is_video: bool) -> Self {
        if is_video { Self::Video } else { Self::Audio }
    }

    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// One connection taking part in a room's active call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallParticipant {
    pub username: String,
    pub id: ConnectionId,
}
