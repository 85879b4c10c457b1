use serde::{Deserialize, Serialize};

/// Room-visible projection of a joined user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub username: String,
    pub color: String,
}

/// Attributes bound to a connection once it has joined a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub color: String,
    pub room: String,
}
