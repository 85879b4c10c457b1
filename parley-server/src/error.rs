use thiserror::Error;

/// Errors surfaced to clients. The display string is the user-facing
/// message carried by `room-error`, `join-error` and `call-error`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    #[error("Maximum number of rooms reached")]
    RoomLimitReached,

    #[error("Room already exists")]
    RoomExists,

    #[error("Room not found")]
    RoomNotFound,

    #[error("Incorrect password")]
    BadCredential,

    #[error("Already in a room")]
    AlreadyBound,

    #[error("You are not in a room")]
    NotInRoom,

    #[error("No active call in this room")]
    NoActiveCall,
}

pub type RelayResult<T> = Result<T, RelayError>;
