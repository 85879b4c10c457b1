use parking_lot::Mutex;
use parley_core::{CallKind, CallParticipant, ConnectionId};
use std::collections::HashMap;

use crate::call::CallSession;
use crate::error::{RelayError, RelayResult};

/// Outcome of removing a participant from a room's call.
#[derive(Debug)]
pub enum CallDeparture {
    /// Others remain on the call; each is told individually.
    Remaining {
        departed: CallParticipant,
        participants: Vec<CallParticipant>,
    },
    /// The participant set emptied; the session is gone and the whole
    /// room hears about it.
    Ended { departed: CallParticipant },
}

/// At most one active call per room, keyed by room name. A second start
/// while a call is active replaces the session rather than rejecting.
#[derive(Default)]
pub struct CallManager {
    sessions: Mutex<HashMap<String, CallSession>>,
}

impl CallManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the room's session with the caller as starter
    /// and sole participant.
    pub fn start(&self, room: &str, starter: CallParticipant, kind: CallKind) {
        self.sessions
            .lock()
            .insert(room.to_string(), CallSession::new(starter, kind));
    }

    /// Append a participant. Returns the other participants and the
    /// session kind; the joiner needs both to initiate peer connections.
    pub fn join(
        &self,
        room: &str,
        participant: CallParticipant,
    ) -> RelayResult<(Vec<CallParticipant>, CallKind)> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(room).ok_or(RelayError::NoActiveCall)?;
        let others = session.participants_except(&participant.id);
        session.add_participant(participant);
        Ok((others, session.kind()))
    }

    /// Remove a connection from the room's session, destroying the
    /// session when the participant set empties.
    pub fn leave(&self, room: &str, id: &ConnectionId) -> RelayResult<CallDeparture> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(room).ok_or(RelayError::NoActiveCall)?;
        let departed = session
            .remove_participant(id)
            .ok_or(RelayError::NoActiveCall)?;
        if session.is_empty() {
            sessions.remove(room);
            Ok(CallDeparture::Ended { departed })
        } else {
            Ok(CallDeparture::Remaining {
                departed,
                participants: session.participants(),
            })
        }
    }

    /// Drop the session outright; used when its room goes away.
    pub fn remove_room(&self, room: &str) {
        self.sessions.lock().remove(room);
    }

    pub fn has_session(&self, room: &str) -> bool {
        self.sessions.lock().contains_key(room)
    }

    pub fn session_kind(&self, room: &str) -> Option<CallKind> {
        self.sessions.lock().get(room).map(CallSession::kind)
    }
}
