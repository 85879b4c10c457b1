use parley_core::{CallKind, CallParticipant, ConnectionId};

/// Transient record of the active call in one room. Participants are
/// kept in join order; the session only references connection ids it
/// does not own.
#[derive(Debug, Clone)]
pub struct CallSession {
    starter: CallParticipant,
    kind: CallKind,
    participants: Vec<CallParticipant>,
}

impl CallSession {
    pub fn new(starter: CallParticipant, kind: CallKind) -> Self {
        let participants = vec![starter.clone()];
        Self {
            starter,
            kind,
            participants,
        }
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn starter(&self) -> &CallParticipant {
        &self.starter
    }

    pub fn add_participant(&mut self, participant: CallParticipant) {
        self.participants.push(participant);
    }

    pub fn remove_participant(&mut self, id: &ConnectionId) -> Option<CallParticipant> {
        let index = self
            .participants
            .iter()
            .position(|participant| &participant.id == id)?;
        Some(self.participants.remove(index))
    }

    pub fn participants(&self) -> Vec<CallParticipant> {
        self.participants.clone()
    }

    pub fn participants_except(&self, id: &ConnectionId) -> Vec<CallParticipant> {
        self.participants
            .iter()
            .filter(|participant| &participant.id != id)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
