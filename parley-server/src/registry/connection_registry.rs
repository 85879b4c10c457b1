use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parley_core::{ConnectionId, Identity};

use crate::error::{RelayError, RelayResult};

/// Tracks every live connection and the identity attributes bound to it
/// after a successful join. Absence from the registry is the single
/// "connection gone" signal; there is no separate disconnect flag.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, Option<Identity>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a connection that has not joined a room yet.
    pub fn register(&self, id: ConnectionId) {
        self.connections.insert(id, None);
    }

    /// Drop a connection entirely.
    pub fn deregister(&self, id: &ConnectionId) {
        self.connections.remove(id);
    }

    /// Attach identity attributes to a connection. A connection joins at
    /// most one room per lifetime without an intervening unbind.
    pub fn bind(&self, id: ConnectionId, identity: Identity) -> RelayResult<()> {
        match self.connections.entry(id) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_some() {
                    return Err(RelayError::AlreadyBound);
                }
                occupied.insert(Some(identity));
                Ok(())
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Some(identity));
                Ok(())
            }
        }
    }

    /// Clear the bound identity. Idempotent.
    pub fn unbind(&self, id: &ConnectionId) {
        if let Some(mut slot) = self.connections.get_mut(id) {
            *slot = None;
        }
    }

    pub fn resolve(&self, id: &ConnectionId) -> Option<Identity> {
        self.connections.get(id).and_then(|slot| slot.clone())
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    /// Connections currently bound to the given room, for fan-out.
    pub fn connections_in(&self, room: &str) -> Vec<ConnectionId> {
        self.connections
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .as_ref()
                    .is_some_and(|identity| identity.room == room)
            })
            .map(|entry| *entry.key())
            .collect()
    }
}
