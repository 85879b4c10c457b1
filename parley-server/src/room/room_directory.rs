use parking_lot::RwLock;
use parley_core::Member;

use crate::error::{RelayError, RelayResult};
use crate::room::Room;

/// System-wide cap on concurrent rooms.
pub const MAX_ROOMS: usize = 5;

/// Owns the room table. Rooms are kept in creation order; a room with
/// zero members is deleted. Every multi-step check runs under a single
/// write lock so the cap and uniqueness cannot race.
#[derive(Default)]
pub struct RoomDirectory {
    rooms: RwLock<Vec<Room>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, name: &str, credential: &str) -> RelayResult<()> {
        let mut rooms = self.rooms.write();
        if rooms.len() >= MAX_ROOMS {
            return Err(RelayError::RoomLimitReached);
        }
        if rooms.iter().any(|room| room.name() == name) {
            return Err(RelayError::RoomExists);
        }
        rooms.push(Room::new(name, credential));
        Ok(())
    }

    /// Existence and credential check without mutating anything. Used to
    /// validate a join before any color or registry state is touched.
    pub fn verify(&self, name: &str, credential: &str) -> RelayResult<()> {
        let rooms = self.rooms.read();
        let room = rooms
            .iter()
            .find(|room| room.name() == name)
            .ok_or(RelayError::RoomNotFound)?;
        if !room.credential_matches(credential) {
            return Err(RelayError::BadCredential);
        }
        Ok(())
    }

    /// Validate and append in one step, so a rejected join never leaves
    /// a partial member record behind. Returns the member list after the
    /// append.
    pub fn join(&self, name: &str, credential: &str, member: Member) -> RelayResult<Vec<Member>> {
        let mut rooms = self.rooms.write();
        let room = rooms
            .iter_mut()
            .find(|room| room.name() == name)
            .ok_or(RelayError::RoomNotFound)?;
        if !room.credential_matches(credential) {
            return Err(RelayError::BadCredential);
        }
        room.add_member(member);
        Ok(room.members())
    }

    /// Remove the first member with the given name. Returns the member
    /// list after removal and whether the now-empty room was deleted, or
    /// `None` when no such room or member exists.
    pub fn leave(&self, name: &str, username: &str) -> Option<(Vec<Member>, bool)> {
        let mut rooms = self.rooms.write();
        let index = rooms.iter().position(|room| room.name() == name)?;
        rooms[index].remove_member_named(username)?;
        if rooms[index].is_empty() {
            rooms.remove(index);
            Some((Vec::new(), true))
        } else {
            Some((rooms[index].members(), false))
        }
    }

    /// Creation-ordered snapshot of room names.
    pub fn list(&self) -> Vec<String> {
        self.rooms
            .read()
            .iter()
            .map(|room| room.name().to_string())
            .collect()
    }
}
