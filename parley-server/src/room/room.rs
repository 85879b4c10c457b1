use parley_core::Member;

/// A named, credential-gated group of members. The directory owns the
/// room table; each room owns its member list, ordered by join time.
#[derive(Debug)]
pub struct Room {
    name: String,
    credential: String,
    members: Vec<Member>,
}

impl Room {
    pub fn new(name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credentials are opaque and compared for equality only.
    pub fn credential_matches(&self, credential: &str) -> bool {
        self.credential == credential
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove the first member record with the given name. Duplicate
    /// names are permitted, so this is a first-match removal; membership
    /// is keyed by display name, not connection identity.
    pub fn remove_member_named(&mut self, username: &str) -> Option<Member> {
        let index = self
            .members
            .iter()
            .position(|member| member.username == username)?;
        Some(self.members.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> Vec<Member> {
        self.members.clone()
    }
}
