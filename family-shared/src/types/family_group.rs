use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::types::MemberId;

/// A maximal set of team members connected through family relationships.
///
/// Derived per query, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyGroup {
    members: BTreeSet<MemberId>,
}

impl FamilyGroup {
    pub fn new(members: impl IntoIterator<Item = MemberId>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &BTreeSet<MemberId> {
        &self.members
    }

    pub fn contains(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Smallest member id, used to order groups deterministically.
    pub fn anchor(&self) -> Option<MemberId> {
        self.members.first().copied()
    }
}
