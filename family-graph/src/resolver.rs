//! Placeholder-to-owner resolution
//!
//! A placeholder account stands in for a person without their own login. It
//! belongs to the family of the real account that owns it, found through the
//! placeholder's relationships:
//! - a single parent-tagged counterpart is the owner
//! - failing that, the counterpart of the placeholder's sole relationship
//! - an owner that is itself a placeholder is followed until a real account
//!
//! Anything else is a data-quality condition: the placeholder stays its own
//! family unit and a [`DataQualityWarning`] is reported.

use std::collections::{BTreeSet, HashMap, HashSet};

use family_shared::types::{Edge, Member, MemberId, Relationship, RelationshipKind};

use crate::DataQualityWarning;

/// Relationship rows indexed by every member they involve.
///
/// Each row is readable from both endpoints, whichever direction it was
/// stored in. Duplicate rows are kept once.
#[derive(Debug, Default, Clone)]
pub struct RelationshipIndex {
    seen: HashSet<Relationship>,
    counterparts: HashMap<MemberId, Vec<(MemberId, RelationshipKind)>>,
}

impl RelationshipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_relationships(rows: impl IntoIterator<Item = Relationship>) -> Self {
        let mut index = Self::new();
        index.extend(rows);
        index
    }

    pub fn insert(&mut self, row: Relationship) {
        if self.seen.contains(&row) {
            return;
        }

        for side in [row.member_id, row.related_member_id] {
            if let Some(counterpart) = row.counterpart_of(side) {
                self.counterparts.entry(side).or_default().push(counterpart);
            }
        }
        self.seen.insert(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Relationship>) {
        for row in rows {
            self.insert(row);
        }
    }

    /// Counterparts of `member`, with their role relative to `member`.
    pub fn counterparts(&self, member: MemberId) -> &[(MemberId, RelationshipKind)] {
        self.counterparts
            .get(&member)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One undirected edge per stored row.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.seen.iter().map(Relationship::edge)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Direct owner lookup for one placeholder, before following chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerCandidate {
    Owner(MemberId),
    Missing,
    Ambiguous(Vec<MemberId>),
}

/// Finds the account that directly owns `placeholder`.
pub fn owner_candidate(placeholder: MemberId, index: &RelationshipIndex) -> OwnerCandidate {
    let counterparts = index.counterparts(placeholder);

    let parents: BTreeSet<MemberId> = counterparts
        .iter()
        .filter(|(id, kind)| *id != placeholder && kind.is_owner_role())
        .map(|(id, _)| *id)
        .collect();

    match parents.len() {
        1 => parents
            .into_iter()
            .next()
            .map_or(OwnerCandidate::Missing, OwnerCandidate::Owner),
        0 => {
            let linked: BTreeSet<MemberId> = counterparts
                .iter()
                .map(|(id, _)| *id)
                .filter(|id| *id != placeholder)
                .collect();
            match linked.len() {
                1 => linked
                    .into_iter()
                    .next()
                    .map_or(OwnerCandidate::Missing, OwnerCandidate::Owner),
                _ => OwnerCandidate::Missing,
            }
        }
        _ => OwnerCandidate::Ambiguous(parents.into_iter().collect()),
    }
}

/// Outcome of resolving one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The member, with `owner_id` filled in when a placeholder was resolved.
    pub member: Member,
    /// Identifier representing the member's family unit.
    pub resolved: MemberId,
    pub warning: Option<DataQualityWarning>,
}

impl Resolution {
    fn unchanged(member: Member) -> Self {
        Self {
            resolved: member.id,
            member,
            warning: None,
        }
    }

    fn unresolved(member: Member, warning: DataQualityWarning) -> Self {
        Self {
            resolved: member.id,
            member,
            warning: Some(warning),
        }
    }
}

/// Resolves members to their family-unit identifier.
///
/// Works over a snapshot of known accounts and loaded relationships. An
/// account missing from `members` is treated as real.
pub struct OwnerResolver<'a> {
    members: &'a HashMap<MemberId, Member>,
    index: &'a RelationshipIndex,
}

impl<'a> OwnerResolver<'a> {
    pub fn new(members: &'a HashMap<MemberId, Member>, index: &'a RelationshipIndex) -> Self {
        Self { members, index }
    }

    fn is_placeholder(&self, id: MemberId) -> bool {
        self.members.get(&id).is_some_and(|m| m.is_placeholder)
    }

    pub fn resolve(&self, id: MemberId) -> Resolution {
        let member = self
            .members
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Member::real(id));

        if !member.is_placeholder {
            return Resolution::unchanged(member);
        }

        let mut visited: HashSet<MemberId> = HashSet::from([id]);
        let mut current = id;

        loop {
            match owner_candidate(current, self.index) {
                OwnerCandidate::Owner(owner) => {
                    if !visited.insert(owner) {
                        return Resolution::unresolved(member, DataQualityWarning::OwnerCycle { member: id });
                    }
                    if self.is_placeholder(owner) {
                        current = owner;
                        continue;
                    }
                    return Resolution {
                        member: member.with_owner(owner),
                        resolved: owner,
                        warning: None,
                    };
                }
                OwnerCandidate::Missing => {
                    return Resolution::unresolved(member, DataQualityWarning::MissingOwner { member: id });
                }
                OwnerCandidate::Ambiguous(candidates) => {
                    return Resolution::unresolved(
                        member,
                        DataQualityWarning::AmbiguousOwner {
                            member: id,
                            candidates,
                        },
                    );
                }
            }
        }
    }
}
