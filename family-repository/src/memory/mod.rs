//! In-memory family repository for testing and local development.
//!
//! The `InMemoryFamilyRepository` can be pre-populated with accounts,
//! memberships and relationships, allowing resolution to run without a
//! database.
//!
//! # Example
//!
//! ```
//! use family_repository::InMemoryFamilyRepository;
//! use family_shared::types::{MemberId, MembershipRole, RelationshipKind, TeamId};
//!
//! let repo = InMemoryFamilyRepository::new();
//! repo.add_account(MemberId(1), Some("jane@club.example"));
//! repo.add_account(MemberId(2), Some("dummy-kid@club.example"));
//! repo.add_membership(MemberId(1), TeamId(7), MembershipRole::Parent);
//! repo.add_membership(MemberId(2), TeamId(7), MembershipRole::Player);
//! repo.add_relationship(MemberId(2), MemberId(1), RelationshipKind::Parent);
//! ```

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use family_shared::types::{
    Member, MemberId, MembershipRole, PlaceholderPattern, Relationship, RelationshipKind, TeamId,
    TeamMembership,
};

use crate::{MemberRepository, MembershipRepository, RelationshipRepository, RepositoryError};

#[derive(Debug, Default)]
struct Store {
    /// Account id -> email
    accounts: BTreeMap<MemberId, Option<String>>,
    memberships: Vec<TeamMembership>,
    relationships: Vec<Relationship>,
}

/// Mutable in-process store implementing every repository interface.
///
/// Applies the same classification and filtering rules as the MySQL
/// implementation.
#[derive(Debug, Default)]
pub struct InMemoryFamilyRepository {
    store: RwLock<Store>,
    placeholders: PlaceholderPattern,
}

impl InMemoryFamilyRepository {
    /// Create an empty store using the default placeholder pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that classifies accounts with `placeholders`.
    pub fn with_pattern(placeholders: PlaceholderPattern) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            placeholders,
        }
    }

    /// Register an account and its email.
    pub fn add_account(&self, id: MemberId, email: Option<&str>) {
        self.write().accounts.insert(id, email.map(str::to_string));
    }

    /// Register an active membership.
    pub fn add_membership(&self, member: MemberId, team: TeamId, role: MembershipRole) {
        self.insert_membership(TeamMembership::new(member, team, role));
    }

    /// Register a membership row as-is, including inactive ones.
    pub fn insert_membership(&self, membership: TeamMembership) {
        self.write().memberships.push(membership);
    }

    /// Register a relationship row, stored in the given direction only.
    pub fn add_relationship(&self, member: MemberId, related: MemberId, kind: RelationshipKind) {
        self.write()
            .relationships
            .push(Relationship::new(member, related, kind));
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl MembershipRepository for InMemoryFamilyRepository {
    async fn team_memberships(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<TeamMembership>, RepositoryError> {
        let mut memberships: Vec<TeamMembership> = self
            .read()
            .memberships
            .iter()
            .filter(|m| m.team_id == team_id && m.participates())
            .cloned()
            .collect();
        memberships.sort_by_key(|m| m.member_id);
        Ok(memberships)
    }
}

#[async_trait]
impl MemberRepository for InMemoryFamilyRepository {
    async fn members(&self, ids: &[MemberId]) -> Result<Vec<Member>, RepositoryError> {
        let store = self.read();
        Ok(ids
            .iter()
            .filter_map(|id| {
                store.accounts.get(id).map(|email| {
                    if self.placeholders.is_placeholder(email.as_deref()) {
                        Member::placeholder(*id)
                    } else {
                        Member::real(*id)
                    }
                })
            })
            .collect())
    }
}

#[async_trait]
impl RelationshipRepository for InMemoryFamilyRepository {
    async fn relationships_for(
        &self,
        ids: &[MemberId],
    ) -> Result<Vec<Relationship>, RepositoryError> {
        Ok(self
            .read()
            .relationships
            .iter()
            .filter(|r| ids.iter().any(|id| r.involves(*id)))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_memberships_exclude_followers_and_departed() {
        let repo = InMemoryFamilyRepository::new();
        let team = TeamId(1);
        repo.add_membership(MemberId(3), team, MembershipRole::Player);
        repo.add_membership(MemberId(1), team, MembershipRole::Coach);
        repo.add_membership(MemberId(2), team, MembershipRole::Follower);
        repo.insert_membership(
            TeamMembership::new(MemberId(4), team, MembershipRole::Player).left(Utc::now()),
        );
        repo.add_membership(MemberId(5), TeamId(2), MembershipRole::Player);

        let ids: Vec<MemberId> = repo
            .team_memberships(team)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.member_id)
            .collect();
        assert_eq!(ids, vec![MemberId(1), MemberId(3)]);
    }

    #[tokio::test]
    async fn test_members_are_classified_and_unknown_ids_skipped() {
        let repo = InMemoryFamilyRepository::with_pattern(PlaceholderPattern::for_domain("club.example"));
        repo.add_account(MemberId(1), Some("jane@club.example"));
        repo.add_account(MemberId(2), Some("dummy7@club.example"));
        repo.add_account(MemberId(3), Some("dummy7@elsewhere.example"));
        repo.add_account(MemberId(4), None);

        let members = repo
            .members(&[MemberId(1), MemberId(2), MemberId(3), MemberId(4), MemberId(99)])
            .await
            .unwrap();

        assert_eq!(
            members,
            vec![
                Member::real(MemberId(1)),
                Member::placeholder(MemberId(2)),
                Member::real(MemberId(3)),
                Member::real(MemberId(4)),
            ]
        );
    }

    #[tokio::test]
    async fn test_relationships_match_either_endpoint() {
        let repo = InMemoryFamilyRepository::new();
        repo.add_relationship(MemberId(1), MemberId(2), RelationshipKind::Sibling);
        repo.add_relationship(MemberId(3), MemberId(1), RelationshipKind::Parent);
        repo.add_relationship(MemberId(4), MemberId(5), RelationshipKind::Spouse);

        let rows = repo.relationships_for(&[MemberId(1)]).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.involves(MemberId(1))));

        assert!(repo.relationships_for(&[]).await.unwrap().is_empty());
    }
}
