//! Per-team family queries
//!
//! [`FamilyService`] loads a snapshot of one team's roster, accounts and
//! relationships through the injected repositories, resolves placeholders
//! and groups the result. Nothing is cached between calls.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use family_repository::{MemberRepository, MembershipRepository, RelationshipRepository};
use family_shared::types::{FamilyGroup, Member, MemberId, TeamId};
use tracing::{debug, info, warn};

use crate::grouping::group_members;
use crate::resolver::{owner_candidate, OwnerCandidate, OwnerResolver, RelationshipIndex};
use crate::{CohortDistribution, DataQualityWarning, FamilyCount, FamilyError, FamilyReport};

/// Maximum rounds of owner discovery when owners are themselves placeholders.
pub const MAX_OWNER_ROUNDS: usize = 8;

/// Resolves teams into family groups.
pub struct FamilyService {
    memberships: Arc<dyn MembershipRepository>,
    members: Arc<dyn MemberRepository>,
    relationships: Arc<dyn RelationshipRepository>,
}

impl FamilyService {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        members: Arc<dyn MemberRepository>,
        relationships: Arc<dyn RelationshipRepository>,
    ) -> Self {
        Self {
            memberships,
            members,
            relationships,
        }
    }

    /// Builds a service over one store that implements every interface.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: MembershipRepository + MemberRepository + RelationshipRepository + 'static,
    {
        Self::new(repository.clone(), repository.clone(), repository)
    }

    /// Number of families on a team and its cohort label.
    pub async fn count_families(&self, team_id: TeamId) -> Result<FamilyCount, FamilyError> {
        Ok(self.analyze_team(team_id).await?.to_count())
    }

    /// Family groups on a team, for inspection.
    pub async fn family_groups(&self, team_id: TeamId) -> Result<Vec<FamilyGroup>, FamilyError> {
        Ok(self.analyze_team(team_id).await?.groups)
    }

    /// Counts families for each team and tallies teams per cohort.
    ///
    /// Teams are queried one after another; the first failure aborts.
    pub async fn cohort_distribution(
        &self,
        team_ids: &[TeamId],
    ) -> Result<CohortDistribution, FamilyError> {
        let mut distribution = CohortDistribution::new();
        for team_id in team_ids {
            distribution.record(self.count_families(*team_id).await?);
        }

        info!(teams = distribution.total_teams(), "Cohort distribution computed");
        Ok(distribution)
    }

    /// Resolves a team into family groups, with any data-quality warnings.
    pub async fn analyze_team(&self, team_id: TeamId) -> Result<FamilyReport, FamilyError> {
        let memberships = self.memberships.team_memberships(team_id).await?;
        let roster: BTreeSet<MemberId> = memberships
            .iter()
            .filter(|m| m.participates())
            .map(|m| m.member_id)
            .collect();

        if roster.is_empty() {
            info!(team_id = %team_id, "Team has no participating members");
            return Ok(FamilyReport::empty(team_id));
        }

        let roster_ids: Vec<MemberId> = roster.iter().copied().collect();
        let mut warnings = Vec::new();

        let mut known: HashMap<MemberId, Member> = self
            .members
            .members(&roster_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        for id in &roster_ids {
            if !known.contains_key(id) {
                warnings.push(DataQualityWarning::UnknownMember { member: *id });
                known.insert(*id, Member::real(*id));
            }
        }

        let placeholders: Vec<MemberId> = roster_ids
            .iter()
            .copied()
            .filter(|id| known.get(id).is_some_and(|m| m.is_placeholder))
            .collect();

        let mut index = self.discover_owners(&placeholders, &mut known).await?;

        let resolver = OwnerResolver::new(&known, &index);
        let mut resolved_by_member: HashMap<MemberId, MemberId> = HashMap::with_capacity(roster_ids.len());
        let mut isolated: HashSet<MemberId> = HashSet::new();
        for id in &roster_ids {
            let resolution = resolver.resolve(*id);
            if let Some(warning) = resolution.warning {
                if warning.isolates_member() {
                    isolated.insert(*id);
                }
                warnings.push(warning);
            }
            resolved_by_member.insert(*id, resolution.resolved);
        }

        let resolved: BTreeSet<MemberId> = resolved_by_member.values().copied().collect();
        let resolved_ids: Vec<MemberId> = resolved.iter().copied().collect();
        index.extend(self.relationships.relationships_for(&resolved_ids).await?);

        // Unresolved placeholders stay singletons: none of their rows are followed
        let edges = index
            .edges()
            .filter(|edge| {
                let (a, b) = edge.endpoints();
                !isolated.contains(&a) && !isolated.contains(&b)
            })
            .map(|edge| edge.map(|id| resolved_by_member.get(&id).copied().unwrap_or(id)));
        let groups = group_members(resolved, edges);

        for warning in &warnings {
            warn!(team_id = %team_id, member_id = %warning.member(), "{}", warning);
        }

        info!(
            team_id = %team_id,
            members = roster_ids.len(),
            placeholders = placeholders.len(),
            isolated = isolated.len(),
            families = groups.len(),
            warnings = warnings.len(),
            "Team resolved into family groups"
        );

        Ok(FamilyReport {
            team_id,
            member_count: roster_ids.len(),
            groups,
            warnings,
        })
    }

    /// Loads the relationships needed to resolve `placeholders`.
    ///
    /// Runs in rounds: each round loads the relationships of the current
    /// frontier and the accounts of their candidate owners. Owners that turn
    /// out to be placeholders form the next frontier.
    async fn discover_owners(
        &self,
        placeholders: &[MemberId],
        known: &mut HashMap<MemberId, Member>,
    ) -> Result<RelationshipIndex, FamilyError> {
        let mut index = RelationshipIndex::new();
        let mut loaded: HashSet<MemberId> = HashSet::new();
        let mut frontier: Vec<MemberId> = placeholders.to_vec();

        for round in 0..MAX_OWNER_ROUNDS {
            if frontier.is_empty() {
                break;
            }

            index.extend(self.relationships.relationships_for(&frontier).await?);
            loaded.extend(frontier.iter().copied());

            let owners: BTreeSet<MemberId> = frontier
                .iter()
                .filter_map(|id| match owner_candidate(*id, &index) {
                    OwnerCandidate::Owner(owner) => Some(owner),
                    _ => None,
                })
                .collect();

            let unknown: Vec<MemberId> = owners
                .iter()
                .copied()
                .filter(|id| !known.contains_key(id))
                .collect();
            if !unknown.is_empty() {
                for member in self.members.members(&unknown).await? {
                    known.insert(member.id, member);
                }
            }

            debug!(round, frontier = frontier.len(), owners = owners.len(), "Owner discovery round");

            frontier = owners
                .into_iter()
                .filter(|id| !loaded.contains(id) && known.get(id).is_some_and(|m| m.is_placeholder))
                .collect();
        }

        Ok(index)
    }
}
