use family_shared::types::{TeamId, TeamMembership};
use crate::errors::RepositoryError;

/// Read access to team membership rows.
#[async_trait::async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Returns the memberships of `team_id` that take part in family grouping.
    ///
    /// Implementations return only active (`left_at` is null), non-follower
    /// rows.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The team whose roster is requested.
    ///
    /// # Returns
    ///
    /// A `Result` with the membership rows or a `RepositoryError` if the
    /// data store cannot be read.
    async fn team_memberships(
        &self,
        team_id: TeamId,
    ) -> Result<Vec<TeamMembership>, RepositoryError>;
}
