use family_shared::types::{MemberId, Relationship};
use crate::errors::RepositoryError;

/// Read access to stored family relationships.
#[async_trait::async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Returns every relationship row in which either endpoint is in `ids`.
    ///
    /// Rows are returned as stored; a link may appear in one direction only.
    async fn relationships_for(
        &self,
        ids: &[MemberId],
    ) -> Result<Vec<Relationship>, RepositoryError>;
}
