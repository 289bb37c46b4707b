use family_shared::types::{Member, MemberId};
use crate::errors::RepositoryError;

/// Read access to member accounts.
///
/// Implementations classify each account as placeholder or real at this
/// boundary, so callers only ever see typed `Member` records.
#[async_trait::async_trait]
pub trait MemberRepository: Send + Sync {
    /// Loads the accounts for `ids`. Unknown ids are absent from the result.
    async fn members(&self, ids: &[MemberId]) -> Result<Vec<Member>, RepositoryError>;
}
