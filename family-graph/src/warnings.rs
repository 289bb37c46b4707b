//! Data-quality conditions found while resolving a roster.
//!
//! None of these abort a query; each is reported alongside the result.
//! A placeholder whose owner cannot be determined (missing, ambiguous or
//! cyclic) forms a singleton group: none of its relationship rows are
//! followed, so it never joins other members together. A member without a
//! user record is treated as a real account and grouped normally.

use family_shared::types::MemberId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// A placeholder has no relationship identifying its owner.
    MissingOwner { member: MemberId },
    /// A placeholder has more than one parent-tagged relationship.
    AmbiguousOwner {
        member: MemberId,
        candidates: Vec<MemberId>,
    },
    /// Following placeholder owners leads back to an earlier placeholder.
    OwnerCycle { member: MemberId },
    /// A membership references an account with no user record.
    UnknownMember { member: MemberId },
}

impl DataQualityWarning {
    pub fn member(&self) -> MemberId {
        match self {
            Self::MissingOwner { member }
            | Self::AmbiguousOwner { member, .. }
            | Self::OwnerCycle { member }
            | Self::UnknownMember { member } => *member,
        }
    }

    /// Whether the member is kept out of every other group.
    pub fn isolates_member(&self) -> bool {
        matches!(
            self,
            Self::MissingOwner { .. } | Self::AmbiguousOwner { .. } | Self::OwnerCycle { .. }
        )
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOwner { member } => {
                write!(f, "placeholder {} has no discoverable owner", member)
            }
            Self::AmbiguousOwner { member, candidates } => {
                let candidates: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
                write!(
                    f,
                    "placeholder {} has several possible owners: {}",
                    member,
                    candidates.join(", ")
                )
            }
            Self::OwnerCycle { member } => {
                write!(f, "placeholder {} has a cyclic ownership chain", member)
            }
            Self::UnknownMember { member } => {
                write!(f, "member {} has no user record", member)
            }
        }
    }
}
