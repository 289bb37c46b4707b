mod edge;
mod family_group;
mod ids;
mod member;
mod membership;
mod placeholder;
mod relationship;

pub use edge::Edge;
pub use family_group::FamilyGroup;
pub use ids::{MemberId, TeamId};
pub use member::Member;
pub use membership::{MembershipRole, TeamMembership};
pub use placeholder::{PlaceholderPattern, DEFAULT_PLACEHOLDER_PREFIXES};
pub use relationship::{Relationship, RelationshipKind};
