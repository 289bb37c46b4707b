//! This module defines and re-exports the interfaces for the family repository.
//! Each trait covers one table the resolution reads from.
mod members;
mod memberships;
mod relationships;

pub use members::MemberRepository;
pub use memberships::MembershipRepository;
pub use relationships::RelationshipRepository;
