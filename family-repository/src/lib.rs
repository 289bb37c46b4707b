//! # Family Repository
//! This crate provides traits and implementations for reading the data that
//! family-group resolution needs: team memberships, member accounts and
//! family relationships. It includes the error type, the repository
//! interfaces, a MySQL implementation and an in-memory store.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod mysql;

pub use errors::RepositoryError;
pub use interfaces::{MemberRepository, MembershipRepository, RelationshipRepository};
pub use memory::InMemoryFamilyRepository;
pub use mysql::{ConnectionReport, MySqlFamilyRepository, TableStatus};
