//! MySQL implementation of the family repository.
mod diagnostics;
mod family_repository;

pub use diagnostics::{ConnectionReport, TableStatus};
pub use family_repository::MySqlFamilyRepository;

/// Upper bound on bind parameters placed in a single `IN (...)` list.
pub const IN_CLAUSE_CHUNK_SIZE: usize = 1000;
