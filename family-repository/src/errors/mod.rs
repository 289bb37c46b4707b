//! Error types for the family repository.
//! Consolidates the errors that can occur while reading family data.
mod repository;

pub use repository::RepositoryError;
