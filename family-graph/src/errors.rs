//! Error types for family-group resolution.

use family_repository::RepositoryError;
use thiserror::Error;

/// Errors that abort a family query.
///
/// Data-quality problems are not errors; see
/// [`DataQualityWarning`](crate::DataQualityWarning).
#[derive(Error, Debug)]
pub enum FamilyError {
    /// The data source failed or returned rows that could not be typed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
