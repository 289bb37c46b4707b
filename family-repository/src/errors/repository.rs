use thiserror::Error;

/// Represents errors that can occur within the family repository.
///
/// Any of these is fatal to the query that triggered it; callers receive
/// them unmodified.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

impl RepositoryError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRow(msg.into())
    }
}
