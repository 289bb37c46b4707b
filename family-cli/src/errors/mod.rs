//! Error types for the family-groups command line.

use std::path::PathBuf;

use family_graph::FamilyError;
use family_repository::RepositoryError;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// Errors that can occur while configuring or running a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The database could not be reached.
    #[error("Failed to connect to MySQL: {source}. {hint}")]
    ConnectionError {
        source: sqlx::Error,
        hint: &'static str,
    },

    /// Connection validation found unreadable tables. Carries the rendered
    /// report so it can still be shown.
    #[error("Validation failed: {unreadable} table(s) are not accessible")]
    ValidationError { unreadable: usize, rendered: String },

    /// Error from the data source.
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    /// Error while resolving families.
    #[error("Family resolution error: {0}")]
    FamilyError(#[from] FamilyError),

    /// Error rendering JSON output.
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),

    /// Error rendering CSV output.
    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    /// The output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a connection error with a hint about which setting to check.
    pub fn connection(source: sqlx::Error) -> Self {
        let hint = connection_hint(&source);
        Self::ConnectionError { source, hint }
    }

    /// Output rendered before the command failed, if any.
    pub fn rendered_output(&self) -> Option<&str> {
        match self {
            Self::ValidationError { rendered, .. } => Some(rendered),
            _ => None,
        }
    }
}

/// Suggests which setting is most likely wrong for a failed connection.
fn connection_hint(error: &sqlx::Error) -> &'static str {
    let number = match error {
        sqlx::Error::Database(db) => db
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(MySqlDatabaseError::number),
        _ => None,
    };

    match number {
        // ER_ACCESS_DENIED_ERROR
        Some(1045) => "Check your MYSQL_USER and MYSQL_PASSWORD",
        // ER_BAD_DB_ERROR
        Some(1049) => "Check your MYSQL_DATABASE",
        _ => "Check your MYSQL_HOST and ensure the database is accessible",
    }
}
