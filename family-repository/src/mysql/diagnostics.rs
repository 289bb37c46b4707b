//! Connection validation for the MySQL repository.
//!
//! Confirms the server answers and reports how many rows each table the
//! resolution reads from holds. Unreadable tables are reported, not fatal.

use serde::Serialize;
use tracing::{info, warn};

use super::MySqlFamilyRepository;
use crate::RepositoryError;

/// Tables the family resolution reads from.
const CHECKED_TABLES: &[&str] = &["users", "teams", "team_members", "user_relationships"];

/// Accessibility of a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub table: String,
    /// Row count, when the table could be read.
    pub rows: Option<i64>,
    /// Error message, when it could not.
    pub error: Option<String>,
}

impl TableStatus {
    pub fn is_accessible(&self) -> bool {
        self.rows.is_some()
    }
}

/// Outcome of [`MySqlFamilyRepository::validate_connection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub server_version: String,
    pub tables: Vec<TableStatus>,
}

impl ConnectionReport {
    pub fn all_tables_accessible(&self) -> bool {
        self.tables.iter().all(TableStatus::is_accessible)
    }
}

impl MySqlFamilyRepository {
    /// Validates the connection and checks table access.
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionReport)` - The server answered; see the report for per-table access
    /// * `Err(RepositoryError)` - The server could not be queried at all
    pub async fn validate_connection(&self) -> Result<ConnectionReport, RepositoryError> {
        let ping: i64 = sqlx::query_scalar("SELECT 1").fetch_one(self.pool()).await?;
        if ping != 1 {
            return Err(RepositoryError::malformed(format!(
                "SELECT 1 returned {}",
                ping
            )));
        }

        let server_version: String = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(self.pool())
            .await?;

        let mut tables = Vec::with_capacity(CHECKED_TABLES.len());
        for table in CHECKED_TABLES {
            let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(self.pool())
                .await;

            let status = match count {
                Ok(rows) => {
                    info!(table = %table, rows, "Table accessible");
                    TableStatus {
                        table: table.to_string(),
                        rows: Some(rows),
                        error: None,
                    }
                }
                Err(e) => {
                    warn!(table = %table, error = %e, "Table not accessible");
                    TableStatus {
                        table: table.to_string(),
                        rows: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            tables.push(status);
        }

        Ok(ConnectionReport {
            server_version,
            tables,
        })
    }
}
