//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use family_shared::types::TeamId;

use crate::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_MYSQL_PORT};

/// Family groups - count families on a team roster
#[derive(Parser, Debug)]
#[command(name = "family-groups")]
#[command(about = "Counts family groups per team and buckets them into cohorts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count the families on a team
    Count {
        /// Team identifier
        team_id: u64,
    },

    /// List the family groups on a team
    Groups {
        /// Team identifier
        team_id: u64,

        /// Write the result to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Tally teams per family cohort
    Cohorts {
        /// Team identifiers
        #[arg(required = true, num_args = 1..)]
        team_ids: Vec<u64>,

        /// Write the result to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check the database connection and table access
    Validate,
}

impl Command {
    /// Teams the command reports on.
    pub fn team_ids(&self) -> Vec<TeamId> {
        match self {
            Self::Count { team_id } | Self::Groups { team_id, .. } => vec![TeamId(*team_id)],
            Self::Cohorts { team_ids, .. } => team_ids.iter().copied().map(TeamId).collect(),
            Self::Validate => Vec::new(),
        }
    }

    /// File the result goes to, when not stdout.
    pub fn output(&self) -> Option<&Path> {
        match self {
            Self::Groups { output, .. } | Self::Cohorts { output, .. } => output.as_deref(),
            Self::Count { .. } | Self::Validate => None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// Database and classification settings, each with an environment fallback.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Full MySQL connection URL; takes precedence over the MYSQL_* settings
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    pub database_url: Option<String>,

    /// MySQL host
    #[arg(long = "mysql-host", env = "MYSQL_HOST", global = true)]
    pub host: Option<String>,

    /// MySQL port
    #[arg(long = "mysql-port", env = "MYSQL_PORT", default_value_t = DEFAULT_MYSQL_PORT, global = true)]
    pub port: u16,

    /// MySQL database name
    #[arg(long = "mysql-database", env = "MYSQL_DATABASE", global = true)]
    pub database: Option<String>,

    /// MySQL user
    #[arg(long = "mysql-user", env = "MYSQL_USER", global = true)]
    pub user: Option<String>,

    /// MySQL password
    #[arg(long = "mysql-password", env = "MYSQL_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Restrict placeholder detection to emails at this domain
    #[arg(long, env = "PLACEHOLDER_EMAIL_DOMAIN", global = true)]
    pub placeholder_domain: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS, global = true)]
    pub max_connections: u32,
}
