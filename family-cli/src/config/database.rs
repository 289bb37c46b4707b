//! MySQL connection settings.

use std::str::FromStr;

use sqlx::mysql::MySqlConnectOptions;

use crate::cli::ConnectionArgs;
use crate::CliError;

/// Where to connect, as resolved from flags and environment.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// A full `mysql://` URL.
    Url(String),
    /// Individual connection settings.
    Parts {
        host: String,
        port: u16,
        database: String,
        user: String,
        password: String,
    },
}

impl DatabaseConfig {
    /// Resolves the connection settings.
    ///
    /// `DATABASE_URL` wins when present. Otherwise host, database, user and
    /// password are all required, and every missing one is named in the error.
    pub fn from_args(args: &ConnectionArgs) -> Result<Self, CliError> {
        if let Some(url) = non_empty(&args.database_url) {
            return Ok(Self::Url(url.to_string()));
        }

        let settings = [
            ("MYSQL_HOST", non_empty(&args.host)),
            ("MYSQL_DATABASE", non_empty(&args.database)),
            ("MYSQL_USER", non_empty(&args.user)),
            ("MYSQL_PASSWORD", non_empty(&args.password)),
        ];

        let missing: Vec<&str> = settings
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CliError::config(format!(
                "Missing MySQL configuration: {} (or set DATABASE_URL)",
                missing.join(", ")
            )));
        }

        let [host, database, user, password] = settings.map(|(_, value)| value.unwrap_or_default().to_string());

        Ok(Self::Parts {
            host,
            port: args.port,
            database,
            user,
            password,
        })
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, CliError> {
        match self {
            Self::Url(url) => MySqlConnectOptions::from_str(url)
                .map_err(|e| CliError::config(format!("Invalid DATABASE_URL: {}", e))),
            Self::Parts {
                host,
                port,
                database,
                user,
                password,
            } => Ok(MySqlConnectOptions::new()
                .host(host)
                .port(*port)
                .database(database)
                .username(user)
                .password(password)),
        }
    }

    /// Loggable description with secrets masked.
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => format!("url={}", mask_secret(url)),
            Self::Parts {
                host,
                port,
                database,
                user,
                password,
            } => format!(
                "host={} port={} database={} user={} password={}",
                host,
                port,
                database,
                user,
                mask_secret(password)
            ),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DatabaseConfig({})", self.describe())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Masks all but the last four characters of a secret.
///
/// Secrets of four characters or fewer are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", visible)
}
