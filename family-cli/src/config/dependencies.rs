//! Dependency initialization and wiring for the command line.

use std::sync::Arc;

use family_graph::FamilyService;
use family_repository::MySqlFamilyRepository;
use family_shared::types::PlaceholderPattern;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use super::DatabaseConfig;
use crate::cli::ConnectionArgs;
use crate::CliError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// MySQL repository, also used directly for connection validation.
    pub repository: Arc<MySqlFamilyRepository>,
    /// Family resolution over the repository.
    pub service: FamilyService,
}

impl Dependencies {
    /// Initialize all dependencies from resolved arguments.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Connected repository and service
    /// * `Err(CliError)` - Missing settings or an unreachable database
    pub async fn new(args: &ConnectionArgs) -> Result<Self, CliError> {
        let database = DatabaseConfig::from_args(args)?;
        let placeholders = placeholder_pattern(args.placeholder_domain.as_deref());

        if args.max_connections == 0 {
            return Err(CliError::config("--max-connections must be at least 1"));
        }

        info!(
            database = %database.describe(),
            max_connections = args.max_connections,
            placeholder_domain = ?placeholders.domain(),
            "Initializing dependencies"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(args.max_connections)
            .connect_with(database.connect_options()?)
            .await
            .map_err(CliError::connection)?;

        info!("MySQL connection established");

        let repository = Arc::new(MySqlFamilyRepository::new(pool, placeholders));
        let service = FamilyService::from_repository(repository.clone());

        Ok(Self {
            repository,
            service,
        })
    }
}

/// Placeholder pattern for an optional email domain.
pub fn placeholder_pattern(domain: Option<&str>) -> PlaceholderPattern {
    match domain.map(str::trim).filter(|d| !d.is_empty()) {
        Some(domain) => PlaceholderPattern::for_domain(domain),
        None => PlaceholderPattern::default(),
    }
}
