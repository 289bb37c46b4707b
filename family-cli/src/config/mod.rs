//! Configuration and dependency initialization.

mod database;
mod dependencies;

pub use database::{mask_secret, DatabaseConfig};
pub use dependencies::Dependencies;

/// Default MySQL port.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default size of the connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
