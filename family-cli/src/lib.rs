//! # Family Groups CLI
//!
//! Reports how many families play on a team, reading rosters and family
//! relationships from MySQL.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line arguments
//! - [`config`]: Connection settings and dependency initialization
//! - [`commands`]: Command execution
//! - [`output`]: Table, JSON and CSV rendering
//! - [`errors`]: Error types for the command line

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

pub use cli::Cli;
pub use config::Dependencies;
pub use errors::CliError;
