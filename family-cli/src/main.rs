//! Family Groups Main Entry Point
//!
//! Counts family groups per team and buckets them into cohorts.

use clap::Parser;
use dotenv::dotenv;
use family_cli::{commands, Cli, CliError};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging on stderr, leaving stdout for results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("family_cli=info,family_graph=info,family_repository=info")
    });

    let json = env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .pretty(),
            )
            .init();
    }

    info!(
        service_name = "family-groups",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    match commands::run(&cli).await {
        Ok(rendered) => commands::emit(&rendered, cli.command.output()),
        Err(e) => {
            if let Some(rendered) = e.rendered_output() {
                commands::emit(rendered, cli.command.output())?;
            }
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}
