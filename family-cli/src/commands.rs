//! Command execution.

use std::path::Path;

use family_repository::ConnectionReport;
use family_shared::types::TeamId;
use tracing::{info, warn};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::Dependencies;
use crate::output;
use crate::CliError;

/// Runs the parsed command and returns its rendered result.
///
/// Nothing is written here; pass the result to [`emit`].
pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let deps = Dependencies::new(&cli.connection).await?;

    match &cli.command {
        Command::Count { team_id } => {
            let count = deps.service.count_families(TeamId(*team_id)).await?;
            info!(team_id = %count.team_id, count = count.count, cohort = %count.cohort, "Families counted");
            match cli.format {
                OutputFormat::Table => Ok(output::render_count(&count)),
                OutputFormat::Json => output::to_json(&count),
                OutputFormat::Csv => output::count_csv(&count),
            }
        }
        Command::Groups { team_id, .. } => {
            let report = deps.service.analyze_team(TeamId(*team_id)).await?;
            match cli.format {
                OutputFormat::Table => Ok(output::render_report(&report)),
                OutputFormat::Json => output::to_json(&report),
                OutputFormat::Csv => output::report_csv(&report),
            }
        }
        Command::Cohorts { .. } => {
            let distribution = deps
                .service
                .cohort_distribution(&cli.command.team_ids())
                .await?;
            match cli.format {
                OutputFormat::Table => Ok(output::render_distribution(&distribution)),
                OutputFormat::Json => output::to_json(&distribution),
                OutputFormat::Csv => output::distribution_csv(&distribution),
            }
        }
        Command::Validate => {
            let report = deps.repository.validate_connection().await?;
            check_validation(&report, cli.format)
        }
    }
}

/// Renders a validation report, failing when any table is unreadable.
fn check_validation(report: &ConnectionReport, format: OutputFormat) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Table => output::render_validation(report),
        OutputFormat::Json => output::to_json(report)?,
        OutputFormat::Csv => output::validation_csv(report)?,
    };

    let unreadable = report.tables.iter().filter(|t| !t.is_accessible()).count();
    if unreadable > 0 {
        warn!(unreadable, "Some tables are not accessible");
        return Err(CliError::ValidationError {
            unreadable,
            rendered,
        });
    }

    info!(server_version = %report.server_version, "Connection validated");
    Ok(rendered)
}

/// Writes a rendered result to `destination`, or to stdout when there is none.
pub fn emit(rendered: &str, destination: Option<&Path>) -> Result<(), CliError> {
    match destination {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::WriteError {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = rendered.len(), "Wrote output file");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
