//! Console rendering of command results.

use family_graph::{Cohort, CohortDistribution, DataQualityWarning, FamilyCount, FamilyReport};
use family_repository::ConnectionReport;
use family_shared::types::MemberId;
use serde::Serialize;

use crate::CliError;

/// Minimum width of every table column.
const MIN_COLUMN_WIDTH: usize = 10;

/// Formats an integer with thousands separators, e.g. `1,234,567`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats `n / total` as a percentage with one decimal, or `N/A` for a zero total.
pub fn format_percent(n: usize, total: usize) -> String {
    if total == 0 {
        return "N/A".to_string();
    }
    format!("{:.1}%", n as f64 / total as f64 * 100.0)
}

/// Renders an ASCII table: left-aligned cells joined by ` | ` under a dashed rule.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no data)\n".to_string();
    }

    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = join_cells(headers.iter().copied(), &widths);
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');
    for row in rows {
        out.push_str(&join_cells(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(width) => format!("{:<width$}", cell, width = *width),
            None => cell.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Lists warnings under a heading; empty when there are none.
pub fn render_warnings(warnings: &[DataQualityWarning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut out = format!("\nWarnings ({}):\n", format_number(warnings.len()));
    for warning in warnings {
        out.push_str(&format!("  - {}\n", warning));
    }
    out
}

pub fn render_count(count: &FamilyCount) -> String {
    render_table(
        &["Team", "Families", "Cohort"],
        &[vec![
            count.team_id.to_string(),
            format_number(count.count),
            count.cohort_label().to_string(),
        ]],
    )
}

pub fn render_report(report: &FamilyReport) -> String {
    let rows: Vec<Vec<String>> = report
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let members: Vec<String> = group.members().iter().map(|m| m.to_string()).collect();
            vec![
                format_number(i + 1),
                format_number(group.len()),
                members.join(", "),
            ]
        })
        .collect();

    let mut out = format!(
        "Team {}: {} families from {} members ({})\n\n",
        report.team_id,
        format_number(report.count()),
        format_number(report.member_count),
        report.cohort()
    );
    out.push_str(&render_table(&["Group", "Size", "Members"], &rows));
    out.push_str(&render_warnings(&report.warnings));
    out
}

pub fn render_distribution(distribution: &CohortDistribution) -> String {
    let total = distribution.total_teams();
    let rows: Vec<Vec<String>> = distribution
        .buckets()
        .map(|(cohort, teams)| {
            vec![
                cohort.to_string(),
                format_number(teams),
                format_percent(teams, total),
            ]
        })
        .collect();

    let mut out = render_table(&["Cohort", "Teams", "Share"], &rows);
    out.push_str(&format!("\nTotal teams: {}\n", format_number(total)));
    out
}

pub fn render_validation(report: &ConnectionReport) -> String {
    let rows: Vec<Vec<String>> = report
        .tables
        .iter()
        .map(|status| {
            let (rows, state) = match (status.rows, &status.error) {
                (Some(rows), _) => match usize::try_from(rows) {
                    Ok(rows) => (format_number(rows), "OK".to_string()),
                    Err(_) => (rows.to_string(), "invalid row count".to_string()),
                },
                (None, Some(error)) => ("-".to_string(), error.clone()),
                (None, None) => ("-".to_string(), "unreadable".to_string()),
            };
            vec![status.table.clone(), rows, state]
        })
        .collect();

    let mut out = format!("Server version: {}\n\n", report.server_version);
    out.push_str(&render_table(&["Table", "Rows", "Status"], &rows));
    out
}

/// Pretty-printed JSON of any result.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

#[derive(Serialize)]
struct GroupRow {
    group: usize,
    member_id: MemberId,
}

#[derive(Serialize)]
struct CohortRow {
    cohort: Cohort,
    teams: usize,
}

/// Writes `rows` as CSV, with a header row taken from their field names.
fn to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String, CliError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn count_csv(count: &FamilyCount) -> Result<String, CliError> {
    to_csv([count])
}

/// One row per member, numbered by group.
pub fn report_csv(report: &FamilyReport) -> Result<String, CliError> {
    to_csv(report.groups.iter().enumerate().flat_map(|(i, group)| {
        group.members().iter().map(move |member_id| GroupRow {
            group: i + 1,
            member_id: *member_id,
        })
    }))
}

pub fn distribution_csv(distribution: &CohortDistribution) -> Result<String, CliError> {
    to_csv(distribution.buckets().map(|(cohort, teams)| CohortRow { cohort, teams }))
}

pub fn validation_csv(report: &ConnectionReport) -> Result<String, CliError> {
    to_csv(&report.tables)
}
