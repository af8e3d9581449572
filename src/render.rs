//! Plain-text rendering of a [`Dashboard`] for terminals.

use crate::dashboard::{Dashboard, DashboardState};
use crate::statistics::SummaryStats;
use crate::types::moon_phase::moon_glyph;
use std::fmt::Write;

pub const TITLE: &str = "AstroDash";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_MATCHES_TEXT: &str = "No data matches your filters.";
const NOT_AVAILABLE: &str = "N/A";

const HEADERS: [&str; 5] = ["Date", "Temperature (°F)", "Moon Rise", "Moon Set", "Moon Phase"];

/// Renders the title followed by exactly one of: the loading line, the error line,
/// or the summary, filter settings and table.
pub fn render(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dashboard(&mut out, dashboard);
    out
}

fn write_dashboard(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;
    match dashboard.state() {
        DashboardState::Loading => writeln!(out, "{LOADING_TEXT}"),
        DashboardState::Failed(message) => writeln!(out, "Error: {message}"),
        DashboardState::Ready(result_set) => {
            write_summary(out, &SummaryStats::from_result_set(result_set))?;
            writeln!(out)?;
            write_controls(out, dashboard)?;
            writeln!(out)?;
            write_table(out, dashboard)
        }
    }
}

fn write_summary(out: &mut String, stats: &SummaryStats) -> std::fmt::Result {
    let low = stats
        .lowest_temp
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |t| format!("{t}°F"));
    writeln!(out, "Low Temp: {low}")?;
    writeln!(
        out,
        "Earliest Moon Rise: {}",
        stats.earliest_moon_rise.as_deref().unwrap_or(NOT_AVAILABLE)
    )?;
    writeln!(
        out,
        "Most Common Moon Phase: {}",
        stats.most_common_moon_phase.as_deref().unwrap_or(NOT_AVAILABLE)
    )
}

fn write_controls(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    let criteria = dashboard.criteria();
    writeln!(out, "Date Search: \"{}\"", criteria.date_query)?;
    writeln!(
        out,
        "Moon Phase: {} (options: {})",
        criteria.phase,
        dashboard.phase_options().join(", ")
    )?;
    writeln!(
        out,
        "Temperature Range: {}°F - {}°F",
        criteria.temperature.low(),
        criteria.temperature.high()
    )
}

fn write_table(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    let rows: Vec<[String; 5]> = dashboard
        .filtered()
        .map(|view| {
            view.iter()
                .map(|record| {
                    [
                        record.date_key(),
                        record.temperature_f.to_string(),
                        record.moon_rise.clone(),
                        record.moon_set.clone(),
                        format!("{} {}", moon_glyph(Some(record.moon_phase.as_str())), record.moon_phase),
                    ]
                })
                .collect()
        })
        .unwrap_or_default();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS[..], &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule[..], &widths)?;
    if rows.is_empty() {
        return writeln!(out, "{NO_MATCHES_TEXT}");
    }
    for row in &rows {
        write_row(out, &row[..], &widths)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) -> std::fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    writeln!(out, "{}", line.join(" | ").trim_end())
}
