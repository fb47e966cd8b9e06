//! The `mathdrill show` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use mathdrill_core::report::SessionReport;
use mathdrill_report::html::{generate_html, write_html_report};
use mathdrill_report::{format_total_time, render_text};

pub fn execute(report_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = SessionReport::load_json(&report_path)?;

    if format == "html" {
        if let Some(path) = output {
            write_html_report(&report, &path)?;
            println!("HTML report written to {}", path.display());
            return Ok(());
        }
    }

    let rendered = match format.as_str() {
        "text" => render_text(&report),
        "table" => format!("{}\n{}\n", entries_table(&report), stats_table(&report)),
        "html" => generate_html(&report),
        "json" => serde_json::to_string_pretty(&report)? + "\n",
        other => anyhow::bail!("unknown format '{other}'. Use: text, table, html, json"),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Session totals as a two-column table.
pub fn stats_table(report: &SessionReport) -> Table {
    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec!["Session".to_string(), report.operation.to_string()]);
    table.add_row(vec![
        Cell::new("Range"),
        Cell::new(format!("{}..={}", report.min_value, report.max_value)),
    ]);
    table.add_row(vec![Cell::new("Problems"), Cell::new(stats.problem_count)]);
    table.add_row(vec![Cell::new("Attempts"), Cell::new(stats.attempts)]);
    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(format!("{:.1}%", stats.accuracy * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Mean response"),
        Cell::new(format!("{:.2} s", stats.mean_response_secs)),
    ]);
    table.add_row(vec![
        Cell::new("Total time"),
        Cell::new(format_total_time(report.total_time_secs())),
    ]);
    table
}

/// One row per problem, worst first.
pub fn entries_table(report: &SessionReport) -> Table {
    let secs = |v: Option<f64>| {
        v.map(|s| format!("{s:.1} s"))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut table = Table::new();
    table.set_header(vec!["Problem", "Answer", "Correct", "Incorrect", "Last", "Best"]);
    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(entry.problem),
            Cell::new(entry.answer),
            Cell::new(entry.correct_count),
            Cell::new(entry.incorrect_count),
            Cell::new(secs(entry.last_response_secs)),
            Cell::new(secs(entry.best_correct_secs)),
        ]);
    }
    table
}
