//! HTML session report.
//!
//! Produces a self-contained HTML file with the CSS inlined.

use anyhow::Result;
use std::path::Path;

use mathdrill_core::report::SessionReport;

use crate::text::format_total_time;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn secs(value: Option<f64>) -> String {
    value
        .map(|s| format!("{s:.1} s"))
        .unwrap_or_else(|| "-".to_string())
}

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>mathdrill report: {}</title>\n",
        report.operation
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>mathdrill report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\"><strong>{}</strong> | range {}–{} | {} problems | mastery under {:.1} s | {}</p>\n",
        report.operation,
        report.min_value,
        report.max_value,
        report.entries.len(),
        report.mastery_threshold_secs,
        report.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    let stats = &report.stats;
    html.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n");
    html.push_str("<table>\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Total time</th><td>{}</td></tr>\n",
        format_total_time(stats.total_time_secs)
    ));
    html.push_str(&format!(
        "<tr><th>Attempts</th><td>{} ({} correct, {} incorrect)</td></tr>\n",
        stats.attempts, stats.correct, stats.incorrect
    ));
    html.push_str(&format!(
        "<tr><th>Accuracy</th><td>{:.1}%</td></tr>\n",
        stats.accuracy * 100.0
    ));
    html.push_str(&format!(
        "<tr><th>Mean response</th><td>{:.2} s</td></tr>\n",
        stats.mean_response_secs
    ));
    html.push_str("</tbody>\n</table>\n</section>\n");

    // Ranked problems, worst first
    html.push_str("<section class=\"results\">\n<h2>Problems (slowest first)</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str("<thead><tr><th>Problem</th><th>Correct</th><th>Incorrect</th><th>Last time</th><th>Best time</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for e in &report.entries {
        let row_class = if e.incorrect_count > 0 { "missed" } else { "clean" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row_class,
            html_escape(&e.question),
            e.answer,
            e.correct_count,
            e.incorrect_count,
            secs(e.last_response_secs),
            secs(e.best_correct_secs),
        ));
    }
    html.push_str("</tbody></table>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --clean: #dcfce7; --missed: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --clean: #064e3b; --missed: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.clean { background: var(--clean); }
.missed { background: var(--missed); }
"#;
