//! Plain-text practice log.
//!
//! One line per problem, worst first, under a header with the total
//! practice time.

use mathdrill_core::report::{ReportEntry, SessionReport};

/// Format a duration the way the log header shows it: `"42.5 seconds"`
/// under a minute, `"2 minutes 5 seconds"` from a minute up.
pub fn format_total_time(total_secs: f64) -> String {
    if total_secs < 60.0 {
        return format!("{total_secs:.1} seconds");
    }
    let minutes = (total_secs / 60.0).floor() as u64;
    let seconds = (total_secs % 60.0) as u64;
    format!(
        "{minutes} minute{} {seconds} second{}",
        plural(minutes),
        plural(seconds)
    )
}

fn plural(n: u64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Render one report line, e.g.
/// `"7 + 8 = 15    (2 correct, 1 incorrect; last time = 2.0 s; best time = 1.4 s)"`.
pub fn render_entry(entry: &ReportEntry) -> String {
    let secs = |v: Option<f64>| {
        v.map(|s| format!("{s:.1} s"))
            .unwrap_or_else(|| "n/a".to_string())
    };
    format!(
        "{}{}    ({} correct, {} incorrect; last time = {}; best time = {})",
        entry.question,
        entry.answer,
        entry.correct_count,
        entry.incorrect_count,
        secs(entry.last_response_secs),
        secs(entry.best_correct_secs)
    )
}

/// Render the full text log.
pub fn render_text(report: &SessionReport) -> String {
    let mut out = format!(
        "Flashcard Deck (total time {}):\n\n",
        format_total_time(report.total_time_secs())
    );
    for entry in &report.entries {
        out.push_str(&render_entry(entry));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathdrill_core::model::{Operation, ProblemSpec};
    use mathdrill_core::record::ProblemRecord;
    use mathdrill_core::report::SessionReport;

    fn entry(attempts: &[(bool, f64)]) -> ReportEntry {
        let mut r = ProblemRecord::new(ProblemSpec::new(Operation::Addition, 7, 8), 5.0);
        for &(correct, secs) in attempts {
            r.record_attempt(correct, secs);
        }
        ReportEntry::from_record(&r)
    }

    #[test]
    fn total_time_under_a_minute() {
        assert_eq!(format_total_time(42.46), "42.5 seconds");
        assert_eq!(format_total_time(0.0), "0.0 seconds");
    }

    #[test]
    fn total_time_in_minutes() {
        assert_eq!(format_total_time(60.0), "1 minute 0 seconds");
        assert_eq!(format_total_time(61.2), "1 minute 1 second");
        assert_eq!(format_total_time(125.9), "2 minutes 5 seconds");
    }

    #[test]
    fn first_try_line() {
        assert_eq!(
            render_entry(&entry(&[(true, 1.23)])),
            "7 + 8 = 15    (1 correct, 0 incorrect; last time = 1.2 s; best time = 1.2 s)"
        );
    }

    #[test]
    fn multi_attempt_line() {
        assert_eq!(
            render_entry(&entry(&[(false, 4.0), (true, 1.44), (true, 2.0)])),
            "7 + 8 = 15    (2 correct, 1 incorrect; last time = 2.0 s; best time = 1.4 s)"
        );
    }

    #[test]
    fn line_shows_latest_time_not_best() {
        let line = render_entry(&entry(&[(true, 1.2), (false, 3.0), (true, 4.7)]));
        assert!(line.contains("last time = 4.7 s"));
        assert!(line.contains("best time = 1.2 s"));
        assert!(line.contains("1 incorrect"));
    }

    #[test]
    fn unattempted_line() {
        assert_eq!(
            render_entry(&entry(&[])),
            "7 + 8 = 15    (0 correct, 0 incorrect; last time = n/a; best time = n/a)"
        );
    }

    #[test]
    fn full_log_keeps_report_order() {
        let mut slow = ProblemRecord::new(ProblemSpec::new(Operation::Subtraction, 2, 3), 5.0);
        slow.record_attempt(true, 4.0);
        let mut fast = ProblemRecord::new(ProblemSpec::new(Operation::Subtraction, 3, 2), 5.0);
        fast.record_attempt(true, 1.0);

        let report = SessionReport::build(
            uuid::Uuid::nil(),
            Operation::Subtraction,
            (2, 3),
            5.0,
            (chrono::Utc::now(), chrono::Utc::now()),
            &[fast, slow],
        );
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Flashcard Deck (total time 5.0 seconds):");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("5 - 2 = 3"));
        assert!(lines[3].starts_with("5 - 3 = 2"));
    }
}
