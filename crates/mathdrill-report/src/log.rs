//! Timestamped log files for finished sessions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mathdrill_core::report::SessionReport;

use crate::text::render_text;

/// Paths written by [`write_session_logs`].
#[derive(Debug, Clone)]
pub struct LogFiles {
    /// The plain-text log.
    pub text: PathBuf,
    /// JSON copy of the full report.
    pub json: PathBuf,
}

/// Keep profile names safe to use inside a file name.
fn file_stem_part(profile: &str) -> String {
    let cleaned: String = profile
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "Default".to_string()
    } else {
        cleaned
    }
}

/// Write `DrillLog_<profile>_<timestamp>.txt` and
/// `DrillReport_<profile>_<timestamp>.json` into `dir`, creating it if
/// needed. The timestamp is the session's completion time.
pub fn write_session_logs(report: &SessionReport, dir: &Path, profile: &str) -> Result<LogFiles> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let stamp = report.completed_at.format("%Y%m%dT%H%M%S");
    let profile = file_stem_part(profile);

    let text = dir.join(format!("DrillLog_{profile}_{stamp}.txt"));
    std::fs::write(&text, render_text(report))
        .with_context(|| format!("failed to write log to {}", text.display()))?;

    let json = dir.join(format!("DrillReport_{profile}_{stamp}.json"));
    report.save_json(&json)?;

    tracing::info!("session log written to {}", text.display());
    Ok(LogFiles { text, json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathdrill_core::model::{Operation, ProblemSpec};
    use mathdrill_core::record::ProblemRecord;

    fn make_report() -> SessionReport {
        let mut r = ProblemRecord::new(ProblemSpec::new(Operation::Multiplication, 6, 7), 5.0);
        r.record_attempt(true, 2.0);
        SessionReport::build(
            uuid::Uuid::nil(),
            Operation::Multiplication,
            (6, 7),
            5.0,
            (chrono::Utc::now(), chrono::Utc::now()),
            &[r],
        )
    }

    #[test]
    fn writes_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let report = make_report();
        let files = write_session_logs(&report, &dir.path().join("logs"), "Sam").unwrap();

        let name = files.text.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("DrillLog_Sam_"));
        assert!(name.ends_with(".txt"));

        let text = std::fs::read_to_string(&files.text).unwrap();
        assert!(text.contains("6 × 7 = 42"));

        let loaded = SessionReport::load_json(&files.json).unwrap();
        assert_eq!(loaded.entries.len(), 1);
    }

    #[test]
    fn profile_names_are_sanitized() {
        assert_eq!(file_stem_part("Ana Maria/2"), "Ana_Maria_2");
        assert_eq!(file_stem_part("  "), "Default");
        assert_eq!(file_stem_part("kid-1"), "kid-1");
    }
}
