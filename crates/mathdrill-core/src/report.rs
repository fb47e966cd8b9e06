//! End-of-session report with JSON persistence.
//!
//! Entries are ranked worst first: slowest latest answer at the top, ties
//! broken by more incorrect answers, then by generation order.

use std::cmp::Ordering;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Operation, ProblemSpec};
use crate::record::ProblemRecord;
use crate::statistics::{compute_session_stats, SessionStats};

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub problem: ProblemSpec,
    /// Question text as it was presented, e.g. `"3 + 4 = "`.
    pub question: String,
    pub answer: i64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub last_response_secs: Option<f64>,
    #[serde(default)]
    pub best_correct_secs: Option<f64>,
}

impl ReportEntry {
    pub fn from_record(record: &ProblemRecord) -> Self {
        let spec = *record.spec();
        Self {
            problem: spec,
            question: spec.question(),
            answer: spec.answer(),
            correct_count: record.correct_count(),
            incorrect_count: record.incorrect_count(),
            last_response_secs: record.last_response_secs(),
            best_correct_secs: record.best_correct_secs(),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }
}

/// Worse entries compare as `Less` so an ascending sort puts them first.
/// A missing latency ranks as the worst possible.
fn by_badness(a: &ReportEntry, b: &ReportEntry) -> Ordering {
    let latency = |e: &ReportEntry| e.last_response_secs.unwrap_or(f64::INFINITY);
    latency(b)
        .total_cmp(&latency(a))
        .then_with(|| b.incorrect_count.cmp(&a.incorrect_count))
}

/// Build report entries from records held in generation order, worst first.
///
/// The sort is stable, so entries that tie on latency and incorrect count
/// keep their generation order.
pub fn rank_entries(records: &[ProblemRecord]) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = records.iter().map(ReportEntry::from_record).collect();
    entries.sort_by(by_badness);
    entries
}

/// A complete session report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier.
    pub id: Uuid,
    pub operation: Operation,
    pub min_value: i64,
    pub max_value: i64,
    pub mastery_threshold_secs: f64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    /// Ranked entries, worst first.
    pub entries: Vec<ReportEntry>,
    pub stats: SessionStats,
}

impl SessionReport {
    /// Assemble a report from a session's records (in generation order).
    /// `span` is the session's start and completion time.
    pub fn build(
        id: Uuid,
        operation: Operation,
        range: (i64, i64),
        mastery_threshold_secs: f64,
        span: (DateTime<Utc>, DateTime<Utc>),
        records: &[ProblemRecord],
    ) -> Self {
        Self {
            id,
            operation,
            min_value: range.0,
            max_value: range.1,
            mastery_threshold_secs,
            started_at: span.0,
            completed_at: span.1,
            entries: rank_entries(records),
            stats: compute_session_stats(records),
        }
    }

    /// Sum of every response time in the session.
    pub fn total_time_secs(&self) -> f64 {
        self.stats.total_time_secs
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
