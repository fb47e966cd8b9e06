//! Session-level aggregates: progress and accuracy/latency summaries.

use serde::{Deserialize, Serialize};

use crate::record::ProblemRecord;

/// How far a session has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub mastered: usize,
    pub total: usize,
}

impl Progress {
    pub fn remaining(&self) -> usize {
        self.total - self.mastered
    }

    pub fn is_complete(&self) -> bool {
        self.mastered == self.total
    }

    /// Mastered share in `0.0..=1.0`. An empty session counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.mastered as f64 / self.total as f64
    }
}

/// Count mastered records.
pub fn progress(records: &[ProblemRecord]) -> Progress {
    Progress {
        mastered: records.iter().filter(|r| r.is_mastered()).count(),
        total: records.len(),
    }
}

/// Aggregate statistics over every attempt in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub problem_count: usize,
    pub attempts: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// Correct answers over all answers (0.0 with no attempts).
    pub accuracy: f64,
    /// Mean response time per attempt in seconds.
    pub mean_response_secs: f64,
    /// Sum of every response time.
    pub total_time_secs: f64,
}

/// Compute aggregate statistics for a set of records.
pub fn compute_session_stats(records: &[ProblemRecord]) -> SessionStats {
    let correct: u32 = records.iter().map(|r| r.correct_count()).sum();
    let incorrect: u32 = records.iter().map(|r| r.incorrect_count()).sum();
    let attempts = correct + incorrect;
    let total_time_secs: f64 = records.iter().map(|r| r.total_secs()).sum();

    let (accuracy, mean_response_secs) = if attempts == 0 {
        (0.0, 0.0)
    } else {
        (
            correct as f64 / attempts as f64,
            total_time_secs / attempts as f64,
        )
    };

    SessionStats {
        problem_count: records.len(),
        attempts,
        correct,
        incorrect,
        accuracy,
        mean_response_secs,
        total_time_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Operation, ProblemSpec};

    fn record_with(attempts: &[(bool, f64)]) -> ProblemRecord {
        let mut r = ProblemRecord::new(ProblemSpec::new(Operation::Addition, 1, 1), 5.0);
        for &(correct, secs) in attempts {
            r.record_attempt(correct, secs);
        }
        r
    }

    #[test]
    fn progress_counts_mastered() {
        let records = vec![
            record_with(&[(true, 1.0)]),
            record_with(&[(false, 1.0)]),
            record_with(&[]),
        ];
        let p = progress(&records);
        assert_eq!(p.mastered, 1);
        assert_eq!(p.total, 3);
        assert_eq!(p.remaining(), 2);
        assert!(!p.is_complete());
    }

    #[test]
    fn empty_progress_is_complete() {
        let p = progress(&[]);
        assert!(p.is_complete());
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn stats_over_attempts() {
        let records = vec![
            record_with(&[(false, 3.0), (true, 1.0)]),
            record_with(&[(true, 2.0)]),
        ];
        let stats = compute_session_stats(&records);
        assert_eq!(stats.attempts, 3);
        assert_eq!(stats.correct, 2);
        assert_eq!(stats.incorrect, 1);
        assert!((stats.accuracy - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.total_time_secs - 6.0).abs() < 1e-9);
        assert!((stats.mean_response_secs - 2.0).abs() < 1e-9);
    }

    #[test]
    fn stats_without_attempts() {
        let stats = compute_session_stats(&[record_with(&[])]);
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert_eq!(stats.mean_response_secs, 0.0);
    }
}
