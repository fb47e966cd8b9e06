//! Per-problem practice state.
//!
//! A [`ProblemRecord`] accumulates attempts for one problem and derives its
//! mastery from them. Counts only ever grow.

use serde::{Deserialize, Serialize};

use crate::model::ProblemSpec;

/// Where a problem stands in the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemState {
    Unattempted,
    InProgress,
    Mastered,
}

/// Practice state for one problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRecord {
    spec: ProblemSpec,
    mastery_threshold_secs: f64,
    correct_count: u32,
    incorrect_count: u32,
    last_response_secs: Option<f64>,
    best_correct_secs: Option<f64>,
    total_secs: f64,
    mastered: bool,
}

impl ProblemRecord {
    pub fn new(spec: ProblemSpec, mastery_threshold_secs: f64) -> Self {
        Self {
            spec,
            mastery_threshold_secs,
            correct_count: 0,
            incorrect_count: 0,
            last_response_secs: None,
            best_correct_secs: None,
            total_secs: 0.0,
            mastered: false,
        }
    }

    /// Record one answer and re-evaluate mastery.
    ///
    /// Returns the mastery flag after the attempt.
    pub fn record_attempt(&mut self, correct: bool, elapsed_secs: f64) -> bool {
        if correct {
            self.correct_count += 1;
            self.best_correct_secs = Some(match self.best_correct_secs {
                Some(best) => best.min(elapsed_secs),
                None => elapsed_secs,
            });
        } else {
            self.incorrect_count += 1;
        }
        self.last_response_secs = Some(elapsed_secs);
        self.total_secs += elapsed_secs;
        self.mastered = self.meets_mastery();
        self.mastered
    }

    /// More correct than incorrect answers, and the latest one was faster
    /// than the threshold.
    fn meets_mastery(&self) -> bool {
        self.correct_count > self.incorrect_count
            && self
                .last_response_secs
                .is_some_and(|secs| secs < self.mastery_threshold_secs)
    }

    pub fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    pub fn last_response_secs(&self) -> Option<f64> {
        self.last_response_secs
    }

    /// Fastest correct answer so far.
    pub fn best_correct_secs(&self) -> Option<f64> {
        self.best_correct_secs
    }

    /// Sum of every response time recorded for this problem.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    pub fn is_mastered(&self) -> bool {
        self.mastered
    }

    pub fn state(&self) -> ProblemState {
        if self.mastered {
            ProblemState::Mastered
        } else if self.attempts() == 0 {
            ProblemState::Unattempted
        } else {
            ProblemState::InProgress
        }
    }
}
