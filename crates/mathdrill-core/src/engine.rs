//! Practice session orchestrator.
//!
//! The engine is driven synchronously by the presentation layer:
//! request a problem, submit the answer with the time it took, repeat until
//! the completion signal arrives. Starting a new session discards the old
//! one entirely.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DrillError;
use crate::generator::generate;
use crate::model::{Operation, ProblemSpec, SessionConfig};
use crate::record::ProblemRecord;
use crate::report::SessionReport;
use crate::scheduler::{strategy_for, SelectionStrategy, SessionScheduler};
use crate::statistics::{progress, Progress};

/// Lifecycle of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// Returned by [`SessionEngine::start_session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHandle {
    pub id: Uuid,
    pub operation: Operation,
    pub problem_count: usize,
    pub mastery_threshold_secs: f64,
    pub started_at: DateTime<Utc>,
}

/// What to show next.
#[derive(Debug, Clone)]
pub enum NextProblem {
    /// Present this problem.
    Present(ProblemSpec),
    /// Every problem is mastered; carries the final report.
    Completed(SessionReport),
}

/// Result of one answer submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The correct answer, for feedback.
    pub expected: i64,
    /// Whether the problem is now mastered (and retired).
    pub mastered: bool,
    pub progress: Progress,
}

struct Session {
    id: Uuid,
    config: SessionConfig,
    started_at: DateTime<Utc>,
    /// Generation order.
    records: Vec<ProblemRecord>,
    index: HashMap<ProblemSpec, usize>,
    scheduler: SessionScheduler,
    status: SessionStatus,
    completed_at: Option<DateTime<Utc>>,
    last_answered: Option<ProblemSpec>,
}

impl Session {
    fn handle(&self) -> SessionHandle {
        SessionHandle {
            id: self.id,
            operation: self.config.operation,
            problem_count: self.records.len(),
            mastery_threshold_secs: self.config.mastery_threshold_secs,
            started_at: self.started_at,
        }
    }

    fn report(&self) -> SessionReport {
        SessionReport::build(
            self.id,
            self.config.operation,
            (self.config.min_value, self.config.max_value),
            self.config.mastery_threshold_secs,
            (
                self.started_at,
                self.completed_at.unwrap_or(self.started_at),
            ),
            &self.records,
        )
    }

    fn complete(&mut self) {
        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Completed;
            self.completed_at = Some(Utc::now());
            tracing::info!(
                "session {} completed: {} problems mastered",
                self.id,
                self.records.len()
            );
        }
    }
}

/// The top-level engine exposed to the presentation layer.
#[derive(Default)]
pub struct SessionEngine {
    session: Option<Session>,
}

impl SessionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, replacing any session already running.
    ///
    /// The selection strategy follows `config.order`.
    pub fn start_session(&mut self, config: SessionConfig) -> Result<SessionHandle, DrillError> {
        let strategy = strategy_for(config.order, config.seed);
        self.start_session_with(config, strategy)
    }

    /// Start a session with a caller-supplied selection strategy.
    pub fn start_session_with(
        &mut self,
        config: SessionConfig,
        strategy: Box<dyn SelectionStrategy>,
    ) -> Result<SessionHandle, DrillError> {
        let threshold = config.mastery_threshold_secs;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(DrillError::InvalidConfiguration(format!(
                "mastery threshold must be a positive number of seconds, got {threshold}"
            )));
        }

        let specs = generate(config.operation, config.min_value, config.max_value)
            .map_err(|e| DrillError::InvalidConfiguration(e.to_string()))?;

        let records: Vec<ProblemRecord> = specs
            .iter()
            .map(|&spec| ProblemRecord::new(spec, threshold))
            .collect();
        let index = specs.iter().enumerate().map(|(i, &s)| (s, i)).collect();

        if let Some(old) = self.session.take() {
            tracing::debug!("discarding session {}", old.id);
        }

        let scheduler = SessionScheduler::new(strategy);
        let session = Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            records,
            index,
            status: SessionStatus::Active,
            completed_at: None,
            last_answered: None,
            config,
            scheduler,
        };
        tracing::info!(
            "session {} started: {} {} problems in [{}, {}], mastery under {}s, {} order",
            session.id,
            session.records.len(),
            session.config.operation,
            session.config.min_value,
            session.config.max_value,
            threshold,
            session.scheduler.strategy_name()
        );

        let handle = session.handle();
        self.session = Some(session);
        Ok(handle)
    }

    /// Next problem to present, or the completion signal once every problem
    /// is mastered.
    pub fn request_next_problem(&mut self) -> Result<NextProblem, DrillError> {
        let session = self.session.as_mut().ok_or(DrillError::NoActiveSession)?;

        if session.status == SessionStatus::Active {
            let next = session
                .scheduler
                .next_problem(&session.records, session.last_answered.as_ref());
            if let Some(spec) = next {
                return Ok(NextProblem::Present(spec));
            }
            session.complete();
        }

        Ok(NextProblem::Completed(session.report()))
    }

    /// Check `answer` against `spec` and record the attempt.
    pub fn submit_answer(
        &mut self,
        spec: &ProblemSpec,
        answer: i64,
        elapsed_secs: f64,
    ) -> Result<AnswerOutcome, DrillError> {
        let session = self.session.as_mut().ok_or(DrillError::NoActiveSession)?;

        if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
            return Err(DrillError::InvalidElapsed(elapsed_secs));
        }

        let idx = *session
            .index
            .get(spec)
            .ok_or_else(|| DrillError::UnknownProblem(spec.to_string()))?;
        let record = &mut session.records[idx];
        if record.is_mastered() {
            return Err(DrillError::AlreadyMastered(spec.to_string()));
        }

        let correct = spec.is_correct(answer);
        let mastered = record.record_attempt(correct, elapsed_secs);
        tracing::debug!(
            "{}{answer} {} in {elapsed_secs:.2}s ({} correct, {} incorrect){}",
            spec.question(),
            if correct { "correct" } else { "incorrect" },
            record.correct_count(),
            record.incorrect_count(),
            if mastered { ", mastered" } else { "" }
        );

        session.last_answered = Some(*spec);
        let progress = progress(&session.records);
        if progress.is_complete() {
            session.complete();
        }

        Ok(AnswerOutcome {
            correct,
            expected: spec.answer(),
            mastered,
            progress,
        })
    }

    /// The ranked report. Only available once the session is completed.
    pub fn build_report(&self) -> Result<SessionReport, DrillError> {
        let session = self.session.as_ref().ok_or(DrillError::NoActiveSession)?;
        if session.status != SessionStatus::Completed {
            return Err(DrillError::SessionNotCompleted {
                remaining: progress(&session.records).remaining(),
            });
        }
        Ok(session.report())
    }

    pub fn progress(&self) -> Option<Progress> {
        self.session.as_ref().map(|s| progress(&s.records))
    }

    pub fn status(&self) -> Option<SessionStatus> {
        self.session.as_ref().map(|s| s.status)
    }

    pub fn handle(&self) -> Option<SessionHandle> {
        self.session.as_ref().map(Session::handle)
    }

    /// Records of the active session, in generation order.
    pub fn records(&self) -> &[ProblemRecord] {
        self.session
            .as_ref()
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }

    /// Discard the active session without a report. Returns `false` if
    /// there was none.
    pub fn abandon(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                let p = progress(&session.records);
                tracing::info!(
                    "session {} abandoned with {}/{} mastered",
                    session.id,
                    p.mastered,
                    p.total
                );
                true
            }
            None => false,
        }
    }
}
