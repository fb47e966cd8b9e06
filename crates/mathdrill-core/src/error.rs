//! Drill engine error types.
//!
//! Every variant is a local validation failure detected at the boundary of
//! an engine operation. None of them are retried; the caller decides how to
//! present them.

use thiserror::Error;

/// Errors returned by the practice session engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrillError {
    /// The numeric range cannot produce a problem set.
    #[error("invalid range [{min}, {max}]: {reason}")]
    InvalidRange { min: i64, max: i64, reason: String },

    /// A session could not be started with the given configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An answer was submitted for a problem outside the active session.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    /// An answer was submitted for a problem already retired as mastered.
    #[error("problem already mastered: {0}")]
    AlreadyMastered(String),

    /// The reported response time is negative or not a number.
    #[error("invalid elapsed time: {0}")]
    InvalidElapsed(f64),

    /// The operation needs a session but none has been started.
    #[error("no active session")]
    NoActiveSession,

    /// The report was requested before every problem was mastered.
    #[error("session not completed: {remaining} problem(s) remaining")]
    SessionNotCompleted { remaining: usize },
}

impl DrillError {
    /// Returns `true` if the error was caused by the session configuration
    /// rather than by a call made during the session.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DrillError::InvalidRange { .. } | DrillError::InvalidConfiguration(_)
        )
    }
}
