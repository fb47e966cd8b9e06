//! mathdrill-core: practice session engine for arithmetic facts.
//!
//! This crate generates problem sets, tracks per-problem accuracy and
//! latency, decides which unmastered problem to present next, and builds
//! the end-of-session report. Presentation, profile storage and log
//! writing live in the other workspace crates.

pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod record;
pub mod report;
pub mod scheduler;
pub mod statistics;

pub use engine::{AnswerOutcome, NextProblem, SessionEngine, SessionHandle, SessionStatus};
pub use error::DrillError;
pub use model::{Operation, ProblemSpec, SelectionOrder, SessionConfig};
pub use record::{ProblemRecord, ProblemState};
pub use report::{ReportEntry, SessionReport};
