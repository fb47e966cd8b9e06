//! mathdrill-report: session log rendering.
//!
//! Turns a ranked [`SessionReport`](mathdrill_core::report::SessionReport)
//! into the plain-text practice log and a self-contained HTML page, and
//! writes timestamped log files.

pub mod html;
pub mod log;
pub mod text;

pub use log::{write_session_logs, LogFiles};
pub use text::{format_total_time, render_text};
