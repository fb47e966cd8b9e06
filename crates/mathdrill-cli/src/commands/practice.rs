//! The `mathdrill practice` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use mathdrill_core::engine::{NextProblem, SessionEngine};
use mathdrill_core::model::{Operation, SelectionOrder, SessionConfig};
use mathdrill_core::report::SessionReport;
use mathdrill_report::{render_text, write_session_logs};

use super::parse_operation;
use super::show::stats_table;
use crate::config::load_config_from;

/// Command-line options for a practice session.
pub struct PracticeArgs {
    pub operation: Option<String>,
    pub profile: Option<String>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub mastery_time: Option<f64>,
    pub order: Option<String>,
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
    pub no_log: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: PracticeArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let (profile_name, mut profile) = config.profile(args.profile.as_deref())?;

    // Command-line values win over the profile
    if let Some(min) = args.min {
        profile.min_value = min;
    }
    if let Some(max) = args.max {
        profile.max_value = max;
    }
    if let Some(secs) = args.mastery_time {
        profile.mastery_time_secs = secs;
    }
    if let Some(order) = &args.order {
        profile.order = order
            .parse::<SelectionOrder>()
            .map_err(|e| anyhow::anyhow!("invalid order '{order}': {e}"))?;
    }
    let operation = match &args.operation {
        Some(op) => parse_operation(op)?,
        None => profile.operation.unwrap_or(Operation::Addition),
    };
    profile.operation = Some(operation);

    let problems = profile.validate();
    if !problems.is_empty() {
        anyhow::bail!("invalid settings: {}", problems.join("; "));
    }

    let mut session_config = profile.session_config(operation);
    if let Some(seed) = args.seed {
        session_config = session_config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = SessionEngine::new();
    let report = run_session(&mut engine, session_config, stdin.lock(), stdout.lock())?;

    let Some(report) = report else {
        println!("\nGave up. No log written.");
        return Ok(());
    };

    println!("\n{}", render_text(&report));
    println!("{}", stats_table(&report));

    if !args.no_log {
        let dir = args.log_dir.unwrap_or(config.log_dir);
        let files = write_session_logs(&report, &dir, &profile_name)?;
        println!("\nLog written to {}", files.text.display());
        println!("Report written to {}", files.json.display());
    }

    Ok(())
}

/// Drive one interactive session over `input`/`output`.
///
/// Returns the final report, or `None` when the learner gives up with `q`
/// or the input ends first.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut SessionEngine,
    config: SessionConfig,
    mut input: R,
    mut output: W,
) -> Result<Option<SessionReport>> {
    let handle = engine.start_session(config)?;
    writeln!(
        output,
        "Practising {} with {} problems. Answer faster than {:.1} s to master each one; q to quit.\n",
        handle.operation, handle.problem_count, handle.mastery_threshold_secs
    )?;

    loop {
        let spec = match engine.request_next_problem()? {
            NextProblem::Present(spec) => spec,
            NextProblem::Completed(report) => {
                writeln!(output, "All problems mastered!")?;
                return Ok(Some(report));
            }
        };

        let shown_at = Instant::now();
        let answer = loop {
            write!(output, "{}", spec.question())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                engine.abandon();
                return Ok(None);
            }

            let response = line.trim();
            if response.eq_ignore_ascii_case("q") || response.eq_ignore_ascii_case("quit") {
                engine.abandon();
                return Ok(None);
            }
            match response.parse::<i64>() {
                Ok(answer) => break answer,
                Err(_) => writeln!(output, "Invalid response ({response}); try again.")?,
            }
        };
        let elapsed = shown_at.elapsed().as_secs_f64();

        let outcome = engine.submit_answer(&spec, answer, elapsed)?;
        if outcome.correct {
            writeln!(output, "Correct! ({elapsed:.1} s)")?;
        } else {
            writeln!(output, "Incorrect! The answer is {}.", outcome.expected)?;
        }
        let remaining = outcome.progress.remaining();
        if remaining > 0 {
            writeln!(
                output,
                "{remaining} problem{} remaining\n",
                if remaining == 1 { "" } else { "s" }
            )?;
        }
    }
}
