//! mathdrill CLI: timed arithmetic fact practice in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Arithmetic fact practice until mastery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practise a set of problems until every one is mastered
    Practice {
        /// Operation: add, sub, mul, div (default: profile's, else add)
        #[arg(long)]
        operation: Option<String>,

        /// Profile name from the config file
        #[arg(long)]
        profile: Option<String>,

        /// Smallest operand (overrides the profile)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Largest operand (overrides the profile)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Mastery time in seconds (overrides the profile)
        #[arg(long)]
        mastery_time: Option<f64>,

        /// Problem order: random, shuffled, sequential
        #[arg(long)]
        order: Option<String>,

        /// Seed for reproducible problem order
        #[arg(long)]
        seed: Option<u64>,

        /// Directory for session logs (overrides the config)
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Do not write session logs
        #[arg(long)]
        no_log: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the problems a session would contain
    Problems {
        /// Operation: add, sub, mul, div
        #[arg(long)]
        operation: String,

        /// Smallest operand
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: i64,

        /// Largest operand
        #[arg(long, default_value = "12", allow_negative_numbers = true)]
        max: i64,
    },

    /// Display a saved session report
    Show {
        /// Report JSON written by `practice`
        #[arg(long)]
        report: PathBuf,

        /// Output format: text, table, html, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate profiles in the config file
    Validate {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathdrill=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            operation,
            profile,
            min,
            max,
            mastery_time,
            order,
            seed,
            log_dir,
            no_log,
            config,
        } => commands::practice::execute(commands::practice::PracticeArgs {
            operation,
            profile,
            min,
            max,
            mastery_time,
            order,
            seed,
            log_dir,
            no_log,
            config,
        }),
        Commands::Problems {
            operation,
            min,
            max,
        } => commands::problems::execute(operation, min, max),
        Commands::Show {
            report,
            format,
            output,
        } => commands::show::execute(report, format, output),
        Commands::Validate { config } => commands::validate::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
