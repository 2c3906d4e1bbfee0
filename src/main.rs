use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod error;
mod identity;
mod import;
mod leaderboard;
mod ledger;
mod models;
mod notify;
mod report;
mod roster;
mod session;
mod stats;
mod tracker;
mod validation;

use session::Session;
use tracker::Tracker;

#[derive(Parser)]
#[command(name = "learning-progress-tracker")]
#[command(about = "Tracks student enrollment, course points, and completions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command session
    Run {
        /// Enroll students from a CSV file before the session starts
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Replay a command script and write a progress report
    Report {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        seed: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut tracker = Tracker::new();

    match cli.command.unwrap_or(Commands::Run { seed: None }) {
        Commands::Run { seed } => {
            seed_roster(&mut tracker, seed.as_deref())?;
            let stdin = io::stdin();
            Session::new(&mut tracker, stdin.lock(), io::stdout().lock()).run()?;
        }
        Commands::Report {
            script,
            seed,
            out,
            format,
        } => {
            seed_roster(&mut tracker, seed.as_deref())?;
            let file = std::fs::File::open(&script)
                .with_context(|| format!("failed to open script {}", script.display()))?;
            Session::new(&mut tracker, BufReader::new(file), io::sink()).run()?;

            let report = report::collect(&tracker, chrono::Utc::now());
            let rendered = match format {
                ReportFormat::Markdown => report::build_report(&report),
                ReportFormat::Json => report::build_json(&report)?,
            };
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn seed_roster(tracker: &mut Tracker, seed: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = seed {
        let inserted = import::import_csv(tracker, path)?;
        eprintln!("Enrolled {inserted} students from {}.", path.display());
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
