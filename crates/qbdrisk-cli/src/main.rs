use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use qbdrisk_core::{ManualScores, ScoringMode, Sod};
use qbdrisk_store::DEFAULT_SESSION_FILE;

mod display;

#[derive(Parser, Debug)]
#[command(
    name = "qbdrisk",
    version,
    about = "CPP–CQA FMEA risk assessment for pharmaceutical manufacturing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the processes in the catalog
    Processes,

    /// Build and display the risk table for a process
    Evaluate(EvaluateArgs),

    /// Display a previously saved session
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Process name, exactly as listed by `qbdrisk processes`
    #[arg(long)]
    process: String,

    /// Manual scores file (JSON array of CPP/CQA/Severity/Occurrence/Detectability
    /// objects, one per pair). Switches scoring to manual mode.
    #[arg(long)]
    manual: Option<PathBuf>,

    /// Save the table to a session file after rendering
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_SESSION_FILE)]
    save: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Session file path
    #[arg(default_value = DEFAULT_SESSION_FILE)]
    path: PathBuf,
}

/// One row of a manual scores file. Same field naming as the session format.
#[derive(Debug, Deserialize)]
struct ManualEntry {
    #[serde(rename = "CPP")]
    cpp: String,
    #[serde(rename = "CQA")]
    cqa: String,
    #[serde(flatten)]
    sod: Sod,
}

fn read_manual_scores(path: &Path) -> anyhow::Result<ManualScores> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading manual scores from {}", path.display()))?;
    let entries: Vec<ManualEntry> = serde_json::from_str(&content)
        .with_context(|| format!("parsing manual scores in {}", path.display()))?;

    let mut scores = ManualScores::new();
    for entry in entries {
        scores.insert(entry.cpp, entry.cqa, entry.sod);
    }
    Ok(scores)
}

fn evaluate(args: &EvaluateArgs) -> anyhow::Result<()> {
    let manual = args
        .manual
        .as_deref()
        .map(read_manual_scores)
        .transpose()?;
    let mode = if manual.is_some() {
        ScoringMode::Manual
    } else {
        ScoringMode::RuleBased
    };

    let table = qbdrisk_core::evaluate(&args.process, mode, manual.as_ref())?;
    display::print_table(&args.process, &table);

    if let Some(path) = &args.save {
        qbdrisk_store::save(path, &table)?;
        println!("saved to {}", path.display());
    }
    Ok(())
}

fn show(args: &ShowArgs) -> anyhow::Result<()> {
    let table = qbdrisk_store::load(&args.path)?;
    display::print_table(&args.path.display().to_string(), &table);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::debug!("qbdrisk v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match &cli.command {
        Commands::Processes => {
            for name in qbdrisk_core::process_names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Evaluate(args) => evaluate(args),
        Commands::Show(args) => show(args),
    }
}
