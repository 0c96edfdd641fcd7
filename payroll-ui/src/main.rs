use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_ui::tui;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive employee salary calculator.
///
/// Renders the salary form in the terminal; validation rules and the
/// payroll breakdown come from payroll-core.
#[derive(Debug, Parser)]
struct Cli {
    /// Write logs to this file. Without it logging is off entirely, since
    /// writing to stdout would tear the form.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep the log file clean.
/// * Writes to the given file, without ANSI colour.
fn init_tracing(path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));
    let file = std::fs::File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
        info!("logging to {}", path.display());
    }

    tui::run()
}
