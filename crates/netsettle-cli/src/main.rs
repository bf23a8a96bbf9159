//! # netsettle CLI Entry Point
//!
//! Parses arguments, installs logging, and dispatches to a session.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use netsettle_cli::{Mode, OutputFormat, run};
use netsettle_types::SettlementConfig;
use tracing_subscriber::EnvFilter;

/// Settle net balances with as few peer-to-peer payments as the greedy
/// strategy finds.
#[derive(Parser, Debug)]
#[command(name = "netsettle", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for the settlement report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// JSON config file (tolerances, amount display).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Settle the built-in four-player sample game.
    Example,
    /// Enter participants and amounts at the prompt.
    Interactive,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SettlementConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SettlementConfig::default(),
    };

    let mode = match cli.command {
        Commands::Example => Mode::Example,
        Commands::Interactive => Mode::Interactive,
    };

    // Keep stdout clean for JSON: prompts go to stderr in that case.
    let prompt: Box<dyn Write> = match cli.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };

    let mut stdout = io::stdout();
    run(mode, cli.format, config, io::stdin().lock(), prompt, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
