//! One settlement session: gather balances, settle, render.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use netsettle_engine::SettlementEngine;
use netsettle_types::{ParticipantName, Result, SettlementConfig, SettlementReport};
use rust_decimal::Decimal;
use tracing::info;

use crate::display::{render_json, render_text};
use crate::input::Prompter;

/// Where the balances come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The built-in sample game.
    Example,
    /// Prompt for every participant.
    Interactive,
}

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Balances of the built-in sample game (sums to zero).
#[must_use]
pub fn sample_balances() -> Vec<(ParticipantName, Decimal)> {
    vec![
        ("A".into(), Decimal::new(50_000, 0)),
        ("B".into(), Decimal::new(-30_000, 0)),
        ("C".into(), Decimal::new(20_000, 0)),
        ("D".into(), Decimal::new(-40_000, 0)),
    ]
}

/// Run a full session.
///
/// Prompts (interactive mode only) go to `prompt`; the rendered report goes
/// to `output`.
pub fn run<R: BufRead, P: Write, W: Write>(
    mode: Mode,
    format: OutputFormat,
    config: SettlementConfig,
    input: R,
    prompt: P,
    output: &mut W,
) -> Result<SettlementReport> {
    let balances = match mode {
        Mode::Example => sample_balances(),
        Mode::Interactive => Prompter::new(input, prompt, &config.display).collect_balances()?,
    };
    info!(?mode, participants = balances.len(), "balances collected");

    let mut engine = SettlementEngine::with_config(config);
    for (name, amount) in balances {
        engine.add_balance(name, amount);
    }

    let report = engine.report()?;
    match format {
        OutputFormat::Text => render_text(&report, &engine.config().display, output)?,
        OutputFormat::Json => render_json(&report, output)?,
    }
    Ok(report)
}
