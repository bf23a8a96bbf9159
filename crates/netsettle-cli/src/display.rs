//! Rendering of settlement reports.

use std::io::Write;

use netsettle_types::{BalanceStatus, DisplayConfig, Result, SettlementReport, numbered};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with grouping, fixed decimals, and the currency prefix.
///
/// `-1234567.891` renders as `-1,234,567.89` with the default config.
#[must_use]
pub fn format_amount(amount: Decimal, display: &DisplayConfig) -> String {
    let places = display.decimal_places;
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.*}", places as usize, rounded.abs());

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(display.thousands_separator);
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&display.currency_prefix);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Human-readable report: balances, numbered transfers, validation result.
pub fn render_text<W: Write>(
    report: &SettlementReport,
    display: &DisplayConfig,
    out: &mut W,
) -> Result<()> {
    let name_width = report
        .balances
        .iter()
        .map(|(name, _)| name.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let amounts: Vec<String> = report
        .balances
        .iter()
        .map(|(_, amount)| format_amount(amount, display))
        .collect();
    let amount_width = amounts
        .iter()
        .map(|shown| shown.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "Balances:")?;
    for ((name, amount), shown) in report.balances.iter().zip(&amounts) {
        let status = BalanceStatus::of(amount);
        writeln!(
            out,
            "  {:<name_width$}  {shown:>amount_width$}  {status}",
            name.as_str()
        )?;
    }
    writeln!(out)?;

    if report.transfers.is_empty() {
        writeln!(out, "No transfers needed.")?;
    } else {
        writeln!(out, "Transfers ({}):", report.transfers.len())?;
        for entry in numbered(&report.transfers) {
            writeln!(
                out,
                "  {}. {} -> {}: {}",
                entry.number,
                entry.transfer.payer,
                entry.transfer.payee,
                format_amount(entry.transfer.amount, display)
            )?;
        }
    }
    writeln!(out)?;

    if report.balanced {
        writeln!(out, "Validation: PASSED, balances sum to zero.")?;
    } else {
        let total = report
            .balances
            .total()
            .map_or_else(|| "overflow".to_string(), |t| format_amount(t, display));
        writeln!(out, "Validation: FAILED, balances sum to {total}.")?;
    }

    if !report.summary.fully_settled() {
        writeln!(out, "Left unsettled:")?;
        for residual in &report.summary.residuals {
            writeln!(
                out,
                "  {}: {}",
                residual.name,
                format_amount(residual.amount, display)
            )?;
        }
    }
    Ok(())
}

/// Pretty-printed JSON report.
pub fn render_json<W: Write>(report: &SettlementReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
