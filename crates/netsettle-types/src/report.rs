//! Settlement report: the full record of one settlement run.
//!
//! The engine assembles a [`SettlementReport`] from the balances and the
//! transfers it computed. The CLI renders it as text or JSON.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BalanceSheet, ParticipantName, SettlementId, TransferInstruction};

/// A participant still carrying a balance after all transfers are applied.
///
/// Only happens when the input balances do not sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residual {
    pub name: ParticipantName,
    pub amount: Decimal,
}

/// Aggregate figures for a settlement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// Number of participants with a stored balance.
    pub participants: usize,
    /// Participants with a negative balance.
    pub debtors: usize,
    /// Participants with a positive balance.
    pub creditors: usize,
    /// Number of transfer instructions produced.
    pub transfer_count: usize,
    /// Sum of all transfer amounts.
    pub total_volume: Decimal,
    /// Non-zero balances left after replaying the transfers.
    pub residuals: Vec<Residual>,
}

impl SettlementSummary {
    /// Whether every participant ends at zero.
    #[must_use]
    pub fn fully_settled(&self) -> bool {
        self.residuals.is_empty()
    }
}

/// The complete output of one settlement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Unique run identifier.
    pub id: SettlementId,
    /// When the transfers were computed.
    pub computed_at: DateTime<Utc>,
    /// The original balances, in insertion order.
    pub balances: BalanceSheet,
    /// Transfers in the order they were resolved.
    pub transfers: Vec<TransferInstruction>,
    /// Result of the input conservation check.
    pub balanced: bool,
    /// Hex SHA-256 digest of the ordered transfer list.
    pub digest: String,
    pub summary: SettlementSummary,
}
