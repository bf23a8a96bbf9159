//! The Settlement Engine.
//!
//! One engine holds the balances of one settlement session:
//! 1. Collect balances with [`SettlementEngine::add_balance`]
//! 2. Compute transfers with [`SettlementEngine::compute_settlement`]
//! 3. Sanity-check the input with [`SettlementEngine::validate_settlement`]
//!
//! None of these fail. Computing is a pure function of the current
//! balances and can be repeated freely.

use chrono::Utc;
use netsettle_types::{
    BalanceSheet, BalanceStatus, NetsettleError, ParticipantName, Result, SettlementConfig,
    SettlementId, SettlementReport, SettlementSummary, TransferInstruction,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::conservation::ConservationCheck;
use crate::determinism::settlement_digest_hex;
use crate::greedy;

/// Owns the balances of a single settlement session.
#[derive(Debug, Clone, Default)]
pub struct SettlementEngine {
    balances: BalanceSheet,
    config: SettlementConfig,
}

impl SettlementEngine {
    /// Create an engine with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SettlementConfig) -> Self {
        Self {
            balances: BalanceSheet::new(),
            config,
        }
    }

    /// Insert or overwrite the balance for `name`. Any amount is accepted.
    pub fn add_balance(&mut self, name: impl Into<ParticipantName>, amount: Decimal) {
        let name = name.into();
        if let Some(previous) = self.balances.insert(name.clone(), amount) {
            debug!(%name, %previous, %amount, "balance overwritten");
        } else {
            debug!(%name, %amount, "balance added");
        }
    }

    /// Compute the ordered transfers that settle the current balances.
    ///
    /// Stored balances are left unchanged; calling this twice gives the
    /// same result.
    #[must_use]
    pub fn compute_settlement(&self) -> Vec<TransferInstruction> {
        greedy::settle(&self.balances)
    }

    /// Whether the stored balances sum to zero within the validation
    /// tolerance. An exact zero total always passes.
    ///
    /// Checks the input only. Use [`ConservationCheck`] to verify that a
    /// transfer list actually zeroes every participant.
    #[must_use]
    pub fn validate_settlement(&self) -> bool {
        match self.balances.total() {
            Some(total) if total.is_zero() || total.abs() < self.config.validation_tolerance => {
                true
            }
            Some(total) => {
                warn!(%total, tolerance = %self.config.validation_tolerance, "balances do not sum to zero");
                false
            }
            None => {
                warn!("balance total overflowed");
                false
            }
        }
    }

    /// Run the settlement and assemble the full report.
    ///
    /// # Errors
    /// Returns `AmountOverflow` if replaying or summing the transfers
    /// overflows.
    pub fn report(&self) -> Result<SettlementReport> {
        let transfers = self.compute_settlement();
        let balanced = self.validate_settlement();
        let residuals = ConservationCheck::new(self.config.replay_tolerance)
            .residuals(&self.balances, &transfers)?;

        let mut debtors = 0;
        let mut creditors = 0;
        for (_, amount) in self.balances.iter() {
            match BalanceStatus::of(amount) {
                BalanceStatus::Debtor => debtors += 1,
                BalanceStatus::Creditor => creditors += 1,
                BalanceStatus::Settled => {}
            }
        }

        let total_volume = transfers
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
            .ok_or_else(|| NetsettleError::AmountOverflow {
                context: "summing transfer volume".to_string(),
            })?;

        let summary = SettlementSummary {
            participants: self.balances.len(),
            debtors,
            creditors,
            transfer_count: transfers.len(),
            total_volume,
            residuals,
        };

        let report = SettlementReport {
            id: SettlementId::new(),
            computed_at: Utc::now(),
            balances: self.balances.clone(),
            digest: settlement_digest_hex(&transfers),
            transfers,
            balanced,
            summary,
        };

        info!(
            id = %report.id,
            participants = report.summary.participants,
            transfers = report.summary.transfer_count,
            volume = %report.summary.total_volume,
            balanced = report.balanced,
            "settlement computed"
        );
        if !report.summary.fully_settled() {
            warn!(
                residuals = report.summary.residuals.len(),
                "settlement leaves unsettled balances"
            );
        }

        Ok(report)
    }

    /// The stored (original) balances.
    #[must_use]
    pub fn balances(&self) -> &BalanceSheet {
        &self.balances
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.balances.len()
    }

    #[must_use]
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }
}
