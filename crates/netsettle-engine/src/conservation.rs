//! Conservation replay for computed settlements.
//!
//! Invariant checked after a settlement:
//! ```text
//! ∀ participant: balance + Σ(paid) - Σ(received) == 0
//! ```
//!
//! A debtor's payments must add up to the negation of their balance, and a
//! creditor's receipts must add up to their balance. Anything left over is
//! a residual. Residuals are expected when the input does not sum to zero
//! and indicate a bug otherwise.

use netsettle_types::{
    BalanceSheet, NetsettleError, ParticipantName, Residual, Result, TransferInstruction,
};
use rust_decimal::Decimal;

/// Replays transfers against original balances within a fixed tolerance.
#[derive(Debug, Clone, Copy)]
pub struct ConservationCheck {
    /// Largest absolute residual still treated as zero.
    tolerance: Decimal,
}

impl ConservationCheck {
    #[must_use]
    pub fn new(tolerance: Decimal) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// Apply every transfer to a copy of `balances`: the payer's balance
    /// rises by the amount, the payee's falls by it.
    ///
    /// # Errors
    /// - `UnknownParticipant` if a transfer names someone without a balance
    /// - `AmountOverflow` if a running balance overflows
    pub fn replay(
        &self,
        balances: &BalanceSheet,
        transfers: &[TransferInstruction],
    ) -> Result<BalanceSheet> {
        let mut net = balances.clone();
        for transfer in transfers {
            adjust(&mut net, &transfer.payer, transfer.amount)?;
            adjust(&mut net, &transfer.payee, -transfer.amount)?;
        }
        Ok(net)
    }

    /// Participants whose replayed balance is outside the tolerance,
    /// in insertion order.
    pub fn residuals(
        &self,
        balances: &BalanceSheet,
        transfers: &[TransferInstruction],
    ) -> Result<Vec<Residual>> {
        let net = self.replay(balances, transfers)?;
        Ok(net
            .iter()
            .filter(|(_, amount)| amount.abs() > self.tolerance)
            .map(|(name, amount)| Residual {
                name: name.clone(),
                amount,
            })
            .collect())
    }

    /// Verify that `transfers` settle `balances` completely.
    ///
    /// # Errors
    /// - `NonPositiveTransfer` if any transfer amount is zero or negative
    /// - `UnknownParticipant` if a transfer names someone without a balance
    /// - `ConservationViolation` for the first participant left with a residual
    pub fn verify(&self, balances: &BalanceSheet, transfers: &[TransferInstruction]) -> Result<()> {
        if let Some(bad) = transfers.iter().find(|t| t.amount <= Decimal::ZERO) {
            return Err(NetsettleError::NonPositiveTransfer {
                payer: bad.payer.clone(),
                payee: bad.payee.clone(),
                amount: bad.amount,
            });
        }
        match self.residuals(balances, transfers)?.into_iter().next() {
            Some(residual) => Err(NetsettleError::ConservationViolation {
                name: residual.name,
                residual: residual.amount,
            }),
            None => Ok(()),
        }
    }
}

impl Default for ConservationCheck {
    fn default() -> Self {
        Self::new(netsettle_types::constants::REPLAY_TOLERANCE)
    }
}

fn adjust(net: &mut BalanceSheet, name: &ParticipantName, delta: Decimal) -> Result<()> {
    let current = net
        .get(name.as_str())
        .ok_or_else(|| NetsettleError::UnknownParticipant(name.clone()))?;
    let updated = current
        .checked_add(delta)
        .ok_or_else(|| NetsettleError::AmountOverflow {
            context: format!("replaying transfers for {name}"),
        })?;
    net.insert(name.clone(), updated);
    Ok(())
}
