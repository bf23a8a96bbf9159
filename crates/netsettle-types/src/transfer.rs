//! Transfer instructions produced by the settlement engine.
//!
//! A [`TransferInstruction`] is one directed payment. The engine emits them
//! as an ordered list; the order is the order in which debts were resolved
//! and is part of the observable output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantName;

/// Money flowing from `payer` to `payee`. `amount` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    /// The debtor making the payment.
    pub payer: ParticipantName,
    /// The creditor receiving the payment.
    pub payee: ParticipantName,
    /// Amount paid.
    pub amount: Decimal,
}

impl TransferInstruction {
    #[must_use]
    pub fn new(
        payer: impl Into<ParticipantName>,
        payee: impl Into<ParticipantName>,
        amount: Decimal,
    ) -> Self {
        Self {
            payer: payer.into(),
            payee: payee.into(),
            amount,
        }
    }
}

impl std::fmt::Display for TransferInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.payer, self.payee, self.amount)
    }
}

/// A transfer paired with its 1-based position in the settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedTransfer<'a> {
    pub number: usize,
    pub transfer: &'a TransferInstruction,
}

/// Number transfers `1..=N` in output order.
pub fn numbered(transfers: &[TransferInstruction]) -> impl Iterator<Item = NumberedTransfer<'_>> {
    transfers
        .iter()
        .enumerate()
        .map(|(idx, transfer)| NumberedTransfer {
            number: idx + 1,
            transfer,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_direction() {
        let t = TransferInstruction::new("Y", "X", Decimal::new(100, 0));
        assert_eq!(t.to_string(), "Y -> X: 100");
    }

    #[test]
    fn numbering_starts_at_one() {
        let transfers = vec![
            TransferInstruction::new("D", "A", Decimal::new(40_000, 0)),
            TransferInstruction::new("B", "A", Decimal::new(10_000, 0)),
        ];
        let numbers: Vec<usize> = numbered(&transfers).map(|n| n.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(numbered(&[]).count(), 0);
    }

    #[test]
    fn transfer_serde_roundtrip() {
        let t = TransferInstruction::new("B", "C", Decimal::new(2_000_050, 2));
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains(r#""payer":"B""#));
        let back: TransferInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
