//! Greedy two-pointer settlement.
//!
//! Given the balances of one session, computes the ordered list of
//! transfers that zeroes them. The algorithm is pure and deterministic:
//! same balances in the same insertion order → same transfers.

use netsettle_types::{BalanceSheet, ParticipantName, TransferInstruction};
use rust_decimal::Decimal;
use tracing::debug;

/// Mutable working copy of one balance. The stored balance is never touched.
#[derive(Debug)]
struct WorkingBalance<'a> {
    name: &'a ParticipantName,
    amount: Decimal,
}

/// Compute the transfers that settle `balances`.
///
/// Algorithm:
/// 1. Copy every balance into a working entry
/// 2. Stable-sort ascending by amount (biggest debtor first, biggest
///    creditor last; ties keep insertion order)
/// 3. `low` points at the first entry, `high` at the last
/// 4. While `low < high`: stop if the debtor is not negative or the
///    creditor is not positive; otherwise the debtor pays
///    `min(-debtor, creditor)`, and each cursor moves past its entry once
///    that entry reaches zero
///
/// Every step zeroes at least one entry, so a zero-sum input of N non-zero
/// balances produces at most N-1 transfers. Input that does not sum to
/// zero is settled as far as possible and the remainder is left alone.
#[must_use]
pub fn settle(balances: &BalanceSheet) -> Vec<TransferInstruction> {
    let mut working: Vec<WorkingBalance<'_>> = balances
        .iter()
        .map(|(name, amount)| WorkingBalance { name, amount })
        .collect();
    working.sort_by(|a, b| a.amount.cmp(&b.amount));

    let mut transfers = Vec::with_capacity(working.len().saturating_sub(1));
    if working.len() < 2 {
        return transfers;
    }

    let mut low = 0;
    let mut high = working.len() - 1;

    while low < high {
        let debt = working[low].amount;
        let credit = working[high].amount;

        // Nothing left to pay, or nobody left to pay.
        if debt >= Decimal::ZERO || credit <= Decimal::ZERO {
            break;
        }

        let payment = (-debt).min(credit);
        if payment > Decimal::ZERO {
            debug!(
                payer = %working[low].name,
                payee = %working[high].name,
                %payment,
                "transfer resolved"
            );
            transfers.push(TransferInstruction::new(
                working[low].name.clone(),
                working[high].name.clone(),
                payment,
            ));
        }

        working[low].amount += payment;
        working[high].amount -= payment;

        if working[low].amount.is_zero() {
            low += 1;
        }
        if working[high].amount.is_zero() {
            high -= 1;
        }
    }

    transfers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn sheet(entries: &[(&str, Decimal)]) -> BalanceSheet {
        entries.iter().map(|(n, a)| (*n, *a)).collect()
    }

    fn triples(transfers: &[TransferInstruction]) -> Vec<(&str, &str, Decimal)> {
        transfers
            .iter()
            .map(|t| (t.payer.as_str(), t.payee.as_str(), t.amount))
            .collect()
    }

    #[test]
    fn four_player_game() {
        let balances = sheet(&[
            ("A", dec(50_000)),
            ("B", dec(-30_000)),
            ("C", dec(20_000)),
            ("D", dec(-40_000)),
        ]);
        let transfers = settle(&balances);
        assert_eq!(
            triples(&transfers),
            vec![
                ("D", "A", dec(40_000)),
                ("B", "A", dec(10_000)),
                ("B", "C", dec(20_000)),
            ]
        );
    }

    #[test]
    fn single_pair() {
        let transfers = settle(&sheet(&[("X", dec(100)), ("Y", dec(-100))]));
        assert_eq!(triples(&transfers), vec![("Y", "X", dec(100))]);
    }

    #[test]
    fn all_zero_is_empty() {
        let transfers = settle(&sheet(&[("A", dec(0)), ("B", dec(0)), ("C", dec(0))]));
        assert!(transfers.is_empty());
    }

    #[test]
    fn empty_and_single_participant() {
        assert!(settle(&BalanceSheet::new()).is_empty());
        assert!(settle(&sheet(&[("Solo", dec(42))])).is_empty());
        assert!(settle(&sheet(&[("Solo", dec(-42))])).is_empty());
    }

    #[test]
    fn one_sided_balances_produce_nothing() {
        assert!(settle(&sheet(&[("A", dec(10)), ("B", dec(5))])).is_empty());
        assert!(settle(&sheet(&[("A", dec(-10)), ("B", dec(-5))])).is_empty());
    }

    #[test]
    fn unbalanced_input_leaves_creditor_residual() {
        let transfers = settle(&sheet(&[("A", dec(10)), ("B", dec(-5))]));
        assert_eq!(triples(&transfers), vec![("B", "A", dec(5))]);
    }

    #[test]
    fn unbalanced_input_leaves_debtor_residual() {
        let transfers = settle(&sheet(&[("A", dec(-10)), ("B", dec(4)), ("C", dec(3))]));
        assert_eq!(
            triples(&transfers),
            vec![("A", "B", dec(4)), ("A", "C", dec(3))]
        );
    }

    #[test]
    fn zero_balances_are_skipped() {
        let transfers = settle(&sheet(&[
            ("Even", dec(0)),
            ("Win", dec(75)),
            ("Lose", dec(-75)),
            ("Also", dec(0)),
        ]));
        assert_eq!(triples(&transfers), vec![("Lose", "Win", dec(75))]);
    }

    #[test]
    fn ties_resolve_in_insertion_order() {
        let transfers = settle(&sheet(&[
            ("P", dec(-10)),
            ("Q", dec(-10)),
            ("R", dec(10)),
            ("S", dec(10)),
        ]));
        // Sorted: P, Q, R, S. P pays S first (largest creditor is last).
        assert_eq!(
            triples(&transfers),
            vec![("P", "S", dec(10)), ("Q", "R", dec(10))]
        );
    }

    #[test]
    fn fractional_amounts_settle_exactly() {
        // 0.1 + 0.2 - 0.3 is exact in decimal arithmetic.
        let transfers = settle(&sheet(&[
            ("A", Decimal::new(1, 1)),
            ("B", Decimal::new(2, 1)),
            ("C", Decimal::new(-3, 1)),
        ]));
        assert_eq!(
            triples(&transfers),
            vec![("C", "B", Decimal::new(2, 1)), ("C", "A", Decimal::new(1, 1))]
        );
    }

    #[test]
    fn stored_balances_are_not_mutated() {
        let balances = sheet(&[("X", dec(100)), ("Y", dec(-100))]);
        let before = balances.clone();
        let _ = settle(&balances);
        assert_eq!(balances, before);
    }
}
