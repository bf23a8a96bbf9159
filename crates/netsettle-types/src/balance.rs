//! Balance types for a settlement session.
//!
//! A balance is a participant's net signed position: positive means the
//! others owe them (creditor), negative means they owe the others (debtor).

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantName;

/// Which side of the settlement a participant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Net winner, receives money.
    Creditor,
    /// Net loser, pays money.
    Debtor,
    /// Nothing to pay or receive.
    Settled,
}

impl BalanceStatus {
    /// Classify a signed amount.
    #[must_use]
    pub fn of(amount: Decimal) -> Self {
        if amount.is_zero() {
            Self::Settled
        } else if amount.is_sign_negative() {
            Self::Debtor
        } else {
            Self::Creditor
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creditor => write!(f, "receives"),
            Self::Debtor => write!(f, "pays"),
            Self::Settled => write!(f, "settled"),
        }
    }
}

/// A single participant's net balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceEntry {
    pub name: ParticipantName,
    pub amount: Decimal,
}

impl BalanceEntry {
    #[must_use]
    pub fn new(name: impl Into<ParticipantName>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.amount)
    }

    #[must_use]
    pub fn is_debtor(&self) -> bool {
        self.status() == BalanceStatus::Debtor
    }

    #[must_use]
    pub fn is_creditor(&self) -> bool {
        self.status() == BalanceStatus::Creditor
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Insertion-ordered collection of balances keyed by participant name.
///
/// Inserting an existing name overwrites its amount (last write wins) and
/// keeps the position of the first insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BalanceSheet {
    entries: IndexMap<ParticipantName, Decimal>,
}

impl BalanceSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a balance. Returns the previous amount, if any.
    pub fn insert(&mut self, name: impl Into<ParticipantName>, amount: Decimal) -> Option<Decimal> {
        self.entries.insert(name.into(), amount)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantName, Decimal)> {
        self.entries.iter().map(|(name, amount)| (name, *amount))
    }

    /// Materialize owned entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<BalanceEntry> {
        self.iter()
            .map(|(name, amount)| BalanceEntry::new(name.clone(), amount))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of participants whose balance is not zero.
    #[must_use]
    pub fn non_zero_count(&self) -> usize {
        self.entries.values().filter(|amount| !amount.is_zero()).count()
    }

    /// Sum of all balances, or `None` if the sum overflows.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        self.entries
            .values()
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
    }
}

impl<N: Into<ParticipantName>> FromIterator<(N, Decimal)> for BalanceSheet {
    fn from_iter<I: IntoIterator<Item = (N, Decimal)>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for (name, amount) in iter {
            sheet.insert(name, amount);
        }
        sheet
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl BalanceSheet {
    /// Random sheet of `participants` balances that sums to exactly zero.
    ///
    /// Amounts have two decimal places. Names are `P0`, `P1`, ...
    #[must_use]
    pub fn random_zero_sum<R: rand::Rng>(rng: &mut R, participants: usize) -> Self {
        let mut sheet = Self::new();
        let mut total = Decimal::ZERO;
        for i in 0..participants.saturating_sub(1) {
            let amount = Decimal::new(rng.gen_range(-10_000_000..=10_000_000), 2);
            total += amount;
            sheet.insert(format!("P{i}"), amount);
        }
        if participants > 0 {
            sheet.insert(format!("P{}", participants - 1), -total);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(BalanceStatus::of(Decimal::new(5, 0)), BalanceStatus::Creditor);
        assert_eq!(BalanceStatus::of(Decimal::new(-5, 0)), BalanceStatus::Debtor);
        assert_eq!(BalanceStatus::of(Decimal::ZERO), BalanceStatus::Settled);
        // -0.00 is still settled
        assert_eq!(BalanceStatus::of(-Decimal::new(0, 2)), BalanceStatus::Settled);
    }

    #[test]
    fn entry_predicates() {
        let debtor = BalanceEntry::new("B", Decimal::new(-30_000, 0));
        assert!(debtor.is_debtor());
        assert!(!debtor.is_creditor());
        assert!(!debtor.is_settled());

        let even = BalanceEntry::new("E", Decimal::ZERO);
        assert!(even.is_settled());
        assert_eq!(even.status(), BalanceStatus::Settled);
    }

    #[test]
    fn insert_is_last_write_wins() {
        let mut sheet = BalanceSheet::new();
        assert_eq!(sheet.insert("A", Decimal::new(10, 0)), None);
        sheet.insert("B", Decimal::new(-10, 0));
        let previous = sheet.insert("A", Decimal::new(99, 0));

        assert_eq!(previous, Some(Decimal::new(10, 0)));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("A"), Some(Decimal::new(99, 0)));
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let mut sheet = BalanceSheet::new();
        sheet.insert("A", Decimal::ONE);
        sheet.insert("B", Decimal::ONE);
        sheet.insert("A", Decimal::TWO);

        let names: Vec<&str> = sheet.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn total_and_non_zero_count() {
        let sheet: BalanceSheet = [
            ("A", Decimal::new(50_000, 0)),
            ("B", Decimal::new(-30_000, 0)),
            ("C", Decimal::ZERO),
        ]
        .into_iter()
        .collect();
        assert_eq!(sheet.total(), Some(Decimal::new(20_000, 0)));
        assert_eq!(sheet.non_zero_count(), 2);
    }

    #[test]
    fn total_overflow_is_none() {
        let sheet: BalanceSheet = [("A", Decimal::MAX), ("B", Decimal::MAX)].into_iter().collect();
        assert_eq!(sheet.total(), None);
    }

    #[test]
    fn random_zero_sum_balances() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0, 1, 2, 9, 40] {
            let sheet = BalanceSheet::random_zero_sum(&mut rng, n);
            assert_eq!(sheet.len(), n);
            assert_eq!(sheet.total(), Some(Decimal::ZERO));
        }
    }

    #[test]
    fn sheet_serializes_in_insertion_order() {
        let sheet: BalanceSheet = [("Zed", Decimal::new(125, 1)), ("Amy", Decimal::new(-125, 1))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"Zed":"12.5","Amy":"-12.5"}"#);
        let back: BalanceSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
