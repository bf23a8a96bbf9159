//! Settlement digests.
//!
//! The same balances always settle into the same transfer list. The digest
//! is a SHA-256 hash over that ordered list, so two runs can be compared
//! without comparing full payloads.

use netsettle_types::TransferInstruction;
use netsettle_types::constants::DIGEST_DOMAIN;
use sha2::{Digest, Sha256};

/// Compute the digest of an ordered transfer list.
///
/// Each field is length-prefixed. Amounts are normalized first, so `100`
/// and `100.00` hash the same.
#[must_use]
pub fn settlement_digest(transfers: &[TransferInstruction]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(DIGEST_DOMAIN);
    hasher.update((transfers.len() as u64).to_le_bytes());

    for transfer in transfers {
        update_field(&mut hasher, transfer.payer.as_str().as_bytes());
        update_field(&mut hasher, transfer.payee.as_str().as_bytes());
        update_field(&mut hasher, transfer.amount.normalize().to_string().as_bytes());
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Hex encoding of [`settlement_digest`].
#[must_use]
pub fn settlement_digest_hex(transfers: &[TransferInstruction]) -> String {
    hex::encode(settlement_digest(transfers))
}

/// Recompute the digest and compare it with `expected`.
#[must_use]
pub fn verify_digest(transfers: &[TransferInstruction], expected: &[u8; 32]) -> bool {
    settlement_digest(transfers) == *expected
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn transfer(payer: &str, payee: &str, amount: i64) -> TransferInstruction {
        TransferInstruction::new(payer, payee, Decimal::new(amount, 0))
    }

    #[test]
    fn same_transfers_same_digest() {
        let a = vec![transfer("D", "A", 40_000), transfer("B", "A", 10_000)];
        let b = a.clone();
        assert_eq!(settlement_digest(&a), settlement_digest(&b));
        assert!(verify_digest(&b, &settlement_digest(&a)));
    }

    #[test]
    fn order_matters() {
        let a = vec![transfer("D", "A", 40_000), transfer("B", "A", 10_000)];
        let b = vec![transfer("B", "A", 10_000), transfer("D", "A", 40_000)];
        assert_ne!(settlement_digest(&a), settlement_digest(&b));
    }

    #[test]
    fn names_cannot_bleed_into_each_other() {
        let a = vec![transfer("AB", "C", 1)];
        let b = vec![transfer("A", "BC", 1)];
        assert_ne!(settlement_digest(&a), settlement_digest(&b));
    }

    #[test]
    fn amount_scale_is_ignored() {
        let a = vec![TransferInstruction::new("Y", "X", Decimal::new(100, 0))];
        let b = vec![TransferInstruction::new("Y", "X", Decimal::new(10_000, 2))];
        assert_eq!(settlement_digest(&a), settlement_digest(&b));
    }

    #[test]
    fn empty_digest_is_stable_hex() {
        let hex = settlement_digest_hex(&[]);
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, settlement_digest_hex(&[]));
        assert_ne!(hex, settlement_digest_hex(&[transfer("Y", "X", 1)]));
    }
}
