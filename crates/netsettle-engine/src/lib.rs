//! # netsettle-engine
//!
//! **Settlement Engine**: turns a set of signed net balances into an ordered
//! list of peer-to-peer transfers that brings every balance to zero.
//!
//! ## Architecture
//!
//! - [`greedy`]: pure two-pointer algorithm. Largest debtor pays largest
//!   creditor until one side runs out. Same input, same output.
//! - [`SettlementEngine`]: owns the balances of one session and exposes
//!   `add_balance`, `compute_settlement`, `validate_settlement`.
//! - [`conservation`]: replays transfers against the original balances and
//!   reports anything left over.
//! - [`determinism`]: SHA-256 digest of the ordered transfer list.
//!
//! The greedy strategy yields at most N-1 transfers for N non-zero
//! balances. It is a heuristic and not a minimum-transaction solver.

pub mod conservation;
pub mod determinism;
pub mod engine;
pub mod greedy;

pub use conservation::ConservationCheck;
pub use determinism::{settlement_digest, settlement_digest_hex, verify_digest};
pub use engine::SettlementEngine;
pub use greedy::settle;
