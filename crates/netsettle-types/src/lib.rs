//! # netsettle-types
//!
//! Shared types, errors, and configuration for the **NetSettle** engine.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`ParticipantName`], [`SettlementId`]
//! - **Balance model**: [`BalanceEntry`], [`BalanceStatus`], [`BalanceSheet`]
//! - **Transfer model**: [`TransferInstruction`], [`NumberedTransfer`]
//! - **Report model**: [`SettlementReport`], [`SettlementSummary`], [`Residual`]
//! - **Configuration**: [`SettlementConfig`], [`DisplayConfig`]
//! - **Errors**: [`NetsettleError`] with `NS_ERR_` prefix codes
//! - **Constants**: tolerances and display defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod report;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use netsettle_types::{BalanceSheet, TransferInstruction, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use report::*;
pub use transfer::*;

// Constants are accessed via `netsettle_types::constants::FOO`
// (not re-exported to avoid name collisions).
