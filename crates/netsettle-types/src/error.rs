//! Error types for the NetSettle engine.
//!
//! All errors use the `NS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input errors (amounts, participant counts, names)
//! - 2xx: Settlement errors
//! - 9xx: General errors
//!
//! Adding, computing and validating balances never fail. These errors come
//! from the surrounding layers: input parsing, transfer replay, and config.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ParticipantName;

/// Central error enum for all NetSettle operations.
#[derive(Debug, Error)]
pub enum NetsettleError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// An amount could not be parsed as a decimal number.
    #[error("NS_ERR_100: Invalid amount: {input:?}")]
    InvalidAmount { input: String },

    /// The participant count is not a positive integer within limits.
    #[error("NS_ERR_101: Invalid participant count: {input:?} (expected 1..={max})")]
    InvalidParticipantCount { input: String, max: usize },

    /// A participant name was empty.
    #[error("NS_ERR_102: Participant name must not be empty")]
    EmptyParticipantName,

    /// Input ended before all data was collected.
    #[error("NS_ERR_103: Input ended unexpectedly while reading {expected}")]
    UnexpectedEof { expected: String },

    // =================================================================
    // Settlement Errors (2xx)
    // =================================================================
    /// Replaying the transfers left a participant with a non-zero balance.
    #[error("NS_ERR_200: Conservation violation for {name}: residual {residual}")]
    ConservationViolation {
        name: ParticipantName,
        residual: Decimal,
    },

    /// A transfer names a participant that has no balance.
    #[error("NS_ERR_201: Transfer references unknown participant {0}")]
    UnknownParticipant(ParticipantName),

    /// A transfer carries a zero or negative amount.
    #[error("NS_ERR_202: Non-positive transfer amount {amount} from {payer} to {payee}")]
    NonPositiveTransfer {
        payer: ParticipantName,
        payee: ParticipantName,
        amount: Decimal,
    },

    /// Arithmetic overflow while summing balances.
    #[error("NS_ERR_203: Amount overflow while {context}")]
    AmountOverflow { context: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("NS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, bad values, etc.).
    #[error("NS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (terminal, config file).
    #[error("NS_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, NetsettleError>;

// Conversion from std::io::Error
impl From<std::io::Error> for NetsettleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NetsettleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
