//! System-wide constants for the NetSettle engine.

use rust_decimal::Decimal;

/// Absolute tolerance for the input conservation check (0.01).
///
/// `validate_settlement` passes iff `|Σ balances| < VALIDATION_TOLERANCE`.
pub const VALIDATION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Absolute tolerance when replaying transfers against original balances (1e-9).
pub const REPLAY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Default thousands separator for display and amount input.
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Default number of decimal places shown for amounts.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Upper bound on participants accepted by the interactive prompt.
pub const MAX_PARTICIPANTS: usize = 1_000;

/// Domain separator for the settlement digest.
pub const DIGEST_DOMAIN: &[u8] = b"netsettle:transfers:v1:";
