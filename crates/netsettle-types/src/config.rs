//! Configuration types for settlement runs and result display.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{NetsettleError, Result, constants};

/// Configuration for one settlement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// `validate_settlement` passes iff `|Σ balances|` is strictly below this.
    pub validation_tolerance: Decimal,
    /// Largest residual allowed per participant when replaying transfers.
    pub replay_tolerance: Decimal,
    /// How amounts are read and rendered.
    pub display: DisplayConfig,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            validation_tolerance: constants::VALIDATION_TOLERANCE,
            replay_tolerance: constants::REPLAY_TOLERANCE,
            display: DisplayConfig::default(),
        }
    }
}

impl SettlementConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| NetsettleError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            NetsettleError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Reject values that would make validation or parsing meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.validation_tolerance.is_sign_negative() && !self.validation_tolerance.is_zero() {
            return Err(NetsettleError::Configuration(format!(
                "validation_tolerance must be non-negative, got {}",
                self.validation_tolerance
            )));
        }
        if self.replay_tolerance.is_sign_negative() && !self.replay_tolerance.is_zero() {
            return Err(NetsettleError::Configuration(format!(
                "replay_tolerance must be non-negative, got {}",
                self.replay_tolerance
            )));
        }
        self.display.validate()
    }
}

/// Amount rendering and input conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Grouping character, shown every three integer digits and stripped
    /// from amount input.
    pub thousands_separator: char,
    /// Digits shown after the decimal point.
    pub decimal_places: u32,
    /// Prepended to every rendered amount (e.g. `"$"`).
    pub currency_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: constants::DEFAULT_THOUSANDS_SEPARATOR,
            decimal_places: constants::DEFAULT_DECIMAL_PLACES,
            currency_prefix: String::new(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        let sep = self.thousands_separator;
        if sep.is_ascii_digit() || sep == '-' || sep == '.' {
            return Err(NetsettleError::Configuration(format!(
                "thousands_separator {sep:?} conflicts with number syntax"
            )));
        }
        if self.decimal_places > 28 {
            return Err(NetsettleError::Configuration(format!(
                "decimal_places must be at most 28, got {}",
                self.decimal_places
            )));
        }
        Ok(())
    }
}
