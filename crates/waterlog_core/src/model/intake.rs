//! Quick-log presets and log results.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed quick-log amounts offered as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickLogPreset {
    Glass,
    Bottle,
    Liter,
}

impl QuickLogPreset {
    /// Button order.
    pub const ALL: [QuickLogPreset; 3] = [Self::Glass, Self::Bottle, Self::Liter];

    /// Amount in milliliters.
    pub fn amount_ml(self) -> f64 {
        match self {
            Self::Glass => 250.0,
            Self::Bottle => 500.0,
            Self::Liter => 1000.0,
        }
    }

    /// Button label. Always milliliter based, independent of display unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::Glass => "Log 250 ml",
            Self::Bottle => "Log 500 ml",
            Self::Liter => "Log 1 Liter",
        }
    }

    /// Stable id accepted by text drivers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Bottle => "bottle",
            Self::Liter => "liter",
        }
    }

    /// Looks up a preset by id.
    pub fn from_id(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
    }
}

/// Outcome of one quick-log transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogResult {
    /// `true` only for the log that flipped the achieved latch.
    pub achieved_just_now: bool,
    /// Running total in milliliters after the log.
    pub total: f64,
}

/// Rejected log amounts from untyped callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntakeError {
    InvalidAmount(f64),
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(value) => {
                write!(f, "log amount must be a positive finite ml value, got {value}")
            }
        }
    }
}

impl Error for IntakeError {}

/// Checks the quick-log precondition (`amount_ml > 0`, finite).
pub fn validate_log_amount(amount_ml: f64) -> Result<f64, IntakeError> {
    if amount_ml.is_finite() && amount_ml > 0.0 {
        Ok(amount_ml)
    } else {
        Err(IntakeError::InvalidAmount(amount_ml))
    }
}
