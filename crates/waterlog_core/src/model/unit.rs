//! Display units and canonical-to-display conversion.
//!
//! # Responsibility
//! - Define the unit set offered by the unit picker.
//! - Map canonical milliliter quantities to the selected display unit.
//!
//! # Invariants
//! - Stored quantities are always milliliters; conversion is display-only.
//! - `to_display` never rounds. Rounding belongs to `format_quantity`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Milliliters to US fluid ounces.
pub const ML_TO_OUNCES: f64 = 0.033814;
/// Milliliters to US cups.
pub const ML_TO_CUPS: f64 = 0.00422675;

/// Unit used to present goal and intake values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    /// Canonical storage unit.
    #[default]
    Milliliters,
    Ounces,
    Cups,
}

impl DisplayUnit {
    /// Picker order.
    pub const ALL: [DisplayUnit; 3] = [Self::Milliliters, Self::Ounces, Self::Cups];

    /// Stable short id, also used as the unit suffix in rendered text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Milliliters => "ml",
            Self::Ounces => "oz",
            Self::Cups => "cups",
        }
    }

    /// Picker label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Milliliters => "Milliliters (ml)",
            Self::Ounces => "Ounces (oz)",
            Self::Cups => "Cups",
        }
    }

    /// Factor applied to a milliliter quantity.
    pub fn factor(self) -> f64 {
        match self {
            Self::Milliliters => 1.0,
            Self::Ounces => ML_TO_OUNCES,
            Self::Cups => ML_TO_CUPS,
        }
    }
}

impl Display for DisplayUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    Empty,
    Unsupported(String),
}

impl Display for UnitParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "display unit must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "display unit is unsupported: {value}; expected ml|oz|cups")
            }
        }
    }
}

impl Error for UnitParseError {}

/// Parses a unit id (`ml|oz|cups`, case-insensitive).
pub fn parse_display_unit(value: &str) -> Result<DisplayUnit, UnitParseError> {
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(UnitParseError::Empty);
    }

    DisplayUnit::ALL
        .into_iter()
        .find(|unit| unit.as_str() == normalized)
        .ok_or(UnitParseError::Unsupported(normalized))
}

/// Converts a canonical milliliter quantity into `unit`.
pub fn to_display(quantity_ml: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Milliliters => quantity_ml,
        other => quantity_ml * other.factor(),
    }
}

/// Renders `value` with a fixed number of decimals.
pub fn format_quantity(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::{format_quantity, parse_display_unit, to_display, DisplayUnit, UnitParseError};

    #[test]
    fn milliliters_is_identity() {
        for value in [0.0, 1.5, 250.0, 1e9] {
            assert_eq!(to_display(value, DisplayUnit::Milliliters), value);
        }
    }

    #[test]
    fn converts_one_liter() {
        assert!((to_display(1000.0, DisplayUnit::Ounces) - 33.814).abs() < 1e-9);
        assert!((to_display(1000.0, DisplayUnit::Cups) - 4.22675).abs() < 1e-9);
    }

    #[test]
    fn parses_ids_case_insensitively() {
        assert_eq!(parse_display_unit(" OZ ").expect("oz"), DisplayUnit::Ounces);
        assert_eq!(parse_display_unit("cups").expect("cups"), DisplayUnit::Cups);
        assert_eq!(
            parse_display_unit("l").expect_err("liters are not offered"),
            UnitParseError::Unsupported("l".to_string())
        );
        assert_eq!(
            parse_display_unit("  ").expect_err("empty"),
            UnitParseError::Empty
        );
    }

    #[test]
    fn format_quantity_rounds_to_precision() {
        assert_eq!(format_quantity(33.814, 2), "33.81");
        assert_eq!(format_quantity(0.0, 2), "0.00");
        assert_eq!(format_quantity(4.22675, 0), "4");
    }

    #[test]
    fn default_unit_is_milliliters() {
        assert_eq!(DisplayUnit::default(), DisplayUnit::Milliliters);
        assert_eq!(DisplayUnit::Cups.to_string(), "cups");
    }
}
