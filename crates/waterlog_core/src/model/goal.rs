//! Daily goal input validation.
//!
//! # Responsibility
//! - Turn free-text goal input into a canonical milliliter goal.
//! - Classify rejected input for the invalid-goal notice.
//!
//! # Invariants
//! - An accepted goal is finite and strictly positive.
//! - Only the leading decimal prefix of the input is considered, so
//!   `"2000ml"` is accepted as `2000`.

use crate::model::unit::DisplayUnit;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Goal input rejection reasons.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalValidationError {
    /// No finite decimal number at the start of the input.
    NotANumber { input: String },
    /// Parsed value is zero or negative.
    NonPositive { value: f64 },
}

impl GoalValidationError {
    /// Alert title shown by the presentation layer.
    pub fn notice_title(&self) -> &'static str {
        "Invalid Input"
    }

    /// Alert body shown by the presentation layer.
    pub fn notice_message(&self) -> &'static str {
        "Please enter a valid goal."
    }
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { input } => write!(f, "goal input is not a number: `{input}`"),
            Self::NonPositive { value } => write!(f, "goal must be > 0, got {value}"),
        }
    }
}

impl Error for GoalValidationError {}

/// Confirmation payload returned by a successful goal submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAccepted {
    /// New daily goal as entered.
    pub goal: f64,
    /// Display unit active when the goal was accepted.
    pub unit: DisplayUnit,
}

/// Parses raw goal text.
///
/// # Errors
/// - `NotANumber` when no finite decimal prefix exists.
/// - `NonPositive` when the parsed value is `<= 0`.
pub fn parse_goal_input(raw: &str) -> Result<f64, GoalValidationError> {
    let not_a_number = || GoalValidationError::NotANumber {
        input: raw.to_string(),
    };

    let prefix = leading_decimal(raw.trim_start()).ok_or_else(not_a_number)?;
    let value = prefix.parse::<f64>().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    if value <= 0.0 {
        return Err(GoalValidationError::NonPositive { value });
    }
    Ok(value)
}

/// Returns the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix.
fn leading_decimal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text.get(..end)
}

#[cfg(test)]
mod tests {
    use super::{leading_decimal, parse_goal_input, GoalValidationError};

    #[test]
    fn leading_decimal_finds_numeric_prefix() {
        assert_eq!(leading_decimal("2000"), Some("2000"));
        assert_eq!(leading_decimal("2000ml"), Some("2000"));
        assert_eq!(leading_decimal("-5"), Some("-5"));
        assert_eq!(leading_decimal(".5l"), Some(".5"));
        assert_eq!(leading_decimal("5."), Some("5."));
        assert_eq!(leading_decimal("1e3x"), Some("1e3"));
        assert_eq!(leading_decimal("1e"), Some("1"));
        assert_eq!(leading_decimal("2e+2"), Some("2e+2"));
        assert_eq!(leading_decimal("abc"), None);
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("-"), None);
        assert_eq!(leading_decimal(""), None);
    }

    #[test]
    fn accepts_positive_decimals() {
        assert_eq!(parse_goal_input("2000").expect("integer"), 2000.0);
        assert_eq!(parse_goal_input("  1.5").expect("leading ws"), 1.5);
        assert_eq!(parse_goal_input("750 ml").expect("unit suffix"), 750.0);
        assert_eq!(parse_goal_input("+3e2").expect("exponent"), 300.0);
    }

    #[test]
    fn rejects_non_numbers() {
        for raw in ["", "   ", "abc", "ml2000", "Infinity", "NaN", "1e999"] {
            let err = parse_goal_input(raw).expect_err("must be rejected");
            assert_eq!(
                err,
                GoalValidationError::NotANumber {
                    input: raw.to_string()
                },
                "input `{raw}`"
            );
        }
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            parse_goal_input("-5").expect_err("negative"),
            GoalValidationError::NonPositive { value: -5.0 }
        );
        assert!(matches!(
            parse_goal_input("0").expect_err("zero"),
            GoalValidationError::NonPositive { .. }
        ));
        assert!(matches!(
            parse_goal_input("-0.0").expect_err("negative zero"),
            GoalValidationError::NonPositive { .. }
        ));
    }

    #[test]
    fn notice_text_is_shared_by_all_kinds() {
        let nan = GoalValidationError::NotANumber {
            input: "x".to_string(),
        };
        let neg = GoalValidationError::NonPositive { value: -1.0 };
        assert_eq!(nan.notice_title(), neg.notice_title());
        assert_eq!(neg.notice_message(), "Please enter a valid goal.");
    }
}
