//! Tracker configuration.
//!
//! # Responsibility
//! - Carry the knobs a host can choose when mounting a tracker.
//! - Read overrides from `WATERLOG_*` environment variables.
//!
//! # Invariants
//! - A config that passed `validate()` never produces invalid render output.

use crate::model::state::AchievementPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Env var selecting `require_goal|legacy` achievement behavior.
pub const ENV_ACHIEVEMENT_POLICY: &str = "WATERLOG_ACHIEVEMENT_POLICY";
/// Env var overriding the number of decimals for rendered totals.
pub const ENV_DISPLAY_PRECISION: &str = "WATERLOG_DISPLAY_PRECISION";

pub const DEFAULT_DISPLAY_PRECISION: usize = 2;
pub const MAX_DISPLAY_PRECISION: usize = 6;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedPolicy(String),
    InvalidPrecision(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPolicy(value) => write!(
                f,
                "unsupported achievement policy `{value}`; expected require_goal|legacy"
            ),
            Self::InvalidPrecision(value) => write!(
                f,
                "display precision must be an integer in 0..={MAX_DISPLAY_PRECISION}, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Host-selected tracker settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub achievement_policy: AchievementPolicy,
    /// Decimals used for the rendered total line.
    pub display_precision: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            achievement_policy: AchievementPolicy::default(),
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl TrackerConfig {
    /// Builds a config from defaults plus process environment overrides.
    ///
    /// # Errors
    /// Returns an error when an override is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults plus overrides served by `lookup`.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Errors
    /// Returns an error when an override is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value_of = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        if let Some(raw) = value_of(ENV_ACHIEVEMENT_POLICY) {
            config.achievement_policy = parse_achievement_policy(&raw)?;
        }
        if let Some(raw) = value_of(ENV_DISPLAY_PRECISION) {
            config.display_precision = raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidPrecision(raw.clone()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` when `display_precision` is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::InvalidPrecision(
                self.display_precision.to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses `require_goal|legacy` (case-insensitive).
pub fn parse_achievement_policy(value: &str) -> Result<AchievementPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "require_goal" => Ok(AchievementPolicy::RequireGoal),
        "legacy" => Ok(AchievementPolicy::Legacy),
        other => Err(ConfigError::UnsupportedPolicy(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_achievement_policy, ConfigError, TrackerConfig, ENV_ACHIEVEMENT_POLICY,
        ENV_DISPLAY_PRECISION,
    };
    use crate::model::state::AchievementPolicy;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_require_goal_and_two_decimals() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.achievement_policy, AchievementPolicy::RequireGoal);
        assert_eq!(config.display_precision, 2);
    }

    #[test]
    fn reads_overrides() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (ENV_ACHIEVEMENT_POLICY, " Legacy "),
            (ENV_DISPLAY_PRECISION, "3"),
        ]))
        .expect("overrides");
        assert_eq!(config.achievement_policy, AchievementPolicy::Legacy);
        assert_eq!(config.display_precision, 3);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = TrackerConfig::from_lookup(lookup_from(&[(ENV_DISPLAY_PRECISION, "  ")]))
            .expect("blank is absent");
        assert_eq!(config.display_precision, 2);
    }

    #[test]
    fn rejects_malformed_overrides() {
        let err = TrackerConfig::from_lookup(lookup_from(&[(ENV_DISPLAY_PRECISION, "two")]))
            .expect_err("non-integer precision");
        assert_eq!(err, ConfigError::InvalidPrecision("two".to_string()));

        let err = TrackerConfig::from_lookup(lookup_from(&[(ENV_DISPLAY_PRECISION, "9")]))
            .expect_err("out of range precision");
        assert!(matches!(err, ConfigError::InvalidPrecision(_)));

        let err = parse_achievement_policy("strict").expect_err("unknown policy");
        assert_eq!(err, ConfigError::UnsupportedPolicy("strict".to_string()));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"achievement_policy":"legacy"}"#).expect("partial json");
        assert_eq!(config.achievement_policy, AchievementPolicy::Legacy);
        assert_eq!(config.display_precision, 2);
    }
}
