//! Screen-scoped tracker state and its transitions.
//!
//! # Responsibility
//! - Hold goal, intake, unit and flag state for one screen lifetime.
//! - Apply goal, log and unit transitions synchronously and atomically.
//!
//! # Invariants
//! - `daily_goal` and `total_intake` are milliliters; unit changes never rescale them.
//! - `total_intake >= 0` and only grows between goal resets.
//! - A successful goal submission zeroes intake and clears the achieved latch.
//! - `goal_achieved` is a latch: once set it stays set until the next accepted goal.
//! - A rejected goal submission only touches `pending_goal_input`.

use crate::model::goal::{parse_goal_input, GoalAccepted, GoalValidationError};
use crate::model::intake::{validate_log_amount, IntakeError, LogResult, QuickLogPreset};
use crate::model::unit::DisplayUnit;
use serde::{Deserialize, Serialize};

/// Decides whether logging may latch achievement before any goal exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementPolicy {
    /// Achievement requires an accepted goal.
    #[default]
    RequireGoal,
    /// Any log may latch achievement, including against the initial zero goal.
    Legacy,
}

/// Per-goal-period phase derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPhase {
    NoGoal,
    GoalSet,
    GoalAchieved,
}

/// Renderable copy of the tracker state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Goal as entered; `0` until a goal is accepted.
    pub daily_goal: f64,
    /// Canonical milliliter total.
    pub total_intake: f64,
    pub display_unit: DisplayUnit,
    /// Gates unit picker visibility.
    pub goal_set: bool,
    pub goal_achieved: bool,
    /// Unvalidated goal field text.
    pub pending_goal_input: String,
}

/// Mutable state owned by one tracker screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    daily_goal: f64,
    total_intake: f64,
    display_unit: DisplayUnit,
    goal_set: bool,
    goal_achieved: bool,
    pending_goal_input: String,
    policy: AchievementPolicy,
}

impl TrackerState {
    /// Creates mount-time state with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates mount-time state with an explicit achievement policy.
    pub fn with_policy(policy: AchievementPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn daily_goal(&self) -> f64 {
        self.daily_goal
    }

    pub fn total_intake(&self) -> f64 {
        self.total_intake
    }

    pub fn display_unit(&self) -> DisplayUnit {
        self.display_unit
    }

    pub fn goal_set(&self) -> bool {
        self.goal_set
    }

    pub fn goal_achieved(&self) -> bool {
        self.goal_achieved
    }

    pub fn pending_goal_input(&self) -> &str {
        &self.pending_goal_input
    }

    pub fn policy(&self) -> AchievementPolicy {
        self.policy
    }

    /// Returns the current goal-period phase.
    pub fn phase(&self) -> GoalPhase {
        if self.goal_achieved {
            GoalPhase::GoalAchieved
        } else if self.goal_set {
            GoalPhase::GoalSet
        } else {
            GoalPhase::NoGoal
        }
    }

    /// Replaces the unvalidated goal field text.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_goal_input = text.into();
    }

    /// Submits the current goal field text.
    ///
    /// # Errors
    /// Same as [`TrackerState::set_goal`].
    pub fn submit_goal(&mut self) -> Result<GoalAccepted, GoalValidationError> {
        let raw = self.pending_goal_input.clone();
        self.set_goal(&raw)
    }

    /// Validates `raw` and starts a new goal period.
    ///
    /// On success the goal is stored, intake resets to zero, the field is
    /// cleared and the achieved latch is released. On failure only the goal
    /// field is touched: it keeps `raw` so the user can correct it.
    ///
    /// # Errors
    /// - `NotANumber` when `raw` has no finite decimal prefix.
    /// - `NonPositive` when the parsed value is `<= 0`.
    pub fn set_goal(&mut self, raw: &str) -> Result<GoalAccepted, GoalValidationError> {
        let goal = match parse_goal_input(raw) {
            Ok(goal) => goal,
            Err(err) => {
                self.pending_goal_input = raw.to_string();
                return Err(err);
            }
        };

        self.daily_goal = goal;
        self.total_intake = 0.0;
        self.pending_goal_input.clear();
        self.goal_set = true;
        self.goal_achieved = false;

        Ok(GoalAccepted {
            goal,
            unit: self.display_unit,
        })
    }

    /// Adds a preset amount to the running total.
    pub fn log_preset(&mut self, preset: QuickLogPreset) -> LogResult {
        self.accumulate(preset.amount_ml())
    }

    /// Adds `amount_ml` to the running total.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for non-positive or non-finite amounts; state is
    /// left untouched.
    pub fn log_intake(&mut self, amount_ml: f64) -> Result<LogResult, IntakeError> {
        let amount_ml = validate_log_amount(amount_ml)?;
        Ok(self.accumulate(amount_ml))
    }

    /// Selects the display unit. Stored quantities are not rescaled.
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.display_unit = unit;
    }

    /// Restores mount-time state, keeping the policy.
    pub fn reset(&mut self) {
        *self = Self::with_policy(self.policy);
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            daily_goal: self.daily_goal,
            total_intake: self.total_intake,
            display_unit: self.display_unit,
            goal_set: self.goal_set,
            goal_achieved: self.goal_achieved,
            pending_goal_input: self.pending_goal_input.clone(),
        }
    }

    fn accumulate(&mut self, amount_ml: f64) -> LogResult {
        self.total_intake += amount_ml;

        let eligible = match self.policy {
            AchievementPolicy::RequireGoal => self.goal_set,
            AchievementPolicy::Legacy => true,
        };
        let achieved_just_now =
            eligible && !self.goal_achieved && self.total_intake >= self.daily_goal;
        if achieved_just_now {
            self.goal_achieved = true;
        }

        LogResult {
            achieved_just_now,
            total: self.total_intake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AchievementPolicy, GoalPhase, TrackerState};
    use crate::model::goal::GoalValidationError;
    use crate::model::intake::{IntakeError, QuickLogPreset};
    use crate::model::unit::DisplayUnit;

    #[test]
    fn new_state_has_mount_defaults() {
        let state = TrackerState::new();
        assert_eq!(state.daily_goal(), 0.0);
        assert_eq!(state.total_intake(), 0.0);
        assert_eq!(state.display_unit(), DisplayUnit::Milliliters);
        assert!(!state.goal_set());
        assert!(!state.goal_achieved());
        assert_eq!(state.pending_goal_input(), "");
        assert_eq!(state.phase(), GoalPhase::NoGoal);
    }

    #[test]
    fn submit_goal_uses_pending_input_and_clears_it() {
        let mut state = TrackerState::new();
        state.set_pending_input("1500");
        let accepted = state.submit_goal().expect("valid goal");
        assert_eq!(accepted.goal, 1500.0);
        assert_eq!(state.pending_goal_input(), "");
        assert_eq!(state.phase(), GoalPhase::GoalSet);
    }

    #[test]
    fn rejected_goal_keeps_typed_text() {
        let mut state = TrackerState::new();
        state.set_pending_input("abc");
        let err = state.submit_goal().expect_err("not a number");
        assert!(matches!(err, GoalValidationError::NotANumber { .. }));
        assert_eq!(state.pending_goal_input(), "abc");
        assert!(!state.goal_set());
    }

    #[test]
    fn goal_accepted_reports_active_unit() {
        let mut state = TrackerState::new();
        state.set_unit(DisplayUnit::Cups);
        let accepted = state.set_goal("8").expect("valid goal");
        assert_eq!(accepted.unit, DisplayUnit::Cups);
        assert_eq!(state.daily_goal(), 8.0);
    }

    #[test]
    fn require_goal_policy_blocks_trivial_achievement() {
        let mut state = TrackerState::new();
        let result = state.log_preset(QuickLogPreset::Glass);
        assert!(!result.achieved_just_now);
        assert_eq!(result.total, 250.0);
        assert_eq!(state.phase(), GoalPhase::NoGoal);
    }

    #[test]
    fn legacy_policy_latches_against_zero_goal() {
        let mut state = TrackerState::with_policy(AchievementPolicy::Legacy);
        let result = state.log_preset(QuickLogPreset::Glass);
        assert!(result.achieved_just_now);
        assert!(state.goal_achieved());
        assert!(!state.goal_set());
    }

    #[test]
    fn invalid_log_amount_leaves_state_untouched() {
        let mut state = TrackerState::new();
        state.set_goal("1000").expect("valid goal");
        let before = state.clone();
        assert_eq!(
            state.log_intake(-250.0),
            Err(IntakeError::InvalidAmount(-250.0))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn unit_change_does_not_rescale() {
        let mut state = TrackerState::new();
        state.set_goal("2000").expect("valid goal");
        state.log_preset(QuickLogPreset::Bottle);
        state.set_unit(DisplayUnit::Ounces);
        assert_eq!(state.daily_goal(), 2000.0);
        assert_eq!(state.total_intake(), 500.0);
    }

    #[test]
    fn reset_keeps_policy() {
        let mut state = TrackerState::with_policy(AchievementPolicy::Legacy);
        state.set_goal("500").expect("valid goal");
        state.log_preset(QuickLogPreset::Liter);
        state.reset();
        assert_eq!(state, TrackerState::with_policy(AchievementPolicy::Legacy));
    }
}
