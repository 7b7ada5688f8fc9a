//! Outbound notices for the presentation layer.
//!
//! Each notice maps to one modal alert (title + message).

use crate::model::goal::{GoalAccepted, GoalValidationError};
use crate::model::unit::DisplayUnit;
use std::fmt::{Display, Formatter};

/// Alert-worthy outcome of one inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Goal submission was rejected; state is unchanged.
    InvalidGoal(GoalValidationError),
    /// A new goal period started.
    GoalConfirmed(GoalAccepted),
    /// The running total reached the goal for the first time this period.
    GoalAchieved { goal: f64, unit: DisplayUnit },
}

impl Notice {
    /// Stable kind id for non-Rust callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidGoal(_) => "invalid_goal",
            Self::GoalConfirmed(_) => "goal_confirmed",
            Self::GoalAchieved { .. } => "goal_achieved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidGoal(err) => err.notice_title(),
            Self::GoalConfirmed(_) => "Goal Set",
            Self::GoalAchieved { .. } => "Goal Achieved",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidGoal(err) => err.notice_message().to_string(),
            Self::GoalConfirmed(accepted) => format!(
                "Your daily goal is set to {} {}.",
                accepted.goal, accepted.unit
            ),
            Self::GoalAchieved { goal, unit } => format!(
                "Congratulations! You've reached your daily goal of {goal} {unit}."
            ),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
