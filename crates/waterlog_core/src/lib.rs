//! Core domain logic for the water intake tracker.
//! This crate is the single source of truth for goal, intake and unit invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, TrackerConfig};
pub use logging::{init_logging, logging_status, parse_log_level, LogLevel, LoggingError};
pub use model::goal::{parse_goal_input, GoalAccepted, GoalValidationError};
pub use model::intake::{IntakeError, LogResult, QuickLogPreset};
pub use model::state::{AchievementPolicy, GoalPhase, TrackerSnapshot, TrackerState};
pub use model::unit::{
    format_quantity, parse_display_unit, to_display, DisplayUnit, UnitParseError,
};
pub use service::notice::Notice;
pub use service::tracker::{IntakeTracker, TrackerEvent, TrackerObserver, TrackerUpdate};
pub use service::view::{render_view, TrackerView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
