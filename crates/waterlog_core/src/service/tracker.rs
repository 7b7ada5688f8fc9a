//! Intake tracker use-case service.
//!
//! # Responsibility
//! - Own one `TrackerState` for the lifetime of a screen.
//! - Accept presentation events and turn transition results into notices.
//! - Publish every applied event to subscribed observers, synchronously.
//!
//! # Invariants
//! - No global state: each screen mounts its own tracker.
//! - Observers run before the triggering call returns.
//! - Raw goal text is never written to logs.

use crate::config::{TrackerConfig, MAX_DISPLAY_PRECISION};
use crate::model::goal::{GoalAccepted, GoalValidationError};
use crate::model::intake::{IntakeError, LogResult, QuickLogPreset};
use crate::model::state::{TrackerSnapshot, TrackerState};
use crate::model::unit::DisplayUnit;
use crate::service::notice::Notice;
use crate::service::view::{render_view, TrackerView};
use log::{debug, info, warn};

/// Inbound presentation events.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// Goal text field edited.
    GoalInputChanged(String),
    /// "Set Goal" pressed.
    SubmitGoal,
    /// Quick-log button pressed, amount in milliliters.
    QuickLog(f64),
    /// Unit picker changed.
    UnitChanged(DisplayUnit),
    /// Screen remounted; all state dropped.
    Reset,
}

/// Payload delivered to observers after one applied event.
#[derive(Debug)]
pub struct TrackerUpdate<'a> {
    pub event: &'a TrackerEvent,
    pub notice: Option<&'a Notice>,
    pub snapshot: &'a TrackerSnapshot,
}

/// Subscription hook for presentation layers that re-render on change.
pub trait TrackerObserver: Send {
    fn on_update(&mut self, update: &TrackerUpdate<'_>);
}

/// Screen-scoped tracker component.
pub struct IntakeTracker {
    state: TrackerState,
    config: TrackerConfig,
    observers: Vec<Box<dyn TrackerObserver>>,
}

impl Default for IntakeTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl IntakeTracker {
    /// Mounts a tracker with `config`.
    ///
    /// A display precision outside the validated range is clamped to the maximum.
    pub fn new(config: TrackerConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(
                    "event=tracker_mount module=tracker status=error clamp=precision error={err}"
                );
                TrackerConfig {
                    display_precision: MAX_DISPLAY_PRECISION,
                    ..config
                }
            }
        };
        debug!(
            "event=tracker_mount module=tracker status=ok policy={:?} precision={}",
            config.achievement_policy, config.display_precision
        );
        Self {
            state: TrackerState::with_policy(config.achievement_policy),
            config,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        self.state.snapshot()
    }

    /// Render model for the current state.
    pub fn view(&self) -> TrackerView {
        render_view(&self.state.snapshot(), self.config.display_precision)
    }

    /// Registers an observer for all subsequent events.
    pub fn subscribe(&mut self, observer: Box<dyn TrackerObserver>) {
        self.observers.push(observer);
    }

    /// Applies one presentation event.
    ///
    /// Returns the notice the presentation layer should alert, if any.
    ///
    /// # Errors
    /// Returns `InvalidAmount` when a quick-log amount is not a positive
    /// finite milliliter value. State is unchanged in that case.
    pub fn dispatch(&mut self, event: TrackerEvent) -> Result<Option<Notice>, IntakeError> {
        match event {
            TrackerEvent::GoalInputChanged(text) => {
                self.goal_input_changed(text);
                Ok(None)
            }
            TrackerEvent::SubmitGoal => Ok(Some(goal_notice(self.submit_goal()))),
            TrackerEvent::QuickLog(amount_ml) => {
                let result = self.log_intake(amount_ml)?;
                Ok(result.achieved_just_now.then(|| self.achieved_notice()))
            }
            TrackerEvent::UnitChanged(unit) => {
                self.set_unit(unit);
                Ok(None)
            }
            TrackerEvent::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Replaces the goal field text.
    pub fn goal_input_changed(&mut self, text: impl Into<String>) {
        self.state.set_pending_input(text);
        let event = TrackerEvent::GoalInputChanged(self.state.pending_goal_input().to_string());
        self.publish(&event, None);
    }

    /// Submits the goal field text.
    ///
    /// # Errors
    /// Returns the validation error; the field keeps the typed text.
    pub fn submit_goal(&mut self) -> Result<GoalAccepted, GoalValidationError> {
        let result = self.state.submit_goal();
        match &result {
            Ok(accepted) => info!(
                "event=goal_set module=tracker status=ok goal={} unit={}",
                accepted.goal, accepted.unit
            ),
            Err(err) => warn!(
                "event=goal_rejected module=tracker status=error reason={} input_chars={}",
                rejection_reason(err),
                self.state.pending_goal_input().chars().count()
            ),
        }

        let notice = goal_notice(result.clone());
        self.publish(&TrackerEvent::SubmitGoal, Some(&notice));
        result
    }

    /// Types `raw` into the goal field and submits it.
    ///
    /// # Errors
    /// Same as [`IntakeTracker::submit_goal`].
    pub fn set_goal(&mut self, raw: &str) -> Result<GoalAccepted, GoalValidationError> {
        self.goal_input_changed(raw);
        self.submit_goal()
    }

    /// Logs an arbitrary milliliter amount.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for non-positive or non-finite amounts.
    pub fn log_intake(&mut self, amount_ml: f64) -> Result<LogResult, IntakeError> {
        let result = self.state.log_intake(amount_ml).map_err(|err| {
            warn!("event=intake_rejected module=tracker status=error amount_ml={amount_ml}");
            err
        })?;
        self.after_log(amount_ml, result);
        Ok(result)
    }

    /// Logs one of the fixed quick-log amounts.
    pub fn log_preset(&mut self, preset: QuickLogPreset) -> LogResult {
        let result = self.state.log_preset(preset);
        self.after_log(preset.amount_ml(), result);
        result
    }

    /// Selects the display unit.
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.state.set_unit(unit);
        debug!("event=unit_changed module=tracker status=ok unit={unit}");
        self.publish(&TrackerEvent::UnitChanged(unit), None);
    }

    /// Drops all screen state, as on remount.
    ///
    /// Observers stay subscribed and receive a `Reset` update with the
    /// mount-time snapshot.
    pub fn reset(&mut self) {
        self.state.reset();
        info!("event=tracker_reset module=tracker status=ok");
        self.publish(&TrackerEvent::Reset, None);
    }

    fn after_log(&mut self, amount_ml: f64, result: LogResult) {
        info!(
            "event=intake_logged module=tracker status=ok amount_ml={} total_ml={}",
            amount_ml, result.total
        );

        let notice = if result.achieved_just_now {
            info!(
                "event=goal_achieved module=tracker status=ok goal={} total_ml={}",
                self.state.daily_goal(),
                result.total
            );
            Some(self.achieved_notice())
        } else {
            None
        };
        self.publish(&TrackerEvent::QuickLog(amount_ml), notice.as_ref());
    }

    fn achieved_notice(&self) -> Notice {
        Notice::GoalAchieved {
            goal: self.state.daily_goal(),
            unit: self.state.display_unit(),
        }
    }

    fn publish(&mut self, event: &TrackerEvent, notice: Option<&Notice>) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.state.snapshot();
        let update = TrackerUpdate {
            event,
            notice,
            snapshot: &snapshot,
        };
        for observer in &mut self.observers {
            observer.on_update(&update);
        }
    }
}

fn goal_notice(result: Result<GoalAccepted, GoalValidationError>) -> Notice {
    match result {
        Ok(accepted) => Notice::GoalConfirmed(accepted),
        Err(err) => Notice::InvalidGoal(err),
    }
}

fn rejection_reason(err: &GoalValidationError) -> &'static str {
    match err {
        GoalValidationError::NotANumber { .. } => "not_a_number",
        GoalValidationError::NonPositive { .. } => "non_positive",
    }
}
