//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one tracker session per mounted screen to Dart via FRB.
//! - Flatten core results into plain envelopes the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutating call returns the post-event snapshot.
//! - Sessions share nothing; dropping the Dart handle discards all state.

use flutter_rust_bridge::frb;
use log::warn;
use std::sync::{Mutex, MutexGuard, PoisonError};
use waterlog_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_display_unit,
    ping as ping_inner, to_display, IntakeTracker, Notice, TrackerConfig, TrackerEvent,
    TrackerSnapshot, TrackerView,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Alert payload for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeItem {
    /// `invalid_goal|goal_confirmed|goal_achieved`.
    pub kind: String,
    pub title: String,
    pub message: String,
}

/// Renderable state copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Goal as entered; `0` until a goal is accepted.
    pub daily_goal: f64,
    /// Canonical milliliter total.
    pub total_intake_ml: f64,
    /// Total converted into `display_unit`, unrounded.
    pub display_total: f64,
    /// `ml|oz|cups`.
    pub display_unit: String,
    pub goal_set: bool,
    pub goal_achieved: bool,
    pub pending_goal_input: String,
}

/// Envelope returned by every session event call.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResponse {
    /// `false` only when the event itself was malformed.
    pub ok: bool,
    /// Empty on success, diagnostic text otherwise.
    pub message: String,
    pub notice: Option<NoticeItem>,
    pub snapshot: SessionSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOptionItem {
    pub unit: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickLogItem {
    pub label: String,
    pub amount_ml: f64,
}

/// Screen render model.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub title: String,
    pub goal_prompt: String,
    pub goal_placeholder: String,
    pub goal_input: String,
    pub set_goal_label: String,
    /// Empty prompt and options while the picker is hidden.
    pub show_unit_picker: bool,
    pub unit_picker_prompt: String,
    pub unit_options: Vec<UnitOptionItem>,
    pub achieved_banner: Option<String>,
    pub quick_logs: Vec<QuickLogItem>,
    pub total_line: String,
    pub goal_line: String,
}

/// One tracker per mounted screen.
#[frb(opaque)]
pub struct TrackerSession {
    tracker: Mutex<IntakeTracker>,
}

impl TrackerSession {
    /// Mounts a session configured from `WATERLOG_*` env vars.
    ///
    /// Malformed env overrides fall back to defaults.
    #[frb(sync)]
    pub fn new() -> TrackerSession {
        let config = TrackerConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_load module=ffi status=error fallback=default error={err}");
            TrackerConfig::default()
        });
        Self::with_config(config)
    }

    #[frb(ignore)]
    pub fn with_config(config: TrackerConfig) -> TrackerSession {
        TrackerSession {
            tracker: Mutex::new(IntakeTracker::new(config)),
        }
    }

    /// Goal text field edited.
    #[frb(sync)]
    pub fn goal_input_changed(&self, text: String) -> SessionResponse {
        let mut tracker = self.lock();
        tracker.goal_input_changed(text);
        respond(&tracker, None)
    }

    /// "Set Goal" pressed. Always carries a notice.
    #[frb(sync)]
    pub fn submit_goal(&self) -> SessionResponse {
        let mut tracker = self.lock();
        let notice = match tracker.submit_goal() {
            Ok(accepted) => Notice::GoalConfirmed(accepted),
            Err(err) => Notice::InvalidGoal(err),
        };
        respond(&tracker, Some(&notice))
    }

    /// Quick-log button pressed with a milliliter amount.
    #[frb(sync)]
    pub fn quick_log(&self, amount_ml: f64) -> SessionResponse {
        let mut tracker = self.lock();
        match tracker.dispatch(TrackerEvent::QuickLog(amount_ml)) {
            Ok(notice) => respond(&tracker, notice.as_ref()),
            Err(err) => reject(&tracker, format!("quick_log failed: {err}")),
        }
    }

    /// Unit picker changed to `ml|oz|cups`.
    #[frb(sync)]
    pub fn unit_changed(&self, unit: String) -> SessionResponse {
        let mut tracker = self.lock();
        match parse_display_unit(&unit) {
            Ok(unit) => {
                tracker.set_unit(unit);
                respond(&tracker, None)
            }
            Err(err) => reject(&tracker, format!("unit_changed failed: {err}")),
        }
    }

    /// Drops all state, as on remount.
    #[frb(sync)]
    pub fn reset(&self) -> SessionResponse {
        let mut tracker = self.lock();
        tracker.reset();
        respond(&tracker, None)
    }

    #[frb(sync)]
    pub fn snapshot(&self) -> SessionSnapshot {
        to_session_snapshot(&self.lock().snapshot())
    }

    #[frb(sync)]
    pub fn view(&self) -> SessionView {
        to_session_view(self.lock().view())
    }

    fn lock(&self) -> MutexGuard<'_, IntakeTracker> {
        // A poisoned lock still holds consistent state: every transition is a
        // single synchronous assignment sequence.
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn respond(tracker: &IntakeTracker, notice: Option<&Notice>) -> SessionResponse {
    SessionResponse {
        ok: true,
        message: String::new(),
        notice: notice.map(to_notice_item),
        snapshot: to_session_snapshot(&tracker.snapshot()),
    }
}

fn reject(tracker: &IntakeTracker, message: String) -> SessionResponse {
    SessionResponse {
        ok: false,
        message,
        notice: None,
        snapshot: to_session_snapshot(&tracker.snapshot()),
    }
}

fn to_notice_item(notice: &Notice) -> NoticeItem {
    NoticeItem {
        kind: notice.kind().to_string(),
        title: notice.title().to_string(),
        message: notice.message(),
    }
}

fn to_session_snapshot(snapshot: &TrackerSnapshot) -> SessionSnapshot {
    SessionSnapshot {
        daily_goal: snapshot.daily_goal,
        total_intake_ml: snapshot.total_intake,
        display_total: to_display(snapshot.total_intake, snapshot.display_unit),
        display_unit: snapshot.display_unit.as_str().to_string(),
        goal_set: snapshot.goal_set,
        goal_achieved: snapshot.goal_achieved,
        pending_goal_input: snapshot.pending_goal_input.clone(),
    }
}

fn to_session_view(view: TrackerView) -> SessionView {
    let (unit_picker_prompt, unit_options) = match view.unit_picker {
        Some(picker) => (
            picker.prompt,
            picker
                .options
                .into_iter()
                .map(|option| UnitOptionItem {
                    unit: option.unit.as_str().to_string(),
                    label: option.label,
                    selected: option.selected,
                })
                .collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    SessionView {
        title: view.title,
        goal_prompt: view.goal_prompt,
        goal_placeholder: view.goal_placeholder,
        goal_input: view.goal_input,
        set_goal_label: view.set_goal_label,
        show_unit_picker: !unit_options.is_empty(),
        unit_picker_prompt,
        unit_options,
        achieved_banner: view.achieved_banner,
        quick_logs: view
            .quick_log_buttons
            .into_iter()
            .map(|button| QuickLogItem {
                label: button.label,
                amount_ml: button.amount_ml,
            })
            .collect(),
        total_line: view.total_line,
        goal_line: view.goal_line,
    }
}
