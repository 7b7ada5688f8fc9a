//! Render model derived from a tracker snapshot.
//!
//! # Responsibility
//! - Produce every string and visibility flag the screen needs.
//! - Keep layout and styling out of core.
//!
//! # Invariants
//! - The total line is converted into the display unit and rounded.
//! - The goal line prints the goal as entered, suffixed with the current unit.
//! - The unit picker is visible only after a goal was accepted.

use crate::model::intake::QuickLogPreset;
use crate::model::state::TrackerSnapshot;
use crate::model::unit::{format_quantity, to_display, DisplayUnit};
use serde::{Deserialize, Serialize};

pub const SCREEN_TITLE: &str = "Water Reminder App";
pub const GOAL_PROMPT: &str = "Set Your Daily Water Intake Goal:";
pub const GOAL_PLACEHOLDER: &str = "Enter goal:";
pub const SET_GOAL_LABEL: &str = "Set Goal";
pub const UNIT_PICKER_PROMPT: &str = "Select Unit of Measurement:";
pub const ACHIEVED_BANNER: &str = "Congratulations!, You Successfully Drink Your Water Goal!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOption {
    pub unit: DisplayUnit,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPicker {
    pub prompt: String,
    pub options: Vec<UnitOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLogButton {
    pub preset: QuickLogPreset,
    pub label: String,
    pub amount_ml: f64,
}

/// Everything the screen renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerView {
    pub title: String,
    pub goal_prompt: String,
    pub goal_placeholder: String,
    pub goal_input: String,
    pub set_goal_label: String,
    /// `None` until a goal is accepted.
    pub unit_picker: Option<UnitPicker>,
    /// Present while the achieved latch is set.
    pub achieved_banner: Option<String>,
    pub quick_log_buttons: Vec<QuickLogButton>,
    pub total_line: String,
    pub goal_line: String,
}

/// Builds the render model for `snapshot`.
pub fn render_view(snapshot: &TrackerSnapshot, precision: usize) -> TrackerView {
    let unit = snapshot.display_unit;
    let unit_picker = snapshot.goal_set.then(|| UnitPicker {
        prompt: UNIT_PICKER_PROMPT.to_string(),
        options: DisplayUnit::ALL
            .into_iter()
            .map(|option| UnitOption {
                unit: option,
                label: option.label().to_string(),
                selected: option == unit,
            })
            .collect(),
    });

    TrackerView {
        title: SCREEN_TITLE.to_string(),
        goal_prompt: GOAL_PROMPT.to_string(),
        goal_placeholder: GOAL_PLACEHOLDER.to_string(),
        goal_input: snapshot.pending_goal_input.clone(),
        set_goal_label: SET_GOAL_LABEL.to_string(),
        unit_picker,
        achieved_banner: snapshot
            .goal_achieved
            .then(|| ACHIEVED_BANNER.to_string()),
        quick_log_buttons: QuickLogPreset::ALL
            .into_iter()
            .map(|preset| QuickLogButton {
                preset,
                label: preset.label().to_string(),
                amount_ml: preset.amount_ml(),
            })
            .collect(),
        total_line: format!(
            "Total Water Intake: {} {unit}",
            format_quantity(to_display(snapshot.total_intake, unit), precision)
        ),
        goal_line: format!("Daily Goal: {} {unit}", snapshot.daily_goal),
    }
}
