use proptest::prelude::*;
use waterlog_core::{to_display, DisplayUnit, IntakeTracker, QuickLogPreset};

#[test]
fn one_liter_converts_to_reference_values() {
    assert!((to_display(1000.0, DisplayUnit::Ounces) - 33.814).abs() < 1e-9);
    assert!((to_display(1000.0, DisplayUnit::Cups) - 4.22675).abs() < 1e-9);
    assert_eq!(to_display(1000.0, DisplayUnit::Milliliters), 1000.0);
}

#[test]
fn switching_units_only_changes_rendering() {
    let mut tracker = IntakeTracker::default();
    tracker.set_goal("2000").unwrap();
    tracker.log_preset(QuickLogPreset::Liter);

    for unit in DisplayUnit::ALL {
        tracker.set_unit(unit);
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.total_intake, 1000.0);
        assert_eq!(snapshot.daily_goal, 2000.0);
        assert_eq!(snapshot.display_unit, unit);
    }

    tracker.set_unit(DisplayUnit::Cups);
    assert_eq!(tracker.view().total_line, "Total Water Intake: 4.23 cups");
}

proptest! {
    #[test]
    fn milliliters_is_identity(value in proptest::num::f64::ANY) {
        let converted = to_display(value, DisplayUnit::Milliliters);
        prop_assert!(converted == value || (converted.is_nan() && value.is_nan()));
    }

    #[test]
    fn conversion_is_linear(value in 0.0f64..1.0e6) {
        for unit in [DisplayUnit::Ounces, DisplayUnit::Cups] {
            let expected = value * unit.factor();
            prop_assert!((to_display(value, unit) - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
