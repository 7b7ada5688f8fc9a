use waterlog_core::{
    GoalValidationError, IntakeTracker, Notice, TrackerEvent, TrackerState,
};

#[test]
fn scenario_goal_then_two_liters() {
    let mut state = TrackerState::new();
    state.set_goal("2000").unwrap();
    assert_eq!(state.daily_goal(), 2000.0);
    assert_eq!(state.total_intake(), 0.0);

    let first = state.log_intake(1000.0).unwrap();
    assert_eq!(first.total, 1000.0);
    assert!(!first.achieved_just_now);

    let second = state.log_intake(1000.0).unwrap();
    assert_eq!(second.total, 2000.0);
    assert!(second.achieved_just_now);
}

#[test]
fn scenario_negative_goal() {
    let mut state = TrackerState::new();
    let before = state.snapshot();
    let err = state.set_goal("-5").unwrap_err();

    assert!(matches!(err, GoalValidationError::NonPositive { .. }));
    let after = state.snapshot();
    assert_eq!(after.pending_goal_input, "-5");
    assert_eq!(after.daily_goal, before.daily_goal);
    assert_eq!(after.total_intake, before.total_intake);
    assert_eq!(after.goal_set, before.goal_set);
    assert_eq!(after.goal_achieved, before.goal_achieved);
}

#[test]
fn scenario_non_numeric_goal() {
    let mut state = TrackerState::new();
    assert!(matches!(
        state.set_goal("abc").unwrap_err(),
        GoalValidationError::NotANumber { .. }
    ));
}

#[test]
fn scenario_logging_after_achievement() {
    let mut state = TrackerState::new();
    state.set_goal("1000").unwrap();
    assert!(state.log_intake(1000.0).unwrap().achieved_just_now);

    let result = state.log_intake(500.0).unwrap();
    assert!(!result.achieved_just_now);
    assert_eq!(result.total, 1500.0);
    assert!(state.goal_achieved());
}

#[test]
fn scenario_new_goal_clears_achievement() {
    let mut state = TrackerState::new();
    state.set_goal("1500").unwrap();
    assert!(state.log_intake(2000.0).unwrap().achieved_just_now);

    state.set_goal("1000").unwrap();
    assert!(!state.goal_achieved());
    assert_eq!(state.total_intake(), 0.0);
}

#[test]
fn screen_session_event_stream() {
    let mut tracker = IntakeTracker::default();
    let mut notices = Vec::new();

    let events = vec![
        TrackerEvent::GoalInputChanged("2000".to_string()),
        TrackerEvent::SubmitGoal,
        TrackerEvent::UnitChanged(waterlog_core::DisplayUnit::Ounces),
        TrackerEvent::QuickLog(1000.0),
        TrackerEvent::QuickLog(1000.0),
        TrackerEvent::QuickLog(250.0),
    ];
    for event in events {
        if let Some(notice) = tracker.dispatch(event).unwrap() {
            notices.push(notice);
        }
    }

    let messages: Vec<String> = notices.iter().map(Notice::message).collect();
    assert_eq!(
        messages,
        vec![
            "Your daily goal is set to 2000 ml.".to_string(),
            "Congratulations! You've reached your daily goal of 2000 oz.".to_string(),
        ]
    );

    let view = tracker.view();
    assert_eq!(view.total_line, "Total Water Intake: 76.08 oz");
    assert_eq!(view.goal_line, "Daily Goal: 2000 oz");
}
