use radiotherm_lan::{Clock, FanMode, HvacMode, HvacRunState, ProgramSchedule, ThermostatTarget};

#[test]
fn run_state_codes() {
    assert_eq!(HvacRunState::from_code(0), Some(HvacRunState::Off));
    assert_eq!(HvacRunState::from_code(1), Some(HvacRunState::Heat));
    assert_eq!(HvacRunState::from_code(2), Some(HvacRunState::Cool));
    assert_eq!(HvacRunState::from_code(3), None);
}

#[test]
fn run_state_labels() {
    assert_eq!(HvacRunState::Heat.label(), "Heat");
    assert_eq!(HvacRunState::Off.label(), "Off");
}

#[test]
fn hvac_mode_codes_and_labels() {
    for (code, label) in [(0, "Off"), (1, "Heat"), (2, "Cool"), (3, "Auto")] {
        let mode = HvacMode::from_code(code).unwrap();
        assert_eq!(mode.label(), label);
    }
    assert_eq!(HvacMode::from_code(4), None);
}

#[test]
fn fan_mode_labels() {
    assert_eq!(FanMode::Auto.label(), "auto");
    assert_eq!(FanMode::On.label(), "on");
}

#[test]
fn clock_day_names_start_monday() {
    let monday = Clock { day: 0, hour: 0, minute: 0 };
    assert_eq!(monday.day_name(), Some("Monday"));
    let sunday = Clock { day: 6, hour: 23, minute: 59 };
    assert_eq!(sunday.day_name(), Some("Sunday"));
    let bogus = Clock { day: 7, hour: 0, minute: 0 };
    assert_eq!(bogus.day_name(), None);
}

#[test]
fn clock_accepts_minutes_alias() {
    let clock: Clock =
        serde_json::from_str(r#"{"day": 2, "hour": 9, "minutes": 41}"#).unwrap();
    assert_eq!(clock.minute, 41);
}

#[test]
fn schedule_day_out_of_range_is_none() {
    let schedule = ProgramSchedule::default();
    assert!(schedule.day(6).is_some());
    assert!(schedule.day(7).is_none());
}

#[test]
fn no_target_sentinel() {
    assert_eq!(ThermostatTarget::NO_TARGET, -1.0);
}
