use std::sync::Arc;

use chrono::NaiveDate;
use mass_attendance_backend::{
    AttendanceSelector, Backend, FixedClock, HostRouter, ScheduleSource, TapOutcome,
};
use shared::{AttendanceNotice, AttendanceState, CellStyle, ScheduledEvent};

#[derive(Default)]
struct StackRouter {
    screens: Vec<&'static str>,
}

impl HostRouter for StackRouter {
    fn go_back(&mut self) {
        self.screens.pop();
    }
}

fn date(key: &str) -> NaiveDate {
    shared::parse_iso_date(key).unwrap()
}

fn pastor_x_schedule() -> ScheduleSource {
    ScheduleSource::new(vec![
        ScheduledEvent::new(date("2025-06-02"), "Morning Mass", "09:00 am - 10:00 am")
            .with_speaker("Pastor X"),
    ])
    .unwrap()
}

#[test]
fn test_morning_mass_scenario() {
    let today = date("2025-06-15");
    let mut selector = AttendanceSelector::new(pastor_x_schedule(), today);

    assert_eq!(selector.tap_key("2025-06-02"), TapOutcome::Selected);
    assert_eq!(selector.state(), AttendanceState::Viewing(date("2025-06-02")));

    assert_eq!(selector.tap_key("2025-06-03"), TapOutcome::NoSchedule);
    assert_eq!(selector.state(), AttendanceState::Viewing(date("2025-06-02")));
    assert_eq!(
        selector.drain_notices(),
        vec![AttendanceNotice::NoScheduleForDate { date: date("2025-06-03") }]
    );

    assert!(selector.attend());
    assert_eq!(selector.state(), AttendanceState::Confirming(date("2025-06-02")));

    assert!(selector.confirm_ok());
    assert_eq!(selector.state(), AttendanceState::Confirmed(date("2025-06-02")));
    assert_eq!(selector.selected_date(), None);
}

#[test]
fn test_every_unscheduled_day_in_month_emits_exactly_one_notice() {
    let today = date("2025-06-15");
    let mut selector = AttendanceSelector::new(pastor_x_schedule(), today);
    let month = selector.calendar(today);

    for day in month.days().filter(|d| !d.is_scheduled) {
        assert_eq!(selector.tap(day.date), TapOutcome::NoSchedule);
        assert_eq!(selector.state(), AttendanceState::Idle);
        assert_eq!(selector.drain_notices().len(), 1);
    }
}

#[test]
fn test_tapped_cell_is_selected_and_still_scheduled() {
    let today = date("2025-06-15");
    let mut selector = AttendanceSelector::new(pastor_x_schedule(), today);

    let before = selector.view(today);
    assert_eq!(before.cell_for(date("2025-06-02")).unwrap().style, CellStyle::Scheduled);

    selector.tap(date("2025-06-02"));
    let after = selector.view(today);
    assert!(after.month.day(date("2025-06-02")).unwrap().is_scheduled);
    assert_eq!(after.cell_for(date("2025-06-02")).unwrap().style, CellStyle::Selected);
}

#[test]
fn test_backend_builds_selector_and_back_pops_screen() {
    let today = date("2025-06-15");
    let backend = Backend::with_parts(Arc::new(pastor_x_schedule()), Arc::new(FixedClock(today)));
    let mut router = StackRouter { screens: vec!["dashboard", "mass-attendance"] };

    let mut selector = backend.attendance_selector();
    selector.tap(date("2025-06-02"));
    selector.attend();
    assert!(!selector.go_back(&mut router));
    assert_eq!(router.screens, vec!["dashboard", "mass-attendance"]);

    selector.confirm_ok();
    assert!(selector.go_back(&mut router));
    assert_eq!(router.screens, vec!["dashboard"]);
}
