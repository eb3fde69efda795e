//! Attendance selection and confirmation.
//!
//! [`AttendanceSelector`] owns the whole flow for one attendance screen:
//!
//! ```text
//! Idle --tap(d)--> Viewing(d) --attend--> Confirming(d) --confirm_ok--> Confirmed(d)
//!  ^                 |   ^                   |                            |
//!  +-cancel_selection+   +----confirm_cancel-+                            |
//!  +------------------------------cancel_attendance-----------------------+
//! ```
//!
//! Events without a transition from the current state are no-ops. While
//! `Confirming`, the grid, month navigation and Back are locked. Tapping an
//! unscheduled date queues an [`AttendanceNotice`] for the host and changes
//! nothing else.

use std::collections::VecDeque;

use chrono::NaiveDate;
use log::{debug, info};
use shared::{
    parse_iso_date, unscheduled_label, AttendanceNotice, AttendancePanel, AttendanceState,
    AttendanceView, CalendarCell, CalendarFocusDate, CalendarMonth, CellStyle, CellView,
    EventDetails, ScheduledEvent, CONFIRMATION_DIALOG_HEADING, CONFIRMED_BANNER_HEADING,
    SELECTION_PROMPT,
};

use super::calendar::CalendarGrid;
use super::navigation::HostRouter;
use super::schedule_source::ScheduleSource;

/// Result of a tap on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The date is now being viewed
    Selected,
    /// The date was already being viewed
    AlreadySelected,
    /// Nothing scheduled; a notice was queued
    NoSchedule,
    /// Padding cell, locked widget, or a confirmed attendance in place
    Ignored,
}

/// State machine behind the mass attendance screen
#[derive(Debug, Clone)]
pub struct AttendanceSelector {
    schedule: ScheduleSource,
    state: AttendanceState,
    grid: CalendarGrid,
    home: CalendarFocusDate,
    focus: CalendarFocusDate,
    notices: VecDeque<AttendanceNotice>,
}

impl AttendanceSelector {
    /// Selector in `Idle`, focused on the month containing `today`
    pub fn new(schedule: ScheduleSource, today: NaiveDate) -> Self {
        let home = CalendarFocusDate::of(today);
        Self {
            schedule,
            state: AttendanceState::Idle,
            grid: CalendarGrid::new(),
            home,
            focus: home,
            notices: VecDeque::new(),
        }
    }

    pub fn state(&self) -> AttendanceState {
        self.state
    }

    pub fn schedule(&self) -> &ScheduleSource {
        &self.schedule
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date()
    }

    pub fn is_confirming(&self) -> bool {
        self.state.is_confirming()
    }

    pub fn confirmed_attendance(&self) -> Option<NaiveDate> {
        self.state.confirmed_attendance()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Event behind the selected date, if any
    pub fn selected_event(&self) -> Option<&ScheduledEvent> {
        self.selected_date().and_then(|date| self.schedule.lookup(date))
    }

    /// Handle a tap on a calendar date
    pub fn tap(&mut self, date: NaiveDate) -> TapOutcome {
        match self.state {
            AttendanceState::Confirming(_) => {
                debug!("Ignoring tap on {} while confirmation is open", date);
                TapOutcome::Ignored
            }
            AttendanceState::Confirmed(confirmed) => {
                debug!("Ignoring tap on {}: attendance already confirmed for {}", date, confirmed);
                TapOutcome::Ignored
            }
            AttendanceState::Viewing(current) if current == date => TapOutcome::AlreadySelected,
            AttendanceState::Idle | AttendanceState::Viewing(_) => {
                if self.schedule.has(date) {
                    self.transition(AttendanceState::Viewing(date), "tap");
                    TapOutcome::Selected
                } else {
                    info!("📭 No schedule for {}", date);
                    self.notices.push_back(AttendanceNotice::NoScheduleForDate { date });
                    TapOutcome::NoSchedule
                }
            }
        }
    }

    /// Handle a tap on a grid cell; padding cells are inert
    pub fn tap_cell(&mut self, cell: &CalendarCell) -> TapOutcome {
        match cell.date() {
            Some(date) => self.tap(date),
            None => TapOutcome::Ignored,
        }
    }

    /// Handle a tap addressed by ISO key. Malformed keys are ignored
    pub fn tap_key(&mut self, key: &str) -> TapOutcome {
        match parse_iso_date(key) {
            Some(date) => self.tap(date),
            None => {
                debug!("Ignoring tap on malformed date key {:?}", key);
                TapOutcome::Ignored
            }
        }
    }

    /// Viewing → Idle
    pub fn cancel_selection(&mut self) -> bool {
        match self.state {
            AttendanceState::Viewing(_) => {
                self.transition(AttendanceState::Idle, "cancel_selection")
            }
            _ => self.ignore("cancel_selection"),
        }
    }

    /// Viewing(d) → Confirming(d)
    pub fn attend(&mut self) -> bool {
        match self.state {
            AttendanceState::Viewing(date) => {
                self.transition(AttendanceState::Confirming(date), "attend")
            }
            _ => self.ignore("attend"),
        }
    }

    /// Confirming(d) → Confirmed(d)
    pub fn confirm_ok(&mut self) -> bool {
        match self.state {
            AttendanceState::Confirming(date) => {
                info!("✅ Attendance confirmed for {}", date);
                self.transition(AttendanceState::Confirmed(date), "confirm_ok")
            }
            _ => self.ignore("confirm_ok"),
        }
    }

    /// Confirming(d) → Viewing(d)
    pub fn confirm_cancel(&mut self) -> bool {
        match self.state {
            AttendanceState::Confirming(date) => {
                self.transition(AttendanceState::Viewing(date), "confirm_cancel")
            }
            _ => self.ignore("confirm_cancel"),
        }
    }

    /// Confirmed(d) → Idle
    pub fn cancel_attendance(&mut self) -> bool {
        match self.state {
            AttendanceState::Confirmed(_) => {
                self.transition(AttendanceState::Idle, "cancel_attendance")
            }
            _ => self.ignore("cancel_attendance"),
        }
    }

    /// Ask the host to pop this screen. Refused while locked
    pub fn go_back(&self, router: &mut dyn HostRouter) -> bool {
        if self.is_locked() {
            return self.ignore("go_back");
        }
        info!("⬅️ Leaving attendance screen in state {}", self.state);
        router.go_back();
        true
    }

    /// Month currently displayed
    pub fn focus(&self) -> CalendarFocusDate {
        self.focus
    }

    pub fn show_previous_month(&mut self) -> bool {
        let target = self.grid.previous_month(self.focus);
        self.set_focus(target, "show_previous_month")
    }

    pub fn show_next_month(&mut self) -> bool {
        let target = self.grid.next_month(self.focus);
        self.set_focus(target, "show_next_month")
    }

    /// Jump back to the month containing today
    pub fn show_current_month(&mut self) -> bool {
        self.set_focus(self.home, "show_current_month")
    }

    fn set_focus(&mut self, target: CalendarFocusDate, event: &str) -> bool {
        if self.is_locked() {
            return self.ignore(event);
        }
        if self.focus == target {
            return false;
        }
        self.focus = target;
        info!("📅 Showing {}", self.grid.month_title(target.month, target.year));
        true
    }

    /// Notices not yet handed to the host
    pub fn pending_notices(&self) -> impl Iterator<Item = &AttendanceNotice> {
        self.notices.iter()
    }

    /// Hand every pending notice to the host, oldest first
    pub fn drain_notices(&mut self) -> Vec<AttendanceNotice> {
        self.notices.drain(..).collect()
    }

    /// The month currently in focus
    pub fn calendar(&self, today: NaiveDate) -> CalendarMonth {
        self.grid
            .build_focus(self.focus, today, &self.schedule)
            .unwrap_or_else(|_| self.grid.build(today, &self.schedule))
    }

    /// Everything the host needs to draw the widget
    pub fn view(&self, today: NaiveDate) -> AttendanceView {
        let month = self.calendar(today);
        let cells = month.cells.iter().map(|cell| self.cell_view(cell)).collect();

        AttendanceView {
            state: self.state,
            weekday_labels: self.grid.weekday_labels(),
            cells,
            panel: self.panel(),
            locked: self.is_locked(),
            can_go_back: !self.is_locked(),
            month,
        }
    }

    fn cell_view(&self, cell: &CalendarCell) -> CellView {
        let day = match cell {
            CalendarCell::Empty => {
                return CellView {
                    cell: cell.clone(),
                    style: CellStyle::Blank,
                    label: String::new(),
                    interactive: false,
                }
            }
            CalendarCell::Day(day) => day,
        };

        let style = if self.confirmed_attendance() == Some(day.date) {
            CellStyle::Confirmed
        } else if self.selected_date() == Some(day.date) {
            CellStyle::Selected
        } else if day.is_scheduled {
            CellStyle::Scheduled
        } else {
            CellStyle::Plain
        };

        let label = match self.schedule.lookup(day.date) {
            Some(event) => event.accessibility_label(),
            None => unscheduled_label(day.date),
        };

        CellView {
            cell: cell.clone(),
            style,
            label,
            interactive: matches!(self.state, AttendanceState::Idle | AttendanceState::Viewing(_)),
        }
    }

    fn panel(&self) -> AttendancePanel {
        let prompt = || AttendancePanel::Prompt { message: SELECTION_PROMPT.to_string() };
        let details = |date: NaiveDate| self.schedule.lookup(date).map(EventDetails::from);

        match self.state {
            AttendanceState::Idle => prompt(),
            AttendanceState::Viewing(date) => details(date)
                .map(AttendancePanel::EventDetails)
                .unwrap_or_else(prompt),
            AttendanceState::Confirming(date) => details(date)
                .map(|details| AttendancePanel::ConfirmationDialog {
                    heading: CONFIRMATION_DIALOG_HEADING.to_string(),
                    details,
                })
                .unwrap_or_else(prompt),
            AttendanceState::Confirmed(date) => AttendancePanel::ConfirmedBanner {
                heading: CONFIRMED_BANNER_HEADING.to_string(),
                date,
                iso_date: shared::format_iso_date(date),
            },
        }
    }

    fn transition(&mut self, next: AttendanceState, event: &str) -> bool {
        info!("🎯 {}: {} -> {}", event, self.state, next);
        self.state = next;
        true
    }

    fn ignore(&self, event: &str) -> bool {
        debug!("Ignoring {} in state {}", event, self.state);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingRouter {
        back_calls: usize,
    }

    impl HostRouter for CountingRouter {
        fn go_back(&mut self) {
            self.back_calls += 1;
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn selector() -> AttendanceSelector {
        let schedule = ScheduleSource::new(vec![
            ScheduledEvent::new(date(2025, 6, 2), "Morning Mass", "09:00 am - 10:00 am")
                .with_speaker("Pastor X"),
            ScheduledEvent::new(date(2025, 6, 8), "Church Event", "03:00 pm - 05:00 pm"),
            ScheduledEvent::new(date(2025, 7, 6), "Sunday Mass", "10:00 am - 11:00 am"),
        ])
        .unwrap();
        AttendanceSelector::new(schedule, today())
    }

    fn confirming() -> AttendanceSelector {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));
        selector.attend();
        selector
    }

    #[test]
    fn test_tap_scheduled_date_starts_viewing() {
        let mut selector = selector();

        assert_eq!(selector.tap(date(2025, 6, 2)), TapOutcome::Selected);
        assert_eq!(selector.state(), AttendanceState::Viewing(date(2025, 6, 2)));
        assert_eq!(selector.selected_event().unwrap().title, "Morning Mass");
        assert_eq!(selector.pending_notices().count(), 0);
    }

    #[test]
    fn test_tap_unscheduled_date_emits_one_notice() {
        let mut selector = selector();

        assert_eq!(selector.tap(date(2025, 6, 3)), TapOutcome::NoSchedule);
        assert_eq!(selector.state(), AttendanceState::Idle);
        assert_eq!(
            selector.drain_notices(),
            vec![AttendanceNotice::NoScheduleForDate { date: date(2025, 6, 3) }]
        );
        assert!(selector.drain_notices().is_empty());
    }

    #[test]
    fn test_tap_unscheduled_while_viewing_keeps_selection() {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));

        assert_eq!(selector.tap(date(2025, 6, 3)), TapOutcome::NoSchedule);
        assert_eq!(selector.state(), AttendanceState::Viewing(date(2025, 6, 2)));
    }

    #[test]
    fn test_tap_other_scheduled_date_replaces_selection() {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));

        assert_eq!(selector.tap(date(2025, 6, 8)), TapOutcome::Selected);
        assert_eq!(selector.state(), AttendanceState::Viewing(date(2025, 6, 8)));
    }

    #[test]
    fn test_reselecting_viewed_date_is_noop() {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));
        let before = selector.state();

        assert_eq!(selector.tap(date(2025, 6, 2)), TapOutcome::AlreadySelected);
        assert_eq!(selector.state(), before);
    }

    #[test]
    fn test_padding_and_malformed_taps_are_ignored() {
        let mut selector = selector();

        assert_eq!(selector.tap_cell(&CalendarCell::Empty), TapOutcome::Ignored);
        assert_eq!(selector.tap_key("2025-6-2"), TapOutcome::Ignored);
        assert_eq!(selector.state(), AttendanceState::Idle);
        assert_eq!(selector.pending_notices().count(), 0);
    }

    #[test]
    fn test_cancel_selection_returns_to_idle() {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));

        assert!(selector.cancel_selection());
        assert_eq!(selector.state(), AttendanceState::Idle);
        assert_eq!(selector.selected_date(), None);
    }

    #[test]
    fn test_attend_only_from_viewing() {
        let mut selector = selector();
        assert!(!selector.attend());
        assert_eq!(selector.state(), AttendanceState::Idle);

        selector.tap(date(2025, 6, 2));
        assert!(selector.attend());
        assert!(selector.confirm_ok());

        assert!(!selector.attend());
        assert_eq!(selector.state(), AttendanceState::Confirmed(date(2025, 6, 2)));
    }

    #[test]
    fn test_confirm_cancel_restores_viewing() {
        let mut selector = selector();
        selector.tap(date(2025, 6, 2));
        let viewing = selector.state();

        selector.attend();
        assert!(selector.is_confirming());
        assert!(selector.confirm_cancel());
        assert_eq!(selector.state(), viewing);
    }

    #[test]
    fn test_confirming_locks_the_widget() {
        let mut selector = confirming();

        assert_eq!(selector.tap(date(2025, 6, 8)), TapOutcome::Ignored);
        assert_eq!(selector.tap(date(2025, 6, 3)), TapOutcome::Ignored);
        assert!(!selector.cancel_selection());
        assert!(!selector.show_next_month());
        assert_eq!(selector.state(), AttendanceState::Confirming(date(2025, 6, 2)));
        assert_eq!(selector.pending_notices().count(), 0);
    }

    #[test]
    fn test_full_flow_resets_to_idle() {
        let mut selector = selector();

        selector.tap(date(2025, 6, 2));
        selector.attend();
        assert!(selector.confirm_ok());
        assert_eq!(selector.confirmed_attendance(), Some(date(2025, 6, 2)));
        assert_eq!(selector.selected_date(), None);

        assert!(selector.cancel_attendance());
        assert_eq!(selector.state(), AttendanceState::Idle);
        assert_eq!(selector.selected_date(), None);
        assert_eq!(selector.confirmed_attendance(), None);
    }

    #[test]
    fn test_taps_ignored_once_confirmed() {
        let mut selector = confirming();
        selector.confirm_ok();

        assert_eq!(selector.tap(date(2025, 6, 8)), TapOutcome::Ignored);
        assert_eq!(selector.tap(date(2025, 6, 3)), TapOutcome::Ignored);
        assert_eq!(selector.pending_notices().count(), 0);
        assert_eq!(selector.state(), AttendanceState::Confirmed(date(2025, 6, 2)));
    }

    #[test]
    fn test_transitions_outside_their_state_are_noops() {
        let mut selector = selector();

        assert!(!selector.confirm_ok());
        assert!(!selector.confirm_cancel());
        assert!(!selector.cancel_attendance());
        assert!(!selector.cancel_selection());
        assert_eq!(selector.state(), AttendanceState::Idle);
    }

    #[test]
    fn test_go_back_refused_while_confirming() {
        let mut router = CountingRouter { back_calls: 0 };
        let selector = confirming();
        assert!(!selector.go_back(&mut router));
        assert_eq!(router.back_calls, 0);

        let mut selector = selector;
        selector.confirm_cancel();
        assert!(selector.go_back(&mut router));
        assert_eq!(router.back_calls, 1);
    }

    #[test]
    fn test_month_navigation() {
        let mut selector = selector();

        assert!(selector.show_next_month());
        assert_eq!(selector.focus(), CalendarFocusDate { month: 7, year: 2025 });
        let july = selector.calendar(today());
        assert!(july.day(date(2025, 7, 6)).unwrap().is_scheduled);

        assert_eq!(selector.tap(date(2025, 7, 6)), TapOutcome::Selected);
        assert!(selector.show_current_month());
        assert_eq!(selector.focus(), CalendarFocusDate { month: 6, year: 2025 });
        assert!(!selector.show_current_month());
        assert_eq!(selector.state(), AttendanceState::Viewing(date(2025, 7, 6)));
    }

    #[test]
    fn test_view_cell_styles_follow_state() {
        let mut selector = selector();
        let view = selector.view(today());
        assert_eq!(view.cell_for(date(2025, 6, 2)).unwrap().style, CellStyle::Scheduled);
        assert_eq!(view.cell_for(date(2025, 6, 3)).unwrap().style, CellStyle::Plain);
        assert_eq!(
            view.cell_for(date(2025, 6, 3)).unwrap().label,
            "No scheduled events on 2025-06-03"
        );

        selector.tap(date(2025, 6, 2));
        let view = selector.view(today());
        assert_eq!(view.cell_for(date(2025, 6, 2)).unwrap().style, CellStyle::Selected);
        assert!(view.month.day(date(2025, 6, 2)).unwrap().is_scheduled);

        selector.attend();
        let view = selector.view(today());
        assert!(view.locked);
        assert!(!view.can_go_back);
        assert!(view.cells.iter().all(|cell| !cell.interactive));

        selector.confirm_ok();
        let view = selector.view(today());
        assert_eq!(view.cell_for(date(2025, 6, 2)).unwrap().style, CellStyle::Confirmed);
    }

    #[test]
    fn test_view_panels() {
        let mut selector = selector();
        assert_eq!(
            selector.view(today()).panel,
            AttendancePanel::Prompt { message: SELECTION_PROMPT.to_string() }
        );

        selector.tap(date(2025, 6, 2));
        match selector.view(today()).panel {
            AttendancePanel::EventDetails(details) => {
                assert_eq!(details.weekday, "Monday");
                assert_eq!(details.speaker.as_deref(), Some("Pastor X"));
                assert_eq!(details.time_label, "(09:00 am - 10:00 am)");
            }
            other => panic!("expected event details, got {:?}", other),
        }

        selector.attend();
        match selector.view(today()).panel {
            AttendancePanel::ConfirmationDialog { heading, details } => {
                assert_eq!(heading, "Attendance Confirmed!");
                assert_eq!(details.title, "Morning Mass");
                assert_eq!(details.iso_date, "2025-06-02");
            }
            other => panic!("expected confirmation dialog, got {:?}", other),
        }

        selector.confirm_ok();
        assert_eq!(
            selector.view(today()).panel,
            AttendancePanel::ConfirmedBanner {
                heading: "Attendance confirmed for Mass on".to_string(),
                date: date(2025, 6, 2),
                iso_date: "2025-06-02".to_string(),
            }
        );
    }
}
