use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, NaiveDate};

/// Date format used for schedule keys and user-facing dates (`2025-06-02`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt shown while nothing is selected
pub const SELECTION_PROMPT: &str = "Tap on a highlighted date to view the schedule";

/// Heading of the banner shown once attendance is final
pub const CONFIRMED_BANNER_HEADING: &str = "Attendance confirmed for Mass on";

/// Heading of the confirmation dialog
pub const CONFIRMATION_DIALOG_HEADING: &str = "Attendance Confirmed!";

/// Format a date as an ISO schedule key
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse an ISO schedule key.
///
/// Only the exact `yyyy-MM-dd` form is accepted; `2025-6-2` is not a key.
pub fn parse_iso_date(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, ISO_DATE_FORMAT).ok()?;
    if format_iso_date(date) == key {
        Some(date)
    } else {
        None
    }
}

/// A mass or church event scheduled on a single calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Date the event falls on; unique within a schedule
    pub date: NaiveDate,
    /// Display title, e.g. "Morning Mass"
    pub title: String,
    /// Free-form time range. Never parsed, only shown
    pub time: String,
    /// Presenter or coordinator name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl ScheduledEvent {
    pub fn new(date: NaiveDate, title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            time: time.into(),
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Schedule key for this event
    pub fn iso_date(&self) -> String {
        format_iso_date(self.date)
    }

    /// Full weekday name, e.g. "Monday"
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// Time range wrapped for the details card, e.g. "(09:00 am - 10:00 am)"
    pub fn time_label(&self) -> String {
        format!("({})", self.time)
    }

    /// Screen-reader label for the event's calendar cell
    pub fn accessibility_label(&self) -> String {
        format!("{}, Tap to select", self.title)
    }
}

/// Label for a calendar cell with nothing scheduled
pub fn unscheduled_label(date: NaiveDate) -> String {
    format!("No scheduled events on {}", format_iso_date(date))
}

/// A single day inside the displayed month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month (1-31)
    pub day: u32,
    /// Whether the schedule has an event on this date
    pub is_scheduled: bool,
    /// Whether this is the host's "today"
    pub is_today: bool,
}

/// One slot in the Sunday-first month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Padding before the 1st of the month. Not interactive
    Empty,
    Day(CalendarDay),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day(day) => Some(day.date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, CalendarCell::Day(day) if day.is_scheduled)
    }
}

/// The visible month, ready to be laid out seven cells per row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// Display title, e.g. "June 2025"
    pub title: String,
    pub cells: Vec<CalendarCell>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
}

impl CalendarMonth {
    /// Number of padding cells before the 1st
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_empty()).count()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().filter_map(|cell| match cell {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Empty => None,
        })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| day.date == date)
    }
}

/// Month/year the calendar is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl CalendarFocusDate {
    /// Focus on the month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Phase of the attendance flow.
///
/// A single tagged value instead of independent flags, so a confirmation
/// dialog can never be open without a date under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "date")]
pub enum AttendanceState {
    /// Nothing selected
    #[default]
    Idle,
    /// A scheduled date is selected but not yet acted upon
    Viewing(NaiveDate),
    /// Confirmation dialog open; the widget is locked
    Confirming(NaiveDate),
    /// Attendance finalized for this date
    Confirmed(NaiveDate),
}

impl AttendanceState {
    /// Date under consideration (tapped but not yet confirmed)
    pub fn selected_date(&self) -> Option<NaiveDate> {
        match self {
            AttendanceState::Viewing(date) | AttendanceState::Confirming(date) => Some(*date),
            AttendanceState::Idle | AttendanceState::Confirmed(_) => None,
        }
    }

    /// Whether the confirmation dialog is open
    pub fn is_confirming(&self) -> bool {
        matches!(self, AttendanceState::Confirming(_))
    }

    pub fn confirmed_attendance(&self) -> Option<NaiveDate> {
        match self {
            AttendanceState::Confirmed(date) => Some(*date),
            _ => None,
        }
    }

    /// While locked, taps, cancel-selection, month changes and back navigation are ignored
    pub fn is_locked(&self) -> bool {
        self.is_confirming()
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttendanceState::Idle => "Idle",
            AttendanceState::Viewing(_) => "Viewing",
            AttendanceState::Confirming(_) => "Confirming",
            AttendanceState::Confirmed(_) => "Confirmed",
        }
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttendanceState::Idle => write!(f, "Idle"),
            AttendanceState::Viewing(date)
            | AttendanceState::Confirming(date)
            | AttendanceState::Confirmed(date) => {
                write!(f, "{}({})", self.name(), format_iso_date(*date))
            }
        }
    }
}

/// Informational, non-blocking messages the widget hands to its host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AttendanceNotice {
    /// The tapped date has nothing scheduled
    NoScheduleForDate { date: NaiveDate },
}

impl AttendanceNotice {
    pub fn message(&self) -> String {
        match self {
            AttendanceNotice::NoScheduleForDate { .. } => {
                "📭 No schedule for this date.".to_string()
            }
        }
    }
}

impl fmt::Display for AttendanceNotice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttendanceNotice::NoScheduleForDate { date } => {
                write!(f, "No schedule for {}", format_iso_date(*date))
            }
        }
    }
}

/// Visual class of a calendar cell, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    /// Attendance confirmed on this date
    Confirmed,
    /// Date currently being viewed
    Selected,
    /// Has an event, not selected
    Scheduled,
    /// Nothing scheduled
    Plain,
    /// Padding
    Blank,
}

/// A calendar cell plus everything the host needs to draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub cell: CalendarCell,
    pub style: CellStyle,
    /// Accessibility label; empty for padding
    pub label: String,
    /// Whether taps on this cell are accepted right now
    pub interactive: bool,
}

/// Details card content for a selected event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub date: NaiveDate,
    pub iso_date: String,
    pub weekday: String,
    pub title: String,
    pub speaker: Option<String>,
    pub time_label: String,
}

impl From<&ScheduledEvent> for EventDetails {
    fn from(event: &ScheduledEvent) -> Self {
        Self {
            date: event.date,
            iso_date: event.iso_date(),
            weekday: event.weekday_name(),
            title: event.title.clone(),
            speaker: event.speaker.clone(),
            time_label: event.time_label(),
        }
    }
}

/// The panel shown below the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendancePanel {
    /// Idle: ask the user to pick a highlighted date
    Prompt { message: String },
    /// Viewing: event card with Attend / Cancel
    EventDetails(EventDetails),
    /// Confirming: modal with OK / Cancel over the event card
    ConfirmationDialog { heading: String, details: EventDetails },
    /// Confirmed: summary with a cancel-attendance action
    ConfirmedBanner { heading: String, date: NaiveDate, iso_date: String },
}

/// Render snapshot of the whole widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceView {
    pub state: AttendanceState,
    pub month: CalendarMonth,
    pub weekday_labels: Vec<String>,
    pub cells: Vec<CellView>,
    pub panel: AttendancePanel,
    /// Grid, month navigation and Back are disabled
    pub locked: bool,
    pub can_go_back: bool,
}

impl AttendanceView {
    pub fn cell_for(&self, date: NaiveDate) -> Option<&CellView> {
        self.cells.iter().find(|view| view.cell.date() == Some(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date_exact_match() {
        assert_eq!(parse_iso_date("2025-06-02"), Some(date(2025, 6, 2)));
        assert_eq!(parse_iso_date("2025-6-2"), None);
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date("not a date"), None);
    }

    #[test]
    fn test_event_formatting() {
        let event = ScheduledEvent::new(date(2025, 6, 2), "Morning Mass", "09:00 am - 10:00 am")
            .with_speaker("Pastor X");

        assert_eq!(event.iso_date(), "2025-06-02");
        assert_eq!(event.weekday_name(), "Monday");
        assert_eq!(event.time_label(), "(09:00 am - 10:00 am)");
        assert_eq!(event.accessibility_label(), "Morning Mass, Tap to select");
        assert_eq!(unscheduled_label(date(2025, 6, 3)), "No scheduled events on 2025-06-03");
    }

    #[test]
    fn test_state_accessors() {
        let d = date(2025, 6, 2);

        assert_eq!(AttendanceState::Idle.selected_date(), None);
        assert_eq!(AttendanceState::Viewing(d).selected_date(), Some(d));
        assert_eq!(AttendanceState::Confirming(d).selected_date(), Some(d));
        assert_eq!(AttendanceState::Confirmed(d).selected_date(), None);
        assert_eq!(AttendanceState::Confirmed(d).confirmed_attendance(), Some(d));
        assert!(AttendanceState::Confirming(d).is_locked());
        assert!(!AttendanceState::Viewing(d).is_locked());
        assert_eq!(AttendanceState::Confirming(d).to_string(), "Confirming(2025-06-02)");
    }

    #[test]
    fn test_state_wire_shape() {
        let viewing = serde_json::to_value(AttendanceState::Viewing(date(2025, 6, 2))).unwrap();
        assert_eq!(viewing, serde_json::json!({ "state": "Viewing", "date": "2025-06-02" }));

        let idle = serde_json::to_value(AttendanceState::Idle).unwrap();
        assert_eq!(idle, serde_json::json!({ "state": "Idle" }));
    }

    #[test]
    fn test_event_speaker_is_optional() {
        let event: ScheduledEvent = serde_json::from_str(
            r#"{ "date": "2025-06-08", "title": "Church Event", "time": "03:00 pm - 05:00 pm" }"#,
        )
        .unwrap();
        assert_eq!(event.speaker, None);
    }
}
