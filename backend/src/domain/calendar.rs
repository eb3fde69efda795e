//! Calendar domain logic for the attendance scheduler.
//!
//! This module builds the Sunday-first month grid the widget renders and
//! handles month-to-month navigation. Cells are classified against a
//! [`ScheduleSource`] on every build; nothing is cached between renders.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarCell, CalendarDay, CalendarFocusDate, CalendarMonth};

use super::schedule_source::ScheduleSource;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// Calendar service that handles grid construction and date math
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarGrid;

impl CalendarGrid {
    pub fn new() -> Self {
        Self
    }

    /// Grid for the month containing `today`
    pub fn build(&self, today: NaiveDate, schedule: &ScheduleSource) -> CalendarMonth {
        let first = today.with_day(1).unwrap_or(today);
        self.assemble(first, today, schedule)
    }

    /// Grid for an arbitrary month, with `today` only used for the today marker
    pub fn build_month(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
        schedule: &ScheduleSource,
    ) -> Result<CalendarMonth, CalendarError> {
        let first = self.first_of_month(month, year)?;
        Ok(self.assemble(first, today, schedule))
    }

    pub fn build_focus(
        &self,
        focus: CalendarFocusDate,
        today: NaiveDate,
        schedule: &ScheduleSource,
    ) -> Result<CalendarMonth, CalendarError> {
        self.build_month(focus.year, focus.month, today, schedule)
    }

    fn assemble(
        &self,
        first: NaiveDate,
        today: NaiveDate,
        schedule: &ScheduleSource,
    ) -> CalendarMonth {
        let month = first.month();
        let year = first.year();
        let blanks = self.leading_blanks(first);
        let days_in_month = self.days_in_month(month, year);

        log::debug!(
            "🗓️ Building calendar for {}/{}: {} padding cells, {} days",
            month,
            year,
            blanks,
            days_in_month
        );

        let mut cells = Vec::with_capacity((blanks + days_in_month) as usize);
        cells.extend((0..blanks).map(|_| CalendarCell::Empty));
        cells.extend((1..=days_in_month).filter_map(|day| first.with_day(day)).map(|date| {
            CalendarCell::Day(CalendarDay {
                date,
                day: date.day(),
                is_scheduled: schedule.has(date),
                is_today: date == today,
            })
        }));

        CalendarMonth {
            month,
            year,
            title: self.month_title(month, year),
            cells,
            first_day_of_week: blanks,
            days_in_month,
        }
    }

    /// Padding cells before the 1st of the month containing `date`
    pub fn leading_blanks(&self, date: NaiveDate) -> u32 {
        date.with_day(1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn first_of_month(&self, month: u32, year: i32) -> Result<NaiveDate, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Column headers for the grid, Sunday first
    pub fn weekday_labels(&self) -> Vec<String> {
        WEEKDAY_LABELS.iter().map(|label| label.to_string()).collect()
    }

    /// e.g. "June 2025"
    pub fn month_title(&self, month: u32, year: i32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    pub fn previous_month(&self, focus: CalendarFocusDate) -> CalendarFocusDate {
        if focus.month <= 1 {
            CalendarFocusDate { month: 12, year: focus.year - 1 }
        } else {
            CalendarFocusDate { month: focus.month - 1, year: focus.year }
        }
    }

    pub fn next_month(&self, focus: CalendarFocusDate) -> CalendarFocusDate {
        if focus.month >= 12 {
            CalendarFocusDate { month: 1, year: focus.year + 1 }
        } else {
            CalendarFocusDate { month: focus.month + 1, year: focus.year }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ScheduledEvent;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn schedule_with(dates: &[NaiveDate]) -> ScheduleSource {
        ScheduleSource::new(
            dates
                .iter()
                .map(|d| ScheduledEvent::new(*d, "Mass", "09:00 am")),
        )
        .unwrap()
    }

    #[test]
    fn test_weekday_labels_start_on_sunday() {
        let labels = CalendarGrid::new().weekday_labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.first().map(String::as_str), Some("Sun"));
        assert_eq!(labels.last().map(String::as_str), Some("Sat"));
    }

    #[test]
    fn test_days_in_month() {
        let grid = CalendarGrid::new();

        assert_eq!(grid.days_in_month(1, 2025), 31); // January
        assert_eq!(grid.days_in_month(4, 2025), 30); // April
        assert_eq!(grid.days_in_month(2, 2025), 28);
        assert_eq!(grid.days_in_month(2, 2024), 29); // leap
    }

    #[test]
    fn test_is_leap_year() {
        let grid = CalendarGrid::new();

        assert!(!grid.is_leap_year(2025));
        assert!(grid.is_leap_year(2024));
        assert!(!grid.is_leap_year(1900));
        assert!(grid.is_leap_year(2000));
    }

    #[test]
    fn test_sunday_first_month_has_no_blanks() {
        // June 1st 2025 is a Sunday
        let grid = CalendarGrid::new();
        let month = grid.build(date(2025, 6, 15), &ScheduleSource::empty());

        assert_eq!(month.leading_blanks(), 0);
        assert_eq!(month.first_day_of_week, 0);
        assert_eq!(month.cells.len(), 30);
        assert_eq!(month.title, "June 2025");
    }

    #[test]
    fn test_saturday_first_month_has_six_blanks() {
        // February 1st 2025 is a Saturday
        let grid = CalendarGrid::new();
        let month = grid.build(date(2025, 2, 10), &ScheduleSource::empty());

        assert_eq!(month.leading_blanks(), 6);
        assert_eq!(month.cells.len(), 6 + 28);
        assert!(month.cells[..6].iter().all(CalendarCell::is_empty));
        assert_eq!(month.cells[6].date(), Some(date(2025, 2, 1)));
    }

    #[test]
    fn test_leap_february() {
        // February 1st 2024 is a Thursday
        let grid = CalendarGrid::new();
        let month = grid.build(date(2024, 2, 29), &ScheduleSource::empty());

        assert_eq!(month.leading_blanks(), 4);
        assert_eq!(month.days_in_month, 29);
        assert_eq!(month.cells.len(), 4 + 29);
        assert_eq!(month.cells.last().and_then(CalendarCell::date), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_cells_are_classified_against_schedule() {
        let grid = CalendarGrid::new();
        let schedule = schedule_with(&[date(2025, 6, 2), date(2025, 6, 8), date(2025, 7, 1)]);
        let month = grid.build(date(2025, 6, 15), &schedule);

        let scheduled: Vec<u32> = month.days().filter(|d| d.is_scheduled).map(|d| d.day).collect();
        assert_eq!(scheduled, vec![2, 8]);
        assert!(month.day(date(2025, 6, 15)).unwrap().is_today);
        assert_eq!(month.days().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_build_month_other_than_today() {
        let grid = CalendarGrid::new();
        let month = grid.build_month(2025, 7, date(2025, 6, 15), &ScheduleSource::empty()).unwrap();

        assert_eq!(month.month, 7);
        assert_eq!(month.leading_blanks(), 2); // July 1st 2025 is a Tuesday
        assert!(month.days().all(|d| !d.is_today));
    }

    #[test]
    fn test_build_month_rejects_invalid_month() {
        let grid = CalendarGrid::new();

        assert_eq!(
            grid.build_month(2025, 13, date(2025, 6, 15), &ScheduleSource::empty()),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(
            grid.build_month(2025, 0, date(2025, 6, 15), &ScheduleSource::empty()),
            Err(CalendarError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_month_name() {
        let grid = CalendarGrid::new();

        assert_eq!(grid.month_name(1), "January");
        assert_eq!(grid.month_name(6), "June");
        assert_eq!(grid.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_navigation() {
        let grid = CalendarGrid::new();

        assert_eq!(
            grid.previous_month(CalendarFocusDate { month: 1, year: 2025 }),
            CalendarFocusDate { month: 12, year: 2024 }
        );
        assert_eq!(
            grid.next_month(CalendarFocusDate { month: 12, year: 2025 }),
            CalendarFocusDate { month: 1, year: 2026 }
        );
        assert_eq!(
            grid.next_month(CalendarFocusDate { month: 6, year: 2025 }),
            CalendarFocusDate { month: 7, year: 2025 }
        );
    }
}
