//! Scheduled events keyed by calendar date.
//!
//! A [`ScheduleSource`] is read-only once built: there are no add or remove
//! operations, and the selector holds its own copy for the lifetime of the
//! attendance screen. Where the table comes from is decided by a
//! [`ScheduleProvider`], so the widget can be driven by a synthetic schedule
//! in tests and by the parish table (or a YAML file) in the app.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use shared::{parse_iso_date, ScheduledEvent};

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Date {0} is scheduled more than once")]
    DuplicateDate(NaiveDate),
    #[error("Failed to read schedule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid schedule file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Immutable date → event table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSource {
    events: BTreeMap<NaiveDate, ScheduledEvent>,
}

impl ScheduleSource {
    /// Build a schedule, rejecting two events on the same date
    pub fn new(events: impl IntoIterator<Item = ScheduledEvent>) -> Result<Self, ScheduleError> {
        let mut table = BTreeMap::new();
        for event in events {
            if table.contains_key(&event.date) {
                return Err(ScheduleError::DuplicateDate(event.date));
            }
            table.insert(event.date, event);
        }
        Ok(Self { events: table })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Details for `date`, or `None` when nothing is scheduled
    pub fn lookup(&self, date: NaiveDate) -> Option<&ScheduledEvent> {
        self.events.get(&date)
    }

    /// Lookup by exact `yyyy-MM-dd` key
    pub fn lookup_key(&self, key: &str) -> Option<&ScheduledEvent> {
        parse_iso_date(key).and_then(|date| self.lookup(date))
    }

    pub fn has(&self, date: NaiveDate) -> bool {
        self.events.contains_key(&date)
    }

    /// Events in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledEvent> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Builds the schedule for a given "today".
///
/// Closures `Fn(NaiveDate) -> ScheduleSource` are providers, and so is a
/// plain [`ScheduleSource`], which ignores the date.
pub trait ScheduleProvider: Send + Sync {
    fn schedule_for(&self, today: NaiveDate) -> ScheduleSource;
}

impl<F> ScheduleProvider for F
where
    F: Fn(NaiveDate) -> ScheduleSource + Send + Sync,
{
    fn schedule_for(&self, today: NaiveDate) -> ScheduleSource {
        self(today)
    }
}

impl ScheduleProvider for ScheduleSource {
    fn schedule_for(&self, _today: NaiveDate) -> ScheduleSource {
        self.clone()
    }
}

const PARISH_PASTOR: &str = "Pastor Kirby ajero Preza";

/// The parish's built-in table.
///
/// Always has a special mass on "today"; the fixed entries win if today
/// lands on one of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParishSchedule;

impl ParishSchedule {
    fn fixed_events() -> Vec<ScheduledEvent> {
        let mut events = Vec::new();
        if let Some(date) = NaiveDate::from_ymd_opt(2025, 6, 2) {
            events.push(
                ScheduledEvent::new(date, "Morning Mass", "09:00 am - 10:00 am")
                    .with_speaker(PARISH_PASTOR),
            );
        }
        if let Some(date) = NaiveDate::from_ymd_opt(2025, 6, 8) {
            events.push(
                ScheduledEvent::new(date, "Church Event", "03:00 pm - 05:00 pm")
                    .with_speaker("Event Coordinator"),
            );
        }
        events
    }
}

impl ScheduleProvider for ParishSchedule {
    fn schedule_for(&self, today: NaiveDate) -> ScheduleSource {
        let mut events = BTreeMap::new();
        events.insert(
            today,
            ScheduledEvent::new(today, "Special Mass (Today)", "08:00 am - 09:00 am")
                .with_speaker(PARISH_PASTOR),
        );
        for event in Self::fixed_events() {
            events.insert(event.date, event);
        }
        ScheduleSource { events }
    }
}
