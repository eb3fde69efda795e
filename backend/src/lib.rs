//! # Mass Attendance Backend
//!
//! Domain services for the mass attendance scheduler, with no dependency on
//! any UI toolkit. A host (the egui app, or anything else that can draw a
//! grid and forward clicks) owns a [`Backend`], asks it for an
//! [`AttendanceSelector`] when the attendance screen is entered, and drops
//! that selector when the screen is left.
//!
//! ## Layers
//!
//! - **Domain**: schedule lookup, calendar grid math, the attendance state machine
//! - **Storage**: loading a schedule table from a YAML file
//!
//! Everything here is synchronous; every transition completes on the input
//! event that caused it.

pub mod domain;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

pub use domain::*;
pub use storage::*;

/// Main backend struct that holds the injected collaborators
#[derive(Clone)]
pub struct Backend {
    pub schedule_provider: Arc<dyn ScheduleProvider>,
    pub clock: Arc<dyn Clock>,
}

impl Backend {
    /// Backend with the built-in parish schedule and the system clock
    pub fn new() -> Self {
        Self::with_parts(Arc::new(ParishSchedule), Arc::new(SystemClock))
    }

    pub fn with_parts(schedule_provider: Arc<dyn ScheduleProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            schedule_provider,
            clock,
        }
    }

    /// Backend whose schedule comes from `schedule_file` when given, or the
    /// built-in table otherwise.
    ///
    /// Fails if the file cannot be read or is not a valid schedule table.
    pub fn initialize(schedule_file: Option<&Path>) -> Result<Self> {
        let Some(path) = schedule_file else {
            info!("📅 Using built-in parish schedule");
            return Ok(Self::new());
        };

        let schedule = ScheduleSource::from_yaml_file(path)
            .with_context(|| format!("Failed to load schedule file {}", path.display()))?;
        info!(
            "📅 Loaded {} scheduled events from {}",
            schedule.len(),
            path.display()
        );

        Ok(Self::with_parts(Arc::new(schedule), Arc::new(SystemClock)))
    }

    /// Today according to the injected clock
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Fresh selector for a newly entered attendance screen
    pub fn attendance_selector(&self) -> AttendanceSelector {
        let today = self.clock.today();
        AttendanceSelector::new(self.schedule_provider.schedule_for(today), today)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
