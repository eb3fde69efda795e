//! YAML schedule files.
//!
//! A schedule file is a list of events:
//!
//! ```yaml
//! - date: 2025-06-02
//!   title: Morning Mass
//!   time: 09:00 am - 10:00 am
//!   speaker: Pastor Kirby ajero Preza
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use shared::ScheduledEvent;

use crate::domain::schedule_source::{ScheduleError, ScheduleSource};

impl ScheduleSource {
    /// Parse a YAML event list. Duplicate dates are rejected
    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ScheduleError> {
        let events: Vec<ScheduledEvent> = serde_yaml::from_str(yaml_content)?;
        Self::new(events)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ScheduleError> {
        debug!("Reading schedule file {}", path.display());
        let yaml_content = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml_content)
    }

    pub fn to_yaml_string(&self) -> Result<String, ScheduleError> {
        let events: Vec<&ScheduledEvent> = self.iter().collect();
        Ok(serde_yaml::to_string(&events)?)
    }
}
