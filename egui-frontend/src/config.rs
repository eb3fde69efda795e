//! # Config Module
//!
//! Optional YAML configuration for the desktop app. Every field has a
//! default, and a missing config file simply means "use the defaults".
//!
//! ## Lookup order:
//! 1. `$MASS_ATTENDANCE_CONFIG`
//! 2. `<config dir>/mass-attendance/config.yaml`
//!
//! ## Example:
//! ```yaml
//! window_title: St. Jude Mass Schedule
//! notice_duration_secs: 6
//! schedule_file: schedule.yaml   # relative to this file
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "MASS_ATTENDANCE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// How long a "no schedule" toast stays up
    pub notice_duration_secs: u64,
    /// YAML schedule table to use instead of the built-in one
    pub schedule_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Mass and Event Schedule".to_string(),
            window_size: [600.0, 860.0],
            notice_duration_secs: 4,
            schedule_file: None,
        }
    }
}

impl AppConfig {
    /// Where the config file is expected, if a location can be determined
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("mass-attendance").join("config.yaml"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    ///
    /// A relative `schedule_file` is resolved against the config file's directory.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&yaml_content)?;

        if let (Some(schedule_file), Some(config_dir)) =
            (config.schedule_file.as_ref(), path.parent())
        {
            if schedule_file.is_relative() {
                config.schedule_file = Some(config_dir.join(schedule_file));
            }
        }

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }
}
