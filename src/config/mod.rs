use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::calculator::geometry::{
    DEFAULT_WINDOW_END_HOUR, DEFAULT_WINDOW_START_HOUR, DisplayWindow,
};
use crate::core::calculator::timeline::{
    DEFAULT_LATE_GRACE_MINUTES, DEFAULT_MIN_SEGMENT_WIDTH, TimelineSettings,
};
use crate::errors::{AppError, AppResult};
use crate::models::policy::DEFAULT_DAILY_THRESHOLD_HOURS;
use crate::utils::time::parse_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_start")]
    pub window_start_hour: f64,
    #[serde(default = "default_window_end")]
    pub window_end_hour: f64,
    #[serde(default = "default_schedule_start")]
    pub default_schedule_start: String,
    #[serde(default = "default_schedule_end")]
    pub default_schedule_end: String,
    #[serde(default = "default_late_grace")]
    pub late_grace_minutes: i64,
    #[serde(default = "default_min_width")]
    pub min_segment_width: f64,
    /// Threshold used when the input bundle carries no overtime policy.
    #[serde(default = "default_threshold_hours")]
    pub default_threshold_hours: f64,
}

fn default_window_start() -> f64 {
    DEFAULT_WINDOW_START_HOUR
}
fn default_window_end() -> f64 {
    DEFAULT_WINDOW_END_HOUR
}
fn default_schedule_start() -> String {
    "08:00".to_string()
}
fn default_schedule_end() -> String {
    "17:00".to_string()
}
fn default_late_grace() -> i64 {
    DEFAULT_LATE_GRACE_MINUTES
}
fn default_min_width() -> f64 {
    DEFAULT_MIN_SEGMENT_WIDTH
}
fn default_threshold_hours() -> f64 {
    DEFAULT_DAILY_THRESHOLD_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start_hour: default_window_start(),
            window_end_hour: default_window_end(),
            default_schedule_start: default_schedule_start(),
            default_schedule_end: default_schedule_end(),
            late_grace_minutes: default_late_grace(),
            min_segment_width: default_min_width(),
            default_threshold_hours: default_threshold_hours(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timecard-engine")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timecard.conf")
    }

    /// Load configuration from `path` (or the standard file), or return
    /// defaults if it does not exist.
    pub fn load(path: Option<&PathBuf>) -> AppResult<Self> {
        let path = path.cloned().unwrap_or_else(Self::config_file);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the default configuration to `path` (or the standard file).
    pub fn init(path: Option<&PathBuf>) -> AppResult<PathBuf> {
        let path = path.cloned().unwrap_or_else(Self::config_file);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_yaml::to_string(&Self::default())?)?;
        Ok(path)
    }

    /// Display settings for the segment classifier. Unparsable default
    /// times fall back to 08:00/17:00.
    pub fn timeline_settings(&self) -> TimelineSettings {
        let base = TimelineSettings::default();
        TimelineSettings {
            window: DisplayWindow {
                start_hour: self.window_start_hour,
                end_hour: self.window_end_hour,
            },
            default_start: parse_time(&self.default_schedule_start).unwrap_or(base.default_start),
            default_end: parse_time(&self.default_schedule_end).unwrap_or(base.default_end),
            late_grace_minutes: self.late_grace_minutes,
            min_segment_width: self.min_segment_width,
        }
    }
}
