use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_THRESHOLD_HOURS: f64 = 8.0;

fn default_threshold() -> f64 {
    DEFAULT_DAILY_THRESHOLD_HOURS
}

/// Company-wide overtime policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    #[serde(default)]
    pub enabled: bool,
    /// Only used when no schedule row resolves for the day.
    #[serde(default = "default_threshold")]
    pub daily_threshold_hours: f64,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            daily_threshold_hours: DEFAULT_DAILY_THRESHOLD_HOURS,
        }
    }
}

impl OvertimePolicy {
    pub fn enabled(daily_threshold_hours: f64) -> Self {
        Self {
            enabled: true,
            daily_threshold_hours,
        }
    }

    pub fn threshold_minutes(&self) -> i64 {
        (self.daily_threshold_hours * 60.0).round() as i64
    }
}
