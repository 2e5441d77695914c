use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::calculator::geometry::minutes_between;

/// One continuous clock-in/clock-out span (or break) for a person.
///
/// Timestamps are wall-clock values already localized by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub start: NaiveDateTime,
    #[serde(default)]
    pub end: Option<NaiveDateTime>, // None ⇔ entry still open
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub task_activity_code: Option<String>,
    #[serde(default)]
    pub injured: bool,

    // opaque metadata, carried through untouched
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl TimeEntry {
    /// Closed entry with no optional metadata.
    pub fn new(
        id: &str,
        employee_id: &str,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            start,
            end,
            is_break: false,
            project_id: None,
            duration_minutes: None,
            task_activity_code: None,
            injured: false,
            latitude: None,
            longitude: None,
            photo_url: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }

    pub fn work_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// End used for computations: the stored end, or `now` for open entries.
    pub fn effective_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end.unwrap_or(now)
    }

    /// Worked minutes for payroll: the stored duration wins over timestamps.
    /// Never negative.
    pub fn worked_minutes(&self, now: NaiveDateTime) -> i64 {
        let mins = match self.duration_minutes {
            Some(stored) => stored,
            None => minutes_between(self.start, self.end, now),
        };
        mins.max(0)
    }
}
