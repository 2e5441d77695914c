use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::parse_time;

/// One weekday of an employee or department schedule.
///
/// Exactly one of `employee_id` / `department_id` is expected; a row
/// carrying both is treated as an employee row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    pub day_of_week: u8, // 0 = Sunday
    #[serde(default)]
    pub start_time: Option<String>, // "HH:MM"
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_day_off: bool,
}

impl ScheduleDay {
    pub fn for_employee(employee_id: &str, day_of_week: u8, start: &str, end: &str) -> Self {
        Self {
            employee_id: Some(employee_id.to_string()),
            department_id: None,
            day_of_week,
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            is_day_off: false,
        }
    }

    pub fn for_department(department_id: &str, day_of_week: u8, start: &str, end: &str) -> Self {
        Self {
            employee_id: None,
            department_id: Some(department_id.to_string()),
            day_of_week,
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            is_day_off: false,
        }
    }

    pub fn day_off(mut self) -> Self {
        self.is_day_off = true;
        self
    }

    pub fn is_employee_row(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }

    pub fn is_department_row(&self, department_id: &str) -> bool {
        self.employee_id.is_none() && self.department_id.as_deref() == Some(department_id)
    }

    /// Both times, parsed. `None` when either is missing or malformed.
    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = parse_time(self.start_time.as_deref()?)?;
        let end = parse_time(self.end_time.as_deref()?)?;
        Some((start, end))
    }
}
