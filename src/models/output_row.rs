use chrono::NaiveDate;
use serde::Serialize;

use super::allocation::CategoryHours;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HoursType {
    Regular,
    Overtime,
}

impl HoursType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoursType::Regular => "Regular",
            HoursType::Overtime => "Overtime",
        }
    }
}

/// One printable timecard line.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRow {
    pub employee_id: String,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub time_entry_id: String,
    pub project_name: String,
    pub cost_code: String,
    #[serde(flatten)]
    pub categories: CategoryHours,
    pub hours_type: HoursType,
    pub hours: f64,
    pub injured: bool,
}
