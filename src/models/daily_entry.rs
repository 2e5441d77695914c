use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::time_entry::TimeEntry;

/// One person's entries for one calendar day, with derived totals.
/// Rebuilt from the entries every time; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTimeEntry {
    pub employee_id: String,
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub total_minutes: i64,
    pub is_late: bool,
    pub has_no_clock_out: bool,
}
