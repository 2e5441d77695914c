//! Effective scheduled minutes for a person on a weekday.
//!
//! Precedence: employee row → department row → policy threshold. A row
//! "resolves" when it is a day off or carries both times; otherwise the next
//! level is consulted.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::{OvertimePolicy, ScheduleDay};
use crate::utils::time::minutes_of_day;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleSource {
    Employee,
    Department,
    PolicyDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSchedule {
    /// 0 for a day off. May be negative if a row ends before it starts.
    pub minutes: i64,
    pub source: ScheduleSource,
}

fn employee_row<'a>(
    schedules: &'a [ScheduleDay],
    employee_id: &str,
    day_of_week: u8,
) -> Option<&'a ScheduleDay> {
    schedules
        .iter()
        .find(|s| s.day_of_week == day_of_week && s.is_employee_row(employee_id))
}

fn department_row<'a>(
    schedules: &'a [ScheduleDay],
    department_id: Option<&str>,
    day_of_week: u8,
) -> Option<&'a ScheduleDay> {
    let department_id = department_id?;
    schedules
        .iter()
        .find(|s| s.day_of_week == day_of_week && s.is_department_row(department_id))
}

fn row_minutes(row: &ScheduleDay) -> Option<i64> {
    if row.is_day_off {
        return Some(0);
    }
    let (start, end) = row.times()?;
    Some(minutes_of_day(end) - minutes_of_day(start))
}

pub fn resolve_scheduled_minutes(
    schedules: &[ScheduleDay],
    employee_id: &str,
    department_id: Option<&str>,
    day_of_week: u8,
    policy: &OvertimePolicy,
) -> ResolvedSchedule {
    let employee_minutes = employee_row(schedules, employee_id, day_of_week).and_then(row_minutes);
    let department_minutes =
        department_row(schedules, department_id, day_of_week).and_then(row_minutes);

    let resolved = match (employee_minutes, department_minutes) {
        (Some(minutes), _) => ResolvedSchedule {
            minutes,
            source: ScheduleSource::Employee,
        },
        (None, Some(minutes)) => ResolvedSchedule {
            minutes,
            source: ScheduleSource::Department,
        },
        (None, None) => ResolvedSchedule {
            minutes: policy.threshold_minutes(),
            source: ScheduleSource::PolicyDefault,
        },
    };

    tracing::debug!(
        employee_id,
        day_of_week,
        minutes = resolved.minutes,
        source = ?resolved.source,
        "resolved scheduled minutes"
    );
    resolved
}

/// Start/end of the working window for timeline drawing, with the same
/// employee → department precedence. `None` for a day off or when no row
/// carries both times.
pub fn scheduled_window(
    schedules: &[ScheduleDay],
    employee_id: &str,
    department_id: Option<&str>,
    day_of_week: u8,
) -> Option<(NaiveTime, NaiveTime)> {
    let usable = |row: &ScheduleDay| !row.is_day_off && row.times().is_some();

    let row = employee_row(schedules, employee_id, day_of_week)
        .filter(|r| r.is_day_off || usable(r))
        .or_else(|| department_row(schedules, department_id, day_of_week))?;

    if row.is_day_off { None } else { row.times() }
}
