//! Grouping of raw entries into per person, per day records.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::calculator::geometry::minute_of_day;
use crate::core::calculator::timeline::{ScheduledWindow, TimelineSettings, is_late};
use crate::models::{DailyTimeEntry, TimeEntry};

/// Derive the daily record for one person's entries of `date`.
/// Entries are ordered by start before anything is derived.
pub fn build_daily_entry(
    employee_id: &str,
    date: NaiveDate,
    mut entries: Vec<TimeEntry>,
    window: &ScheduledWindow,
    settings: &TimelineSettings,
    now: NaiveDateTime,
) -> DailyTimeEntry {
    entries.sort_by_key(|e| e.start);

    let clock_in = entries.first().map(|e| e.start);
    let clock_out = entries.last().and_then(|e| e.end);
    let total_minutes = entries.iter().map(|e| e.worked_minutes(now)).sum();
    let has_no_clock_out = entries.iter().any(TimeEntry::is_active);
    let is_late = clock_in
        .map(|ts| is_late(minute_of_day(date, ts), window, settings))
        .unwrap_or(false);

    DailyTimeEntry {
        employee_id: employee_id.to_string(),
        date,
        entries,
        clock_in,
        clock_out,
        total_minutes,
        is_late,
        has_no_clock_out,
    }
}

/// Group `entries` by (employee, start date). `window_for` supplies the
/// scheduled window used for lateness of each person/day.
pub fn build_daily_entries<F>(
    entries: &[TimeEntry],
    settings: &TimelineSettings,
    now: NaiveDateTime,
    window_for: F,
) -> Vec<DailyTimeEntry>
where
    F: Fn(&str, NaiveDate) -> ScheduledWindow,
{
    let mut groups: BTreeMap<(String, NaiveDate), Vec<TimeEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry((entry.employee_id.clone(), entry.work_date()))
            .or_default()
            .push(entry.clone());
    }

    groups
        .into_iter()
        .map(|((employee_id, date), day_entries)| {
            let window = window_for(&employee_id, date);
            build_daily_entry(&employee_id, date, day_entries, &window, settings, now)
        })
        .collect()
}
