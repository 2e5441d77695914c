#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use timecard_engine::models::{Employee, TimeEntry};

pub fn timecard() -> Command {
    cargo_bin_cmd!("timecard")
}

/// "2025-09-01 07:00" → NaiveDateTime
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Closed entry for employee `who`.
pub fn entry(id: &str, who: &str, start: &str, end: &str) -> TimeEntry {
    TimeEntry::new(id, who, dt(start), Some(dt(end)))
}

pub fn open_entry(id: &str, who: &str, start: &str) -> TimeEntry {
    TimeEntry::new(id, who, dt(start), None)
}

pub fn break_entry(id: &str, who: &str, start: &str, end: &str) -> TimeEntry {
    let mut e = entry(id, who, start, end);
    e.is_break = true;
    e
}

pub fn employee(id: &str, first: &str, last: &str) -> Employee {
    Employee::new(id, first, last)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Unique path in the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a JSON input bundle and return its path.
pub fn write_bundle(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write bundle");
    p
}

/// Two people, one Monday (2025-09-01), schedule 08:00-17:00 for Rossi,
/// policy enabled. Rossi works 07:00-19:30, Bianchi 09:00-12:00.
pub const SAMPLE_BUNDLE: &str = r#"{
  "policy": { "enabled": true, "daily_threshold_hours": 8 },
  "employees": [
    { "id": "e1", "first_name": "Mario", "last_name": "Rossi", "employee_code": "R01" },
    { "id": "e2", "first_name": "Anna", "last_name": "Bianchi" }
  ],
  "projects": [ { "id": "p1", "name": "Bridge" } ],
  "schedules": [
    { "employee_id": "e1", "day_of_week": 1, "start_time": "08:00", "end_time": "17:00" }
  ],
  "entries": [
    { "id": "t1", "employee_id": "e1", "start": "2025-09-01T07:00:00", "end": "2025-09-01T19:30:00",
      "project_id": "p1", "task_activity_code": "FAB" },
    { "id": "t2", "employee_id": "e2", "start": "2025-09-01T09:00:00", "end": "2025-09-01T12:00:00" },
    { "id": "t3", "employee_id": "e2", "start": "2025-10-06T09:00:00", "end": "2025-10-06T10:00:00" }
  ]
}"#;
