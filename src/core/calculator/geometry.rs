//! Mapping of wall-clock times onto the fixed display band, and minute
//! arithmetic between timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const DEFAULT_WINDOW_START_HOUR: f64 = 6.0;
pub const DEFAULT_WINDOW_END_HOUR: f64 = 20.0;

/// Visible hour band of a timeline (06:00–20:00 unless configured).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WINDOW_START_HOUR,
            end_hour: DEFAULT_WINDOW_END_HOUR,
        }
    }
}

/// Linear position of `hour` inside the window, in percent.
///
/// Not clamped: times outside the band give negative or >100 values and
/// render partially off the visible area. A degenerate window yields 0.
pub fn position_percent(hour: f64, window: DisplayWindow) -> f64 {
    let span = window.end_hour - window.start_hour;
    if span == 0.0 {
        return 0.0;
    }
    (hour - window.start_hour) / span * 100.0
}

/// Whole minutes from `a` to `b` (floored). An absent `b` means the entry
/// is still open and `now` is used instead.
pub fn minutes_between(a: NaiveDateTime, b: Option<NaiveDateTime>, now: NaiveDateTime) -> i64 {
    let end = b.unwrap_or(now);
    (end - a).num_seconds().div_euclid(60)
}

pub fn hour_fraction(ts: NaiveDateTime) -> f64 {
    ts.hour() as f64 + ts.minute() as f64 / 60.0
}

/// Minutes from the midnight opening `day`. Timestamps on later days keep
/// counting past 1440.
pub fn minute_of_day(day: NaiveDate, ts: NaiveDateTime) -> i64 {
    (ts - day.and_time(NaiveTime::MIN))
        .num_seconds()
        .div_euclid(60)
}
