use crate::core::calculator::geometry::{DisplayWindow, minute_of_day, position_percent};
use crate::models::{DayStatus, DayTimeline, ScheduleIndicator, Segment, SegmentKind, TimeEntry};
use crate::utils::formatting::mins2readable;
use crate::utils::time::{format_minutes, minutes_of_day, parse_time};
use chrono::{NaiveDateTime, NaiveTime};

pub const DEFAULT_LATE_GRACE_MINUTES: i64 = 10;
pub const DEFAULT_MIN_SEGMENT_WIDTH: f64 = 0.5;

/// Display and threshold knobs of the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSettings {
    pub window: DisplayWindow,
    /// Classifier fallback, independent of the schedule resolver.
    pub default_start: NaiveTime,
    pub default_end: NaiveTime,
    pub late_grace_minutes: i64,
    pub min_segment_width: f64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            window: DisplayWindow::default(),
            default_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            default_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            late_grace_minutes: DEFAULT_LATE_GRACE_MINUTES,
            min_segment_width: DEFAULT_MIN_SEGMENT_WIDTH,
        }
    }
}

/// Scheduled start/end of the day being drawn, as minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledWindow {
    pub start_minute: i64,
    pub end_minute: i64,
}

impl ScheduledWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start_minute: minutes_of_day(start),
            end_minute: minutes_of_day(end),
        }
    }

    /// "HH:MM" strings; each side falls back to the settings default when
    /// missing or unparsable.
    pub fn from_strs(start: Option<&str>, end: Option<&str>, settings: &TimelineSettings) -> Self {
        let start = start.and_then(parse_time).unwrap_or(settings.default_start);
        let end = end.and_then(parse_time).unwrap_or(settings.default_end);
        Self::new(start, end)
    }

    pub fn fallback(settings: &TimelineSettings) -> Self {
        Self::new(settings.default_start, settings.default_end)
    }

    /// Replace either side with an explicit time; a `None` side keeps the
    /// current value.
    pub fn with_overrides(self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self {
            start_minute: start.map(minutes_of_day).unwrap_or(self.start_minute),
            end_minute: end.map(minutes_of_day).unwrap_or(self.end_minute),
        }
    }
}

/// Late when the first punch is strictly more than the grace period after
/// the scheduled start.
pub fn is_late(
    clock_in_minute: i64,
    window: &ScheduledWindow,
    settings: &TimelineSettings,
) -> bool {
    clock_in_minute > window.start_minute + settings.late_grace_minutes
}

/// Classify one person's day into display segments.
pub fn classify_day(
    entries: &[TimeEntry],
    window: &ScheduledWindow,
    settings: &TimelineSettings,
    now: NaiveDateTime,
) -> DayTimeline {
    let mut ordered: Vec<&TimeEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.start);

    DayTimeline {
        segments: build_segments(&ordered, window, settings, now),
        indicator: schedule_indicator(window, settings),
        status: status_of(&ordered, window, settings),
    }
}

/// Status badge for the day, using the same lateness rule as the segments.
pub fn day_status(
    entries: &[TimeEntry],
    window: &ScheduledWindow,
    settings: &TimelineSettings,
) -> DayStatus {
    let mut ordered: Vec<&TimeEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.start);
    status_of(&ordered, window, settings)
}

fn status_of(
    ordered: &[&TimeEntry],
    window: &ScheduledWindow,
    settings: &TimelineSettings,
) -> DayStatus {
    let Some(first) = ordered.first() else {
        return DayStatus::NoActivity;
    };
    let clock_out = ordered.last().and_then(|e| e.end);
    if clock_out.is_none() {
        return DayStatus::Active;
    }
    let clock_in = minute_of_day(first.work_date(), first.start);
    if is_late(clock_in, window, settings) {
        DayStatus::Late
    } else {
        DayStatus::Complete
    }
}

fn build_segments(
    ordered: &[&TimeEntry],
    window: &ScheduledWindow,
    settings: &TimelineSettings,
    now: NaiveDateTime,
) -> Vec<Segment> {
    let Some(first) = ordered.first() else {
        return vec![segment(
            SegmentKind::NoActivity,
            window.start_minute,
            window.end_minute,
            settings,
        )];
    };

    let day = first.work_date();
    let mut segments = Vec::new();

    let clock_in = minute_of_day(day, first.start);
    if is_late(clock_in, window, settings) {
        segments.push(segment(SegmentKind::Late, window.start_minute, clock_in, settings));
    }

    for entry in ordered {
        let start = minute_of_day(day, entry.start);
        // an end before the start collapses to an empty span
        let end = minute_of_day(day, entry.effective_end(now)).max(start);

        if entry.is_break {
            segments.push(segment(SegmentKind::Break, start, end, settings));
        } else if start >= window.end_minute {
            segments.push(segment(SegmentKind::Overtime, start, end, settings));
        } else if end > window.end_minute {
            segments.push(segment(SegmentKind::Regular, start, window.end_minute, settings));
            segments.push(segment(SegmentKind::Overtime, window.end_minute, end, settings));
        } else {
            segments.push(segment(SegmentKind::Regular, start, end, settings));
        }
    }

    segments
}

fn schedule_indicator(window: &ScheduledWindow, settings: &TimelineSettings) -> ScheduleIndicator {
    let (start_percent, width_percent) =
        placement(window.start_minute, window.end_minute, settings);
    ScheduleIndicator {
        start_minute: window.start_minute,
        end_minute: window.end_minute,
        start_percent,
        width_percent,
    }
}

fn segment(
    kind: SegmentKind,
    start_minute: i64,
    end_minute: i64,
    settings: &TimelineSettings,
) -> Segment {
    let (start_percent, width_percent) = placement(start_minute, end_minute, settings);
    Segment {
        kind,
        start_minute,
        end_minute,
        start_percent,
        width_percent,
        label: label_for(kind, start_minute, end_minute),
    }
}

/// Start offset and display width. Width is floored so empty spans stay
/// visible as a sliver.
fn placement(start_minute: i64, end_minute: i64, settings: &TimelineSettings) -> (f64, f64) {
    let start = position_percent(start_minute as f64 / 60.0, settings.window);
    let end = position_percent(end_minute as f64 / 60.0, settings.window);
    (start, (end - start).max(settings.min_segment_width))
}

fn label_for(kind: SegmentKind, start_minute: i64, end_minute: i64) -> String {
    let span = format!(
        "{}-{}",
        format_minutes(start_minute),
        format_minutes(end_minute)
    );
    let duration = mins2readable(end_minute - start_minute);
    match kind {
        SegmentKind::Late => format!("Late by {duration} ({span})"),
        SegmentKind::Regular => format!("Regular {span} ({duration})"),
        SegmentKind::Overtime => format!("Overtime {span} ({duration})"),
        SegmentKind::Break => format!("Break {span} ({duration})"),
        SegmentKind::NoActivity => format!("No activity {span}"),
    }
}
