use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Late,
    Regular,
    Overtime,
    Break,
    NoActivity,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Late => "late",
            SegmentKind::Regular => "regular",
            SegmentKind::Overtime => "overtime",
            SegmentKind::Break => "break",
            SegmentKind::NoActivity => "no-activity",
        }
    }
}

/// A classified, positioned span of one day's timeline.
///
/// `start_minute`/`end_minute` count from the day's midnight and may exceed
/// 1440 for entries running past midnight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start_minute: i64,
    pub end_minute: i64,
    pub start_percent: f64,
    pub width_percent: f64,
    pub label: String,
}

impl Segment {
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }
}

/// Visual marker of the scheduled range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleIndicator {
    pub start_minute: i64,
    pub end_minute: i64,
    pub start_percent: f64,
    pub width_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    NoActivity,
    Active,
    Late,
    Complete,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NoActivity => "No Activity",
            DayStatus::Active => "Active",
            DayStatus::Late => "Late",
            DayStatus::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayTimeline {
    pub segments: Vec<Segment>,
    pub indicator: ScheduleIndicator,
    pub status: DayStatus,
}
