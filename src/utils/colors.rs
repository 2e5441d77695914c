/// ANSI color helper utilities for terminal output.
use crate::models::{DayStatus, SegmentKind};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_segment(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Late => RED,
        SegmentKind::Regular => GREEN,
        SegmentKind::Overtime => MAGENTA,
        SegmentKind::Break => YELLOW,
        SegmentKind::NoActivity => GREY,
    }
}

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::NoActivity => GREY,
        DayStatus::Active => CYAN,
        DayStatus::Late => RED,
        DayStatus::Complete => BLUE,
    }
}

/// Overtime hours: >0 → magenta, otherwise reset.
pub fn color_for_overtime(hours: f64) -> &'static str {
    if hours > 0.0 { MAGENTA } else { RESET }
}
