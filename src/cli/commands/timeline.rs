use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::timeline::TimelineSettings;
use crate::core::logic::Core;
use crate::data::InputBundle;
use crate::errors::{AppError, AppResult};
use crate::models::DayTimeline;
use crate::utils::colors::{RESET, color_for_segment, color_for_status};
use crate::utils::date::{parse_date, weekday_name};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::path::expand_tilde;
use crate::utils::time::{format_minutes, parse_optional_time};
use chrono::{NaiveDate, NaiveDateTime};

/// Width of the ASCII band the timeline is drawn on.
const BAND_WIDTH: usize = 56;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Timeline {
        input,
        employee,
        date,
        start,
        end,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let bundle = InputBundle::load(&expand_tilde(input))?;
        let person = bundle.employee(employee)?;
        let settings = cfg.timeline_settings();

        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;
        // a side not given on the command line comes from the schedule rows
        let window = Core::window_for(&bundle.schedules, Some(person), employee, day, &settings)
            .with_overrides(start, end);

        let timeline = Core::build_day_timeline(
            &bundle.entries,
            employee,
            day,
            &window,
            &settings,
            now,
        );
        let name = format!("{} {}", person.first_name, person.last_name);
        print_timeline(&name, day, &timeline, &settings);
    }
    Ok(())
}

fn print_timeline(name: &str, day: NaiveDate, timeline: &DayTimeline, settings: &TimelineSettings) {
    let status = timeline.status;
    println!(
        "{} {} ({}) {}[{}]{}",
        bold(name),
        day,
        weekday_name(day),
        color_for_status(status),
        status.label(),
        RESET
    );
    println!(
        "Scheduled {}-{}  (window {:02}:00-{:02}:00)",
        format_minutes(timeline.indicator.start_minute),
        format_minutes(timeline.indicator.end_minute),
        settings.window.start_hour as i64,
        settings.window.end_hour as i64,
    );

    for seg in &timeline.segments {
        println!(
            "{}{}{} {} {}",
            color_for_segment(seg.kind),
            band(seg.start_percent, seg.width_percent),
            RESET,
            pad_right(seg.kind.as_str(), 12),
            seg.label
        );
    }
}

/// One band line: '#' over the segment, '.' elsewhere. Off-window parts are
/// clipped to the band.
fn band(start_percent: f64, width_percent: f64) -> String {
    let to_col = |p: f64| ((p.clamp(0.0, 100.0) / 100.0) * BAND_WIDTH as f64).round() as usize;
    let from = to_col(start_percent);
    let to = to_col(start_percent + width_percent)
        .max(from + 1)
        .min(BAND_WIDTH);

    (0..BAND_WIDTH)
        .map(|i| if i >= from && i < to { '#' } else { '.' })
        .collect()
}
