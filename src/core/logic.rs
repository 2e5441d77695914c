use crate::core::calculator::rows::{self, EmployeeTotals, TimecardInputs};
use crate::core::calculator::schedule::scheduled_window;
use crate::core::calculator::timeline::{self, ScheduledWindow, TimelineSettings};
use crate::core::daily;
use crate::models::{DailyTimeEntry, DayTimeline, Employee, OutputRow, ScheduleDay, TimeEntry};
use crate::utils::date::day_of_week;
use chrono::{NaiveDate, NaiveDateTime};

/// Entry points tying the calculators together.
pub struct Core;

impl Core {
    pub fn build_timecard(inputs: &TimecardInputs) -> (Vec<OutputRow>, Vec<EmployeeTotals>) {
        let rows = rows::assemble_rows(inputs);
        let totals = rows::summarize_rows(&rows);
        (rows, totals)
    }

    /// Classifier window for a person/day: employee or department schedule
    /// row when one carries times, otherwise the classifier's own default.
    pub fn window_for(
        schedules: &[ScheduleDay],
        employee: Option<&Employee>,
        employee_id: &str,
        date: NaiveDate,
        settings: &TimelineSettings,
    ) -> ScheduledWindow {
        let department_id = employee.and_then(|e| e.department_id.as_deref());
        match scheduled_window(schedules, employee_id, department_id, day_of_week(date)) {
            Some((start, end)) => ScheduledWindow::new(start, end),
            None => ScheduledWindow::fallback(settings),
        }
    }

    /// Timeline of `employee_id` on `date`, from all entries given.
    pub fn build_day_timeline(
        entries: &[TimeEntry],
        employee_id: &str,
        date: NaiveDate,
        window: &ScheduledWindow,
        settings: &TimelineSettings,
        now: NaiveDateTime,
    ) -> DayTimeline {
        let day: Vec<TimeEntry> = entries
            .iter()
            .filter(|e| e.employee_id == employee_id && e.work_date() == date)
            .cloned()
            .collect();
        timeline::classify_day(&day, window, settings, now)
    }

    pub fn build_daily_entries(
        entries: &[TimeEntry],
        employees: &[Employee],
        schedules: &[ScheduleDay],
        settings: &TimelineSettings,
        now: NaiveDateTime,
    ) -> Vec<DailyTimeEntry> {
        daily::build_daily_entries(entries, settings, now, |employee_id, date| {
            let employee = employees.iter().find(|e| e.id == employee_id);
            Self::window_for(schedules, employee, employee_id, date, settings)
        })
    }
}
