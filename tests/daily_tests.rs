mod common;
use common::{date, dt, employee, entry, open_entry};
use timecard_engine::core::calculator::timeline::{ScheduledWindow, TimelineSettings};
use timecard_engine::core::daily::build_daily_entry;
use timecard_engine::core::logic::Core;
use timecard_engine::models::ScheduleDay;

#[test]
fn test_daily_entry_derives_clock_and_totals() {
    let settings = TimelineSettings::default();
    let entries = vec![
        entry("b", "e1", "2025-09-01 13:00", "2025-09-01 17:00"),
        entry("a", "e1", "2025-09-01 08:05", "2025-09-01 12:00"),
    ];
    let day = build_daily_entry(
        "e1",
        date("2025-09-01"),
        entries,
        &ScheduledWindow::fallback(&settings),
        &settings,
        dt("2025-09-01 20:00"),
    );

    assert_eq!(day.entries[0].id, "a");
    assert_eq!(day.clock_in, Some(dt("2025-09-01 08:05")));
    assert_eq!(day.clock_out, Some(dt("2025-09-01 17:00")));
    assert_eq!(day.total_minutes, 235 + 240);
    assert!(!day.is_late);
    assert!(!day.has_no_clock_out);
}

#[test]
fn test_daily_entries_grouped_per_person_and_day() {
    let settings = TimelineSettings::default();
    let entries = vec![
        entry("a", "e1", "2025-09-01 09:30", "2025-09-01 12:00"),
        open_entry("b", "e1", "2025-09-01 13:00"),
        entry("c", "e2", "2025-09-01 08:00", "2025-09-01 12:00"),
        entry("d", "e1", "2025-09-02 08:00", "2025-09-02 12:00"),
    ];
    let employees = vec![
        employee("e1", "Mario", "Rossi").in_department("d1"),
        employee("e2", "Anna", "Bianchi"),
    ];
    // department starts at 09:00 on Monday, so 09:30 is late
    let schedules = vec![ScheduleDay::for_department("d1", 1, "09:00", "18:00")];

    let now = dt("2025-09-01 15:00");
    let days = Core::build_daily_entries(&entries, &employees, &schedules, &settings, now);

    assert_eq!(days.len(), 3);
    let monday = &days[0];
    assert_eq!(
        (monday.employee_id.as_str(), monday.date),
        ("e1", date("2025-09-01"))
    );
    assert!(monday.is_late);
    assert!(monday.has_no_clock_out);
    assert_eq!(monday.clock_out, None);
    assert_eq!(monday.total_minutes, 150 + 120);

    let tuesday = &days[1];
    assert_eq!(tuesday.date, date("2025-09-02"));
    assert!(!tuesday.is_late);

    assert_eq!(days[2].employee_id, "e2");
}

#[test]
fn test_window_for_falls_back_to_classifier_default() {
    let settings = TimelineSettings::default();
    let w = Core::window_for(&[], None, "e1", date("2025-09-01"), &settings);
    assert_eq!(w, ScheduledWindow::fallback(&settings));
}
