mod common;
use common::{assert_close, dt, entry, open_entry};
use timecard_engine::core::calculator::overtime::{DailyOvertime, HoursPortion, total_daily_minutes};
use timecard_engine::models::{HoursType, OvertimePolicy};

fn sum_of(portions: &[HoursPortion], kind: HoursType) -> f64 {
    portions
        .iter()
        .filter(|p| p.hours_type == kind)
        .map(|p| p.hours)
        .sum()
}

#[test]
fn test_single_long_entry_splits_at_schedule() {
    // 07:00-19:30 against a 540 minute schedule
    let entries = [entry("a", "e1", "2025-09-01 07:00", "2025-09-01 19:30")];
    let now = dt("2025-09-01 21:00");
    let total = total_daily_minutes(&entries, now);
    assert_eq!(total, 750);

    let day = DailyOvertime::new(total, 540, &OvertimePolicy::enabled(8.0));
    let portions = day.split(750.0);

    assert_eq!(portions.len(), 2);
    assert_eq!(portions[0].hours_type, HoursType::Regular);
    assert_close(portions[0].hours, 9.0);
    assert_eq!(portions[1].hours_type, HoursType::Overtime);
    assert_close(portions[1].hours, 3.5);
}

#[test]
fn test_two_entries_share_overtime_proportionally() {
    let entries = [
        entry("a", "e1", "2025-09-01 07:50", "2025-09-01 12:00"),
        entry("b", "e1", "2025-09-01 13:00", "2025-09-01 18:00"),
    ];
    let now = dt("2025-09-01 21:00");
    let total = total_daily_minutes(&entries, now);
    assert_eq!(total, 550);

    let day = DailyOvertime::new(total, 540, &OvertimePolicy::enabled(8.0));
    let first = day.split(250.0);
    let second = day.split(300.0);

    assert_close(
        sum_of(&first, HoursType::Regular) * 60.0,
        540.0 * 250.0 / 550.0,
    );
    assert_close(
        sum_of(&first, HoursType::Overtime) * 60.0,
        10.0 * 250.0 / 550.0,
    );

    let all: Vec<HoursPortion> = first.into_iter().chain(second).collect();
    assert_close(sum_of(&all, HoursType::Regular), 9.0);
    assert_close(sum_of(&all, HoursType::Overtime), 10.0 / 60.0);
}

#[test]
fn test_minutes_are_conserved_across_units() {
    let units = [37.0, 121.0, 290.0, 15.0, 200.0];
    let total: f64 = units.iter().sum();
    for scheduled in [0_i64, 60, 300, 480, 663, 700] {
        let day = DailyOvertime::new(total as i64, scheduled, &OvertimePolicy::enabled(8.0));
        let hours: f64 = units
            .iter()
            .flat_map(|u| day.split(*u))
            .map(|p| p.hours)
            .sum();
        assert_close(hours, total / 60.0);
    }
}

#[test]
fn test_policy_off_emits_one_regular_row_per_unit() {
    let day = DailyOvertime::new(900, 480, &OvertimePolicy::default());
    for unit in [0.0, 100.0, 800.0] {
        let portions = day.split(unit);
        assert_eq!(portions.len(), 1);
        assert_eq!(portions[0].hours_type, HoursType::Regular);
        assert_close(portions[0].hours, unit / 60.0);
    }
}

#[test]
fn test_day_off_posts_everything_as_regular() {
    let day = DailyOvertime::new(600, 0, &OvertimePolicy::enabled(8.0));
    assert!(!day.splits());
    let portions = day.split(600.0);
    assert_eq!(portions.len(), 1);
    assert_eq!(portions[0].hours_type, HoursType::Regular);
    assert_close(portions[0].hours, 10.0);
}

#[test]
fn test_day_within_schedule_has_no_overtime() {
    let day = DailyOvertime::new(540, 540, &OvertimePolicy::enabled(8.0));
    assert!(!day.splits());
    assert_eq!(day.split(540.0).len(), 1);
}

#[test]
fn test_stored_duration_and_open_entries_in_total() {
    let mut stored = entry("a", "e1", "2025-09-01 08:00", "2025-09-01 12:00");
    stored.duration_minutes = Some(200);
    let open = open_entry("b", "e1", "2025-09-01 13:00");

    let total = total_daily_minutes(&[stored, open], dt("2025-09-01 14:30"));
    assert_eq!(total, 200 + 90);
}
