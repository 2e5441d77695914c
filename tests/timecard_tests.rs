mod common;
use common::{assert_close, date, dt, employee, entry};
use timecard_engine::core::calculator::rows::{TimecardInputs, assemble_rows, summarize_rows};
use timecard_engine::models::{
    Allocation, CategoryHours, CostCategory, Employee, HoursType, OutputRow, OvertimePolicy,
    Project, ScheduleDay, TaskTypeCodeMap, TimeEntry,
};

struct Fixture {
    entries: Vec<TimeEntry>,
    employees: Vec<Employee>,
    projects: Vec<Project>,
    schedules: Vec<ScheduleDay>,
    policy: OvertimePolicy,
    allocations: Vec<Allocation>,
    task_types: TaskTypeCodeMap,
}

impl Fixture {
    fn new(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries,
            employees: vec![
                employee("e1", "Mario", "Rossi"),
                employee("e2", "Anna", "Bianchi"),
            ],
            projects: vec![
                Project {
                    id: "p1".into(),
                    name: "Bridge".into(),
                },
                Project {
                    id: "p2".into(),
                    name: "Tower".into(),
                },
            ],
            // Monday 08:00-17:00 for e1
            schedules: vec![ScheduleDay::for_employee("e1", 1, "08:00", "17:00")],
            policy: OvertimePolicy::enabled(8.0),
            allocations: Vec::new(),
            task_types: TaskTypeCodeMap::new(&[
                ("Material Handling", "MH"),
                ("Processing", "PC"),
                ("Fabrication", "FAB"),
                ("Finishes", "FIN"),
                ("Other", "OTH"),
            ]),
        }
    }

    fn rows(&self) -> Vec<OutputRow> {
        assemble_rows(&TimecardInputs {
            entries: &self.entries,
            employees: &self.employees,
            projects: &self.projects,
            schedules: &self.schedules,
            policy: &self.policy,
            allocations: &self.allocations,
            task_types: &self.task_types,
            now: dt("2025-09-02 00:00"),
        })
    }
}

fn hours_of(rows: &[OutputRow], who: &str, kind: HoursType) -> f64 {
    rows.iter()
        .filter(|r| r.employee_id == who && r.hours_type == kind)
        .map(|r| r.hours)
        .sum()
}

#[test]
fn test_legacy_entry_uses_task_activity_code_and_project() {
    let mut e = entry("t1", "e1", "2025-09-01 07:00", "2025-09-01 19:30");
    e.project_id = Some("p1".into());
    e.task_activity_code = Some("TA9".into());
    e.injured = true;
    let rows = Fixture::new(vec![e]).rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].hours_type, HoursType::Regular);
    assert_close(rows[0].hours, 9.0);
    assert_eq!(rows[1].hours_type, HoursType::Overtime);
    assert_close(rows[1].hours, 3.5);
    for r in &rows {
        assert_eq!(r.cost_code, "TA9");
        assert_eq!(r.project_name, "Bridge");
        assert_eq!(r.categories, CategoryHours::default());
        assert_eq!(r.date, date("2025-09-01"));
        assert!(r.injured);
    }
}

#[test]
fn test_two_entries_regular_and_overtime_totals() {
    let rows = Fixture::new(vec![
        entry("t1", "e1", "2025-09-01 07:50", "2025-09-01 12:00"),
        entry("t2", "e1", "2025-09-01 13:00", "2025-09-01 18:00"),
    ])
    .rows();

    assert_eq!(rows.len(), 4);
    assert_close(hours_of(&rows, "e1", HoursType::Regular), 9.0);
    assert_close(hours_of(&rows, "e1", HoursType::Overtime), 10.0 / 60.0);
}

#[test]
fn test_allocations_produce_one_unit_each_with_dominant_code() {
    let t1 = entry("t1", "e1", "2025-09-01 07:00", "2025-09-01 17:00");
    let mut fx = Fixture::new(vec![t1]);
    fx.allocations = vec![
        Allocation {
            time_entry_id: "t1".into(),
            project_id: Some("p1".into()),
            hours: CategoryHours::default()
                .with(CostCategory::FabricationFitupWeld, 5.0)
                .with(CostCategory::Finishes, 1.0),
        },
        Allocation {
            time_entry_id: "t1".into(),
            project_id: Some("p2".into()),
            hours: CategoryHours::default().with(CostCategory::MaterialHandling, 4.0),
        },
    ];
    let rows = fx.rows();

    // 600 worked vs 540 scheduled: each allocation split in two
    assert_eq!(rows.len(), 4);
    let bridge: Vec<&OutputRow> = rows.iter().filter(|r| r.project_name == "Bridge").collect();
    let tower: Vec<&OutputRow> = rows.iter().filter(|r| r.project_name == "Tower").collect();
    assert!(bridge.iter().all(|r| r.cost_code == "FAB"));
    assert!(tower.iter().all(|r| r.cost_code == "MH"));
    assert_eq!(bridge[0].categories.fabrication_fitup_weld, 5.0);

    let bridge_hours: f64 = bridge.iter().map(|r| r.hours).sum();
    assert_close(bridge_hours, 6.0);
    assert_close(hours_of(&rows, "e1", HoursType::Regular), 9.0);
    assert_close(hours_of(&rows, "e1", HoursType::Overtime), 1.0);
}

#[test]
fn test_zero_allocation_falls_back_to_entry_minutes_and_code() {
    let mut e = entry("t1", "e1", "2025-09-01 08:00", "2025-09-01 12:00");
    e.task_activity_code = Some("TA1".into());
    e.project_id = Some("p2".into());
    let mut fx = Fixture::new(vec![e]);
    fx.allocations = vec![Allocation {
        time_entry_id: "t1".into(),
        project_id: None,
        hours: CategoryHours::default(),
    }];
    let rows = fx.rows();

    assert_eq!(rows.len(), 1);
    assert_close(rows[0].hours, 4.0);
    assert_eq!(rows[0].cost_code, "TA1");
    assert_eq!(rows[0].project_name, "Tower");
}

#[test]
fn test_policy_off_never_emits_overtime() {
    let mut fx = Fixture::new(vec![
        entry("t1", "e1", "2025-09-01 06:00", "2025-09-01 20:00"),
        entry("t2", "e2", "2025-09-01 06:00", "2025-09-01 20:00"),
    ]);
    fx.policy = OvertimePolicy::default();
    let rows = fx.rows();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.hours_type == HoursType::Regular));
    assert_close(rows[0].hours, 14.0);
}

#[test]
fn test_day_off_schedule_posts_regular_only() {
    let t1 = entry("t1", "e1", "2025-09-01 07:00", "2025-09-01 19:00");
    let mut fx = Fixture::new(vec![t1]);
    let day_off = ScheduleDay::for_employee("e1", 1, "08:00", "17:00").day_off();
    fx.schedules = vec![day_off];
    let rows = fx.rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hours_type, HoursType::Regular);
    assert_close(rows[0].hours, 12.0);
}

#[test]
fn test_policy_threshold_applies_without_schedule() {
    // e2 has no schedule rows: 8h threshold
    let t1 = entry("t1", "e2", "2025-09-01 08:00", "2025-09-01 18:00");
    let rows = Fixture::new(vec![t1]).rows();
    assert_close(hours_of(&rows, "e2", HoursType::Regular), 8.0);
    assert_close(hours_of(&rows, "e2", HoursType::Overtime), 2.0);
}

#[test]
fn test_days_are_split_independently() {
    let rows = Fixture::new(vec![
        entry("t1", "e2", "2025-09-01 08:00", "2025-09-01 17:00"),
        entry("t2", "e2", "2025-09-02 08:00", "2025-09-02 14:00"),
    ])
    .rows();

    // 9h on Monday → 1h overtime; 6h on Tuesday → none
    assert_close(hours_of(&rows, "e2", HoursType::Overtime), 1.0);
    assert_close(hours_of(&rows, "e2", HoursType::Regular), 14.0);
}

#[test]
fn test_rows_sorted_by_name_then_regular_before_overtime() {
    let rows = Fixture::new(vec![
        entry("t1", "e1", "2025-09-01 07:00", "2025-09-01 19:30"),
        entry("t2", "e2", "2025-09-01 07:00", "2025-09-01 19:00"),
    ])
    .rows();

    let order: Vec<(&str, HoursType)> = rows
        .iter()
        .map(|r| (r.last_name.as_str(), r.hours_type))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Bianchi", HoursType::Regular),
            ("Bianchi", HoursType::Overtime),
            ("Rossi", HoursType::Regular),
            ("Rossi", HoursType::Overtime),
        ]
    );
}

#[test]
fn test_unknown_employee_rows_are_kept_with_blank_names() {
    let t1 = entry("t1", "ghost", "2025-09-01 08:00", "2025-09-01 10:00");
    let rows = Fixture::new(vec![t1]).rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].last_name, "");
    assert_close(rows[0].hours, 2.0);
}

#[test]
fn test_summarize_rows_totals_per_person() {
    let rows = Fixture::new(vec![
        entry("t1", "e1", "2025-09-01 07:00", "2025-09-01 19:30"),
        entry("t2", "e2", "2025-09-01 09:00", "2025-09-01 12:00"),
    ])
    .rows();
    let totals = summarize_rows(&rows);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].last_name, "Bianchi");
    assert_close(totals[0].total_hours(), 3.0);
    assert_close(totals[1].regular_hours, 9.0);
    assert_close(totals[1].overtime_hours, 3.5);
}
