//! Assembly of printable timecard rows from entries and allocations.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::core::calculator::cost_code::{CategoryCodes, resolve_cost_code};
use crate::core::calculator::overtime::{DailyOvertime, total_daily_minutes};
use crate::core::calculator::schedule::resolve_scheduled_minutes;
use crate::models::{
    Allocation, CategoryHours, Employee, HoursType, OutputRow, OvertimePolicy, Project, ScheduleDay,
    TaskTypeCodeMap, TimeEntry,
};
use crate::utils::date::day_of_week;

/// Everything one timecard run reads. All joins are already resolved by
/// the caller; the assembler only looks rows up in these slices.
#[derive(Debug, Clone, Copy)]
pub struct TimecardInputs<'a> {
    pub entries: &'a [TimeEntry],
    pub employees: &'a [Employee],
    pub projects: &'a [Project],
    pub schedules: &'a [ScheduleDay],
    pub policy: &'a OvertimePolicy,
    pub allocations: &'a [Allocation],
    pub task_types: &'a TaskTypeCodeMap,
    pub now: NaiveDateTime,
}

/// A contributing unit of a day: a whole entry or one of its allocations.
struct Unit<'a> {
    minutes: f64,
    categories: CategoryHours,
    cost_code: String,
    project_id: Option<&'a str>,
}

struct Lookup<'a> {
    employees: HashMap<&'a str, &'a Employee>,
    projects: HashMap<&'a str, &'a str>,
    allocations: HashMap<&'a str, Vec<&'a Allocation>>,
    codes: CategoryCodes,
}

impl<'a> Lookup<'a> {
    fn new(inputs: &TimecardInputs<'a>) -> Self {
        let employees = inputs
            .employees
            .iter()
            .map(|e| (e.id.as_str(), e))
            .collect();
        let projects = inputs
            .projects
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect();

        let mut allocations: HashMap<&str, Vec<&Allocation>> = HashMap::new();
        for alloc in inputs.allocations {
            allocations
                .entry(alloc.time_entry_id.as_str())
                .or_default()
                .push(alloc);
        }

        Self {
            employees,
            projects,
            allocations,
            codes: CategoryCodes::from_map(inputs.task_types),
        }
    }

    fn project_name(&self, project_id: Option<&str>) -> String {
        project_id
            .and_then(|id| self.projects.get(id))
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

/// Units for one entry: one per allocation, or the whole entry when it has
/// none (legacy single-category path).
fn units_for<'a>(entry: &'a TimeEntry, lookup: &Lookup<'a>, now: NaiveDateTime) -> Vec<Unit<'a>> {
    let entry_minutes = entry.worked_minutes(now) as f64;
    let fallback_code = entry.task_activity_code.as_deref();

    match lookup.allocations.get(entry.id.as_str()) {
        Some(allocs) if !allocs.is_empty() => allocs
            .iter()
            .copied()
            .map(|alloc| {
                let allocated = alloc.hours.total() * 60.0;
                Unit {
                    minutes: if allocated > 0.0 {
                        allocated
                    } else {
                        entry_minutes
                    },
                    categories: alloc.hours,
                    cost_code: resolve_cost_code(&alloc.hours, &lookup.codes, fallback_code),
                    project_id: alloc.project_id.as_deref().or(entry.project_id.as_deref()),
                }
            })
            .collect(),
        _ => vec![Unit {
            minutes: entry_minutes,
            categories: CategoryHours::default(),
            cost_code: fallback_code.unwrap_or_default().to_string(),
            project_id: entry.project_id.as_deref(),
        }],
    }
}

/// Build the sorted output rows for every person/day in `inputs`.
pub fn assemble_rows(inputs: &TimecardInputs) -> Vec<OutputRow> {
    let lookup = Lookup::new(inputs);

    // person/day groups, deterministic order
    let mut days: BTreeMap<(&str, NaiveDate), Vec<&TimeEntry>> = BTreeMap::new();
    for entry in inputs.entries {
        days.entry((entry.employee_id.as_str(), entry.work_date()))
            .or_default()
            .push(entry);
    }

    let mut rows = Vec::new();

    for ((employee_id, date), mut entries) in days {
        entries.sort_by_key(|e| e.start);

        let employee = lookup.employees.get(employee_id).copied();
        if employee.is_none() {
            tracing::warn!(employee_id, "time entries for an unknown employee");
        }
        let department_id = employee.and_then(|e| e.department_id.as_deref());

        let scheduled = resolve_scheduled_minutes(
            inputs.schedules,
            employee_id,
            department_id,
            day_of_week(date),
            inputs.policy,
        );
        let total = total_daily_minutes(entries.iter().copied(), inputs.now);
        let day = DailyOvertime::new(total, scheduled.minutes, inputs.policy);

        for entry in entries {
            for unit in units_for(entry, &lookup, inputs.now) {
                for portion in day.split(unit.minutes) {
                    rows.push(OutputRow {
                        employee_id: employee_id.to_string(),
                        employee_code: employee
                            .and_then(|e| e.employee_code.clone())
                            .unwrap_or_default(),
                        first_name: employee.map(|e| e.first_name.clone()).unwrap_or_default(),
                        last_name: employee.map(|e| e.last_name.clone()).unwrap_or_default(),
                        date,
                        time_entry_id: entry.id.clone(),
                        project_name: lookup.project_name(unit.project_id),
                        cost_code: unit.cost_code.clone(),
                        categories: unit.categories,
                        hours_type: portion.hours_type,
                        hours: portion.hours,
                        injured: entry.injured,
                    });
                }
            }
        }
    }

    sort_rows(&mut rows);
    rows
}

/// Stable: last name, first name, then Regular before Overtime. Rows that
/// compare equal keep their date/entry order.
pub fn sort_rows(rows: &mut [OutputRow]) {
    rows.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.hours_type.cmp(&b.hours_type))
    });
}

/// Per person hour totals for a timecard footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeTotals {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

impl EmployeeTotals {
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours
    }
}

/// Totals in first-appearance order of `rows`.
pub fn summarize_rows(rows: &[OutputRow]) -> Vec<EmployeeTotals> {
    let mut totals: Vec<EmployeeTotals> = Vec::new();
    for row in rows {
        let idx = match totals.iter().position(|t| t.employee_id == row.employee_id) {
            Some(idx) => idx,
            None => {
                totals.push(EmployeeTotals {
                    employee_id: row.employee_id.clone(),
                    first_name: row.first_name.clone(),
                    last_name: row.last_name.clone(),
                    regular_hours: 0.0,
                    overtime_hours: 0.0,
                });
                totals.len() - 1
            }
        };
        match row.hours_type {
            HoursType::Regular => totals[idx].regular_hours += row.hours,
            HoursType::Overtime => totals[idx].overtime_hours += row.hours,
        }
    }
    totals
}
