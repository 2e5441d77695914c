//! JSON input bundle: the already-fetched rows one engine run reads.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::calculator::rows::TimecardInputs;
use crate::data::period::Period;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Allocation, Employee, OvertimePolicy, Project, ScheduleDay, TaskTypeCodeMap, TimeEntry,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputBundle {
    #[serde(default)]
    pub policy: Option<OvertimePolicy>,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default)]
    pub schedules: Vec<ScheduleDay>,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    #[serde(default)]
    pub task_types: TaskTypeCodeMap,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl InputBundle {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut bundle: InputBundle = serde_json::from_str(&content)?;

        let before = bundle.entries.len();
        bundle.entries.retain(|e| match e.end {
            Some(end) if end < e.start => {
                tracing::warn!(entry = %e.id, "dropping entry that ends before it starts");
                false
            }
            _ => true,
        });
        tracing::debug!(
            path = %path.display(),
            entries = bundle.entries.len(),
            dropped = before - bundle.entries.len(),
            "input bundle loaded"
        );

        Ok(bundle)
    }

    /// Keep only entries starting inside `period`, and the allocations
    /// that belong to them.
    pub fn restrict_to(&mut self, period: &Period) {
        self.entries.retain(|e| period.contains(e.work_date()));
        let entries = &self.entries;
        self.allocations.retain(|a| entries.iter().any(|e| e.id == a.time_entry_id));
    }

    /// The bundle's policy, or a disabled one carrying `default_threshold_hours`.
    pub fn policy_or(&self, default_threshold_hours: f64) -> OvertimePolicy {
        self.policy.clone().unwrap_or(OvertimePolicy {
            enabled: false,
            daily_threshold_hours: default_threshold_hours,
        })
    }

    pub fn employee(&self, id: &str) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::UnknownEmployee(id.to_string()))
    }

    pub fn inputs<'a>(
        &'a self,
        policy: &'a OvertimePolicy,
        now: NaiveDateTime,
    ) -> TimecardInputs<'a> {
        TimecardInputs {
            entries: &self.entries,
            employees: &self.employees,
            projects: &self.projects,
            schedules: &self.schedules,
            policy,
            allocations: &self.allocations,
            task_types: &self.task_types,
            now,
        }
    }
}
