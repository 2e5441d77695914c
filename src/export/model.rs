// src/export/model.rs

use serde::Serialize;

use crate::models::OutputRow;

/// Flat timecard line for CSV/JSON export; hours rounded to 2 decimals.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowExport {
    pub employee_code: String,
    pub last_name: String,
    pub first_name: String,
    pub date: String,
    pub project: String,
    pub cost_code: String,
    pub material_handling: f64,
    pub processing_cutting: f64,
    pub fabrication_fitup_weld: f64,
    pub finishes: f64,
    pub other: f64,
    pub hours_type: String,
    pub hours: f64,
    pub injured: bool,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl From<&OutputRow> for RowExport {
    fn from(r: &OutputRow) -> Self {
        Self {
            employee_code: r.employee_code.clone(),
            last_name: r.last_name.clone(),
            first_name: r.first_name.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            project: r.project_name.clone(),
            cost_code: r.cost_code.clone(),
            material_handling: round2(r.categories.material_handling),
            processing_cutting: round2(r.categories.processing_cutting),
            fabrication_fitup_weld: round2(r.categories.fabrication_fitup_weld),
            finishes: round2(r.categories.finishes),
            other: round2(r.categories.other),
            hours_type: r.hours_type.as_str().to_string(),
            hours: round2(r.hours),
            injured: r.injured,
        }
    }
}

pub(crate) fn rows_to_export(rows: &[OutputRow]) -> Vec<RowExport> {
    rows.iter().map(RowExport::from).collect()
}
