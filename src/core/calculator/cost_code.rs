//! Task-type code lookup and dominant cost category selection.

use std::collections::HashMap;

use crate::models::{CategoryHours, CostCategory, TaskTypeCodeMap};

/// Substrings (on normalized names) that place a task type in a category.
/// Checked in category order; the first category that matches wins.
const CATEGORY_PATTERNS: [(CostCategory, &[&str]); 5] = [
    (CostCategory::MaterialHandling, &["materialhandling"]),
    (CostCategory::ProcessingCutting, &["processingcutting", "processing"]),
    (CostCategory::FabricationFitupWeld, &["fabrication", "fitup"]),
    (CostCategory::Finishes, &["finishes", "finish"]),
    (CostCategory::Other, &["other"]),
];

/// Lower-case and keep letters only: "Fit-Up / Weld" → "fitupweld".
pub fn normalize_task_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

pub fn category_for_name(normalized: &str) -> Option<CostCategory> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| normalized.contains(n)))
        .map(|(category, _)| *category)
}

/// Short code per cost category, derived from a company's task-type map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCodes {
    codes: HashMap<CostCategory, String>,
}

impl CategoryCodes {
    /// The first task type claiming a category keeps it; later ones are
    /// ignored. Unmatched names are skipped.
    pub fn from_map(map: &TaskTypeCodeMap) -> Self {
        let mut codes = HashMap::new();
        for task in &map.task_types {
            let Some(category) = category_for_name(&normalize_task_name(&task.name)) else {
                tracing::debug!(name = %task.name, "task type matches no cost category");
                continue;
            };
            codes.entry(category).or_insert_with(|| task.code.clone());
        }
        Self { codes }
    }

    pub fn code_for(&self, category: CostCategory) -> Option<&str> {
        self.codes.get(&category).map(String::as_str)
    }
}

/// Category with the largest positive value; ties go to the earlier
/// category. `None` when nothing is positive.
pub fn dominant_category(hours: &CategoryHours) -> Option<CostCategory> {
    let mut best: Option<(CostCategory, f64)> = None;
    for category in CostCategory::ALL {
        let value = hours.get(category);
        if value.is_nan() || value <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((category, value)),
        }
    }
    best.map(|(category, _)| category)
}

/// Code of the dominant category, or `fallback` (the entry's own task
/// activity code) when no category dominates or it has no mapped code.
/// Empty string when neither exists.
pub fn resolve_cost_code(
    hours: &CategoryHours,
    codes: &CategoryCodes,
    fallback: Option<&str>,
) -> String {
    dominant_category(hours)
        .and_then(|category| codes.code_for(category))
        .filter(|code| !code.is_empty())
        .or(fallback)
        .unwrap_or_default()
        .to_string()
}
