use serde::{Deserialize, Serialize};

/// The five payroll cost categories, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    MaterialHandling,
    ProcessingCutting,
    FabricationFitupWeld,
    Finishes,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::MaterialHandling,
        CostCategory::ProcessingCutting,
        CostCategory::FabricationFitupWeld,
        CostCategory::Finishes,
        CostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::MaterialHandling => "material_handling",
            CostCategory::ProcessingCutting => "processing_cutting",
            CostCategory::FabricationFitupWeld => "fabrication_fitup_weld",
            CostCategory::Finishes => "finishes",
            CostCategory::Other => "other",
        }
    }
}

/// Hours per cost category. Fractional values are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryHours {
    #[serde(default)]
    pub material_handling: f64,
    #[serde(default)]
    pub processing_cutting: f64,
    #[serde(default)]
    pub fabrication_fitup_weld: f64,
    #[serde(default)]
    pub finishes: f64,
    #[serde(default)]
    pub other: f64,
}

impl CategoryHours {
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::MaterialHandling => self.material_handling,
            CostCategory::ProcessingCutting => self.processing_cutting,
            CostCategory::FabricationFitupWeld => self.fabrication_fitup_weld,
            CostCategory::Finishes => self.finishes,
            CostCategory::Other => self.other,
        }
    }

    pub fn set(&mut self, category: CostCategory, hours: f64) {
        let slot = match category {
            CostCategory::MaterialHandling => &mut self.material_handling,
            CostCategory::ProcessingCutting => &mut self.processing_cutting,
            CostCategory::FabricationFitupWeld => &mut self.fabrication_fitup_weld,
            CostCategory::Finishes => &mut self.finishes,
            CostCategory::Other => &mut self.other,
        };
        *slot = hours;
    }

    pub fn with(mut self, category: CostCategory, hours: f64) -> Self {
        self.set(category, hours);
        self
    }

    /// Sum of the five categories, ignoring non-finite values.
    pub fn total(&self) -> f64 {
        CostCategory::ALL
            .iter()
            .map(|c| self.get(*c))
            .filter(|v| v.is_finite())
            .sum()
    }
}

/// Multi-category split of one time entry, for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub time_entry_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(flatten)]
    pub hours: CategoryHours,
}
