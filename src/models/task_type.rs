use serde::{Deserialize, Serialize};

/// A named task type and its short payroll code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskType {
    pub name: String,
    pub code: String,
}

/// Company-scoped task-type → code list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTypeCodeMap {
    pub task_types: Vec<TaskType>,
}

impl TaskTypeCodeMap {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            task_types: pairs
                .iter()
                .map(|(name, code)| TaskType {
                    name: name.to_string(),
                    code: code.to_string(),
                })
                .collect(),
        }
    }
}
