//! Rust types for submitted workflow definitions.
//!
//! These are the serde target for the definition JSON. Only the fields the
//! admission checks read are modelled; unknown keys are ignored.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// TOP-LEVEL DEFINITION
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: u32,
    /// Absent and `null` both mean "no tasks".
    #[serde(default)]
    pub tasks: Option<Vec<WorkflowTask>>,
}

fn default_version() -> u32 {
    1
}

impl WorkflowDef {
    pub fn new(name: impl Into<String>, tasks: Vec<WorkflowTask>) -> Self {
        WorkflowDef {
            name: name.into(),
            description: None,
            version: default_version(),
            tasks: Some(tasks),
        }
    }

    /// Every task in the definition, nested ones included, in declaration order.
    pub fn all_tasks(&self) -> Vec<&WorkflowTask> {
        let mut out = Vec::new();
        if let Some(tasks) = &self.tasks {
            for task in tasks {
                collect_tasks(task, &mut out);
            }
        }
        out
    }

    /// First task (in declaration order) with the given reference name,
    /// nested tasks included.
    pub fn task_by_ref_name(&self, reference: &str) -> Option<&WorkflowTask> {
        self.tasks
            .iter()
            .flatten()
            .find_map(|t| find_task(t, reference))
    }

    /// Reference name → first task declaring it, over every task in the definition.
    pub fn reference_index(&self) -> HashMap<&str, &WorkflowTask> {
        let tasks = self.all_tasks();
        let mut index = HashMap::with_capacity(tasks.len());
        for task in tasks {
            index.entry(task.task_reference_name.as_str()).or_insert(task);
        }
        index
    }
}

fn collect_tasks<'a>(task: &'a WorkflowTask, out: &mut Vec<&'a WorkflowTask>) {
    out.push(task);
    for child in task.children() {
        collect_tasks(child, out);
    }
}

fn find_task<'a>(task: &'a WorkflowTask, reference: &str) -> Option<&'a WorkflowTask> {
    if task.task_reference_name == reference {
        return Some(task);
    }
    task.children().find_map(|c| find_task(c, reference))
}

// =============================================================================
// TASK
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTask {
    /// Display name. Not required to be unique.
    pub name: String,
    pub task_reference_name: String,
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub input_parameters: Option<BTreeMap<String, Value>>,

    // Containers for nested tasks
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub decision_cases: BTreeMap<String, Vec<WorkflowTask>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_case: Vec<WorkflowTask>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fork_tasks: Vec<Vec<WorkflowTask>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loop_over: Vec<WorkflowTask>,
}

impl WorkflowTask {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        WorkflowTask {
            name: name.into(),
            task_reference_name: reference.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper for adding a single input parameter.
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input_parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Directly nested tasks: decision cases (by case key), default case,
    /// fork branches, then the loop body.
    pub fn children(&self) -> impl Iterator<Item = &WorkflowTask> {
        self.decision_cases
            .values()
            .flatten()
            .chain(self.default_case.iter())
            .chain(self.fork_tasks.iter().flatten())
            .chain(self.loop_over.iter())
    }
}
