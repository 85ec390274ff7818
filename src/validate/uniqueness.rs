//! R001: top-level task reference names are unique across the definition.

use std::collections::HashSet;

use tracing::debug;

use crate::error::Violation;
use crate::parse::types::WorkflowTask;

/// Flag every repeat occurrence of a reference name.
///
/// The first occurrence of a name is never flagged; each later one is, so
/// three tasks sharing a name yield two violations.
pub fn check_unique_reference_names(
    workflow_name: &str,
    tasks: &[WorkflowTask],
    violations: &mut Vec<Violation>,
) {
    let mut seen = HashSet::new();
    for task in tasks {
        let reference = task.task_reference_name.as_str();
        if !seen.insert(reference) {
            debug!(workflow = workflow_name, reference, "duplicate task reference name");
            violations.push(Violation::duplicate_reference_name(
                workflow_name,
                &task.name,
                reference,
            ));
        }
    }
}
