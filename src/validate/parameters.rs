//! R002: input parameter references resolve to the workflow scope or to a
//! task declared in the same definition.

use tracing::debug;

use crate::error::Violation;
use crate::parse::reference::{ParamPathExtractor, ParamSource, string_leaves};
use crate::parse::types::WorkflowDef;

/// Check the input parameters of every top-level task against the reference
/// names declared anywhere in the definition.
///
/// Structured values are walked and every string inside them is checked.
/// Only existence is checked. A reference to a task declared later in the
/// definition is accepted.
pub fn check_parameter_sources(
    workflow: &WorkflowDef,
    extractor: &dyn ParamPathExtractor,
    violations: &mut Vec<Violation>,
) {
    let Some(tasks) = &workflow.tasks else {
        return;
    };
    let index = workflow.reference_index();

    for task in tasks {
        let Some(params) = &task.input_parameters else {
            continue;
        };

        for (key, value) in params {
            for expression in string_leaves(value) {
                let Some(components) = extractor.extract(expression) else {
                    continue;
                };
                let Some(scope) = components.first() else {
                    continue;
                };

                match ParamSource::classify(scope) {
                    ParamSource::Workflow => {}
                    ParamSource::Task(source) => {
                        if index.contains_key(source) {
                            continue;
                        }
                        debug!(
                            workflow = workflow.name.as_str(),
                            task = task.name.as_str(),
                            key = key.as_str(),
                            source,
                            "parameter references undefined task"
                        );
                        violations.push(Violation::undefined_parameter_source(
                            &workflow.name,
                            &task.name,
                            &task.task_reference_name,
                            key,
                            expression,
                            source,
                        ));
                    }
                }
            }
        }
    }
}
