use admission::parse::*;

// =============================================================================
// Definition builders
// =============================================================================

pub fn task(name: &str, reference: &str) -> WorkflowTask {
    WorkflowTask::new(name, reference)
}

/// Task with string-valued input parameters.
pub fn task_with_inputs(name: &str, reference: &str, inputs: &[(&str, &str)]) -> WorkflowTask {
    inputs
        .iter()
        .fold(task(name, reference), |t, (k, v)| t.with_input(*k, *v))
}

pub fn workflow(name: &str, tasks: Vec<WorkflowTask>) -> WorkflowDef {
    WorkflowDef::new(name, tasks)
}

/// Decision task with a single case branch and a default branch.
pub fn decision(
    name: &str,
    reference: &str,
    case: Vec<WorkflowTask>,
    default_case: Vec<WorkflowTask>,
) -> WorkflowTask {
    let mut t = task(name, reference);
    t.task_type = Some("DECISION".into());
    t.decision_cases.insert("case".into(), case);
    t.default_case = default_case;
    t
}

pub fn fork(name: &str, reference: &str, branches: Vec<Vec<WorkflowTask>>) -> WorkflowTask {
    let mut t = task(name, reference);
    t.task_type = Some("FORK_JOIN".into());
    t.fork_tasks = branches;
    t
}

// =============================================================================
// Logging
// =============================================================================

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
