//! Violation records and the admission error type.

use serde::Serialize;

/// Which check produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Check {
    Uniqueness,
    ParameterSource,
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Check::Uniqueness => write!(f, "Uniqueness"),
            Check::ParameterSource => write!(f, "Parameter Source"),
        }
    }
}

/// A structural inconsistency found in a workflow definition.
///
/// Violations are a normal validation outcome, not errors. Each one carries
/// enough context for the definition's author to locate and fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub code: &'static str,
    pub check: Check,
    pub message: String,
    pub workflow_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_reference_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// The scope a parameter expression points at, if it could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}] {}", self.check, self.code, self.message)
    }
}

impl Violation {
    pub fn duplicate_reference_name(workflow_name: &str, task_name: &str, reference: &str) -> Self {
        Violation {
            code: "R001",
            check: Check::Uniqueness,
            message: format!(
                "taskReferenceName: {} should be unique across tasks for workflow: {}",
                reference, workflow_name
            ),
            workflow_name: workflow_name.into(),
            task_name: Some(task_name.into()),
            task_reference_name: Some(reference.into()),
            parameter_key: None,
            expression: None,
            source: None,
        }
    }

    pub fn undefined_parameter_source(
        workflow_name: &str,
        task_name: &str,
        reference: &str,
        key: &str,
        expression: &str,
        source: &str,
    ) -> Self {
        Violation {
            code: "R002",
            check: Check::ParameterSource,
            message: format!(
                "taskReferenceName: {} for given task: {} input value: {} of input parameter: {} \
                 is not defined in workflow definition: {}",
                source, task_name, expression, key, workflow_name
            ),
            workflow_name: workflow_name.into(),
            task_name: Some(task_name.into()),
            task_reference_name: Some(reference.into()),
            parameter_key: Some(key.into()),
            expression: Some(expression.into()),
            source: Some(source.into()),
        }
    }
}

/// Malformed input: the caller handed over something that is not a definition.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionError {
    #[error("workflow definition is missing")]
    MissingDefinition,

    #[error("failed to parse workflow definition JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
