//! Admission validation of workflow definitions.
//!
//! Both checks run over the same definition every time; neither
//! short-circuits the other, so one pass surfaces every violation.

pub mod parameters;
pub mod uniqueness;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AdmissionError, Check, Violation};
use crate::parse::reference::{DollarBraceExtractor, ParamPathExtractor};
use crate::parse::types::WorkflowDef;

/// Outcome of validating one definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub workflow_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations_for(&self, check: Check) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.check == check)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

/// Runs the admission checks with a configurable parameter-path extractor.
pub struct Validator {
    extractor: Box<dyn ParamPathExtractor + Send + Sync>,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Validator::with_extractor(DollarBraceExtractor)
    }

    pub fn with_extractor(extractor: impl ParamPathExtractor + Send + Sync + 'static) -> Self {
        Validator {
            extractor: Box::new(extractor),
        }
    }

    /// Validate a definition. Invalid definitions are a normal outcome.
    pub fn validate(&self, workflow: &WorkflowDef) -> ValidationReport {
        // Both checks scan the top-level tasks; nested tasks only serve as
        // reference targets.
        let tasks = workflow.tasks.as_deref().unwrap_or_default();
        let mut violations = Vec::new();

        uniqueness::check_unique_reference_names(&workflow.name, tasks, &mut violations);
        parameters::check_parameter_sources(workflow, self.extractor.as_ref(), &mut violations);

        debug!(
            workflow = workflow.name.as_str(),
            tasks = tasks.len(),
            violations = violations.len(),
            "validated workflow definition"
        );

        ValidationReport {
            workflow_name: workflow.name.clone(),
            violations,
        }
    }

    /// Validate a definition that may be absent. Absence is a caller error.
    pub fn validate_optional(
        &self,
        workflow: Option<&WorkflowDef>,
    ) -> Result<ValidationReport, AdmissionError> {
        match workflow {
            Some(w) => Ok(self.validate(w)),
            None => {
                warn!("validation invoked without a workflow definition");
                Err(AdmissionError::MissingDefinition)
            }
        }
    }

    /// Parse the definition JSON and validate it.
    pub fn validate_json(&self, json: &str) -> Result<ValidationReport, AdmissionError> {
        let workflow = crate::parse::parse(json).inspect_err(|e| {
            warn!(error = %e, "rejected malformed workflow definition");
        })?;
        Ok(self.validate(&workflow))
    }
}

/// Validate with the default `${...}` extractor.
pub fn validate(workflow: &WorkflowDef) -> ValidationReport {
    Validator::new().validate(workflow)
}

/// Validate a possibly absent definition with the default extractor.
pub fn validate_optional(workflow: Option<&WorkflowDef>) -> Result<ValidationReport, AdmissionError> {
    Validator::new().validate_optional(workflow)
}

/// Parse and validate definition JSON with the default extractor.
pub fn validate_json(json: &str) -> Result<ValidationReport, AdmissionError> {
    Validator::new().validate_json(json)
}
