//! Parse phase: definition JSON → Rust types.

pub mod reference;
pub mod types;

pub use reference::{DollarBraceExtractor, ParamPathExtractor, ParamSource, WORKFLOW_SCOPE};
pub use types::*;

use crate::error::AdmissionError;

/// Deserialize a workflow definition JSON string.
///
/// A literal `null` document is reported as a missing definition.
pub fn parse(json: &str) -> Result<WorkflowDef, AdmissionError> {
    let def = serde_json::from_str::<Option<WorkflowDef>>(json)?;
    def.ok_or(AdmissionError::MissingDefinition)
}
