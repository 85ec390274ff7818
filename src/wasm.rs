//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Violation;

/// Validate a workflow definition JSON.
/// Returns `{status, violations}` or `{status: "error", message}`.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ValidateResult {
    match crate::validate::validate_json(json) {
        Ok(report) if report.is_valid() => ValidateResult::Valid { violations: vec![] },
        Ok(report) => ValidateResult::Invalid {
            violations: report.violations,
        },
        Err(e) => ValidateResult::Error {
            message: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Result envelope for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status")]
enum ValidateResult {
    #[serde(rename = "valid")]
    Valid { violations: Vec<Violation> },
    #[serde(rename = "invalid")]
    Invalid { violations: Vec<Violation> },
    #[serde(rename = "error")]
    Error { message: String },
}
