//! Decompose `${scope.path}` parameter expressions into path components.

use serde_json::Value;

/// Reserved scope naming the workflow's own input/namespace.
pub const WORKFLOW_SCOPE: &str = "workflow";

/// Splits a parameter expression into ordered scope components.
///
/// Returns `None` when the expression is not a reference at all.
pub trait ParamPathExtractor {
    fn extract(&self, expression: &str) -> Option<Vec<String>>;
}

/// Default extractor for `${a.b.c}` references.
///
/// Only the first reference in the string is decomposed. Unterminated or
/// empty references yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DollarBraceExtractor;

impl ParamPathExtractor for DollarBraceExtractor {
    fn extract(&self, expression: &str) -> Option<Vec<String>> {
        let start = expression.find("${")?;
        let after_open = &expression[start + 2..];
        let end = after_open.find('}')?;
        let inner = after_open[..end].trim();
        if inner.is_empty() {
            return None;
        }
        Some(inner.split('.').map(|c| c.trim().to_string()).collect())
    }
}

/// Where a parameter reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSource<'a> {
    Workflow,
    Task(&'a str),
}

impl<'a> ParamSource<'a> {
    /// Classify the leading component of a decomposed reference.
    pub fn classify(scope: &'a str) -> Self {
        if scope == WORKFLOW_SCOPE {
            ParamSource::Workflow
        } else {
            ParamSource::Task(scope)
        }
    }
}

/// Every string inside a parameter value, depth first: object values in key
/// order, then array items in order. Other scalars and `null` carry no text.
pub fn string_leaves(value: &Value) -> Vec<&str> {
    let mut out = Vec::new();
    collect_strings(value, &mut out);
    out
}

fn collect_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s.as_str()),
        Value::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        Value::Object(map) => {
            for v in map.values() {
                collect_strings(v, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
