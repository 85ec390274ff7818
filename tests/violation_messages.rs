//! Human-readable violation text as surfaced to definition authors.

#[allow(dead_code)]
mod helpers;

use admission::validate;
use helpers::*;

#[test]
fn duplicate_reference_message() {
    let report = validate(&workflow("orders", vec![task("A", "t1"), task("B", "t1")]));
    insta::assert_snapshot!(
        report.violations[0].message.as_str(),
        @"taskReferenceName: t1 should be unique across tasks for workflow: orders"
    );
    insta::assert_snapshot!(
        report.violations[0].to_string(),
        @"[Uniqueness:R001] taskReferenceName: t1 should be unique across tasks for workflow: orders"
    );
}

#[test]
fn undefined_source_message() {
    let report = validate(&workflow(
        "orders",
        vec![task_with_inputs("B", "b", &[("x", "${t1.output.y}")])],
    ));
    insta::assert_snapshot!(
        report.violations[0].to_string(),
        @"[Parameter Source:R002] taskReferenceName: t1 for given task: B input value: ${t1.output.y} of input parameter: x is not defined in workflow definition: orders"
    );
}

#[test]
fn report_serializes_context_fields() {
    let report = validate(&workflow(
        "orders",
        vec![task_with_inputs("B", "b", &[("x", "${t1.output.y}")])],
    ));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["workflowName"], "orders");
    let v = &value["violations"][0];
    assert_eq!(v["check"], "parameterSource");
    assert_eq!(v["taskName"], "B");
    assert_eq!(v["taskReferenceName"], "b");
    assert_eq!(v["parameterKey"], "x");
    assert_eq!(v["source"], "t1");
}
