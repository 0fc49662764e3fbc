//! Integration tests for call-site argument validation.

mod helpers;

use analyzer::callsite::validate_call_site;
use analyzer::diag::Severity;
use analyzer::project::Scope;
use helpers::{bindings, callable, variable};

#[test]
fn compatible_binding_passes() {
    let globals = vec![variable("orderTotal", "number")];
    let scope = Scope::global_only(&globals);
    let target = callable("GetDiscount", "double", &[("total", "double", false)]);
    let issues = validate_call_site(&target, &bindings(&[("total", "{orderTotal}")]), &scope);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn type_mismatch_names_parameter_and_types() {
    let globals = vec![variable("customerName", "string")];
    let scope = Scope::global_only(&globals);
    let target = callable("GetDiscount", "double", &[("total", "double", false)]);
    let issues = validate_call_site(&target, &bindings(&[("total", "{customerName}")]), &scope);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "F003");
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].parameter, "total");
    assert!(issues[0].message.contains("float"), "{}", issues[0].message);
    assert!(issues[0].message.contains("string"), "{}", issues[0].message);
}

#[test]
fn missing_required_argument_is_flagged() {
    let globals = vec![];
    let scope = Scope::global_only(&globals);
    let target = callable("Notify", "void", &[("recipient", "string", false)]);
    let issues = validate_call_site(&target, &bindings(&[]), &scope);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "F001");
    assert_eq!(issues[0].parameter, "recipient");
}

#[test]
fn omitted_optional_argument_is_fine() {
    let globals = vec![];
    let scope = Scope::global_only(&globals);
    let target = callable("Notify", "void", &[("retries", "int", true)]);
    assert!(validate_call_site(&target, &bindings(&[]), &scope).is_empty());
}

#[test]
fn literal_arguments_are_not_type_checked() {
    let globals = vec![];
    let scope = Scope::global_only(&globals);
    let target = callable("GetDiscount", "double", &[("total", "double", false)]);
    // No literal-type inference: plain text is accepted as-is.
    let issues = validate_call_site(&target, &bindings(&[("total", "forty-two")]), &scope);
    assert!(issues.is_empty());
}

#[test]
fn unknown_variable_is_a_warning() {
    let globals = vec![];
    let scope = Scope::global_only(&globals);
    let target = callable("GetDiscount", "double", &[("total", "double", false)]);
    let issues = validate_call_site(&target, &bindings(&[("total", "{ghost}")]), &scope);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "F002");
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn object_parameter_accepts_anything() {
    let globals = vec![variable("payload", "datetime")];
    let scope = Scope::global_only(&globals);
    let target = callable("Enqueue", "void", &[("item", "object", false)]);
    let issues = validate_call_site(&target, &bindings(&[("item", "{payload}")]), &scope);
    assert!(issues.is_empty());
}

#[test]
fn each_offending_parameter_gets_its_own_issue() {
    let globals = vec![variable("name", "string")];
    let scope = Scope::global_only(&globals);
    let target = callable(
        "Record",
        "void",
        &[
            ("when", "DateTime", false),
            ("amount", "double", false),
            ("note", "string", false),
        ],
    );
    let issues = validate_call_site(
        &target,
        &bindings(&[("when", "{name}"), ("amount", "{name}"), ("note", "{name}")]),
        &scope,
    );
    let codes: Vec<&str> = issues.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, ["F003", "F003"]);
    let params: Vec<&str> = issues.iter().map(|i| i.parameter.as_str()).collect();
    assert_eq!(params, ["when", "amount"]);
}
