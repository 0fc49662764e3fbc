//! Per-node completeness and reference checks for the compile pass.

use std::collections::BTreeSet;

use crate::callsite;
use crate::diag::Diagnostic;
use crate::expr;
use crate::project::types::*;
use crate::project::Scope;
use crate::scan;

/// Check one node, appending everything found to `diags`, including the
/// node's host-attached live issues propagated verbatim.
pub fn check_node(
    project: &Project,
    flow: &Flow,
    node: &FlowNode,
    scope: &Scope,
    diags: &mut Vec<Diagnostic>,
) {
    let flow_id = flow.id.as_str();
    let node_id = Some(node.id().to_string());

    match node {
        FlowNode::SubflowCall(n) => match n.data.config.target_flow_id.as_deref() {
            None | Some("") => {
                diags.push(Diagnostic::error(
                    "X001",
                    flow_id,
                    node_id.clone(),
                    "Sub-flow call has no target flow selected",
                ));
            }
            Some(target) if !project.flows.contains_key(target) => {
                diags.push(Diagnostic::error(
                    "X002",
                    flow_id,
                    node_id.clone(),
                    format!("Sub-flow call targets unknown flow '{target}'"),
                ));
            }
            Some(_) => {}
        },
        FlowNode::Code(n) => {
            if n.data.config.code.trim().is_empty() {
                diags.push(Diagnostic::error(
                    "X003",
                    flow_id,
                    node_id.clone(),
                    "Code node has an empty script body",
                ));
            }
        }
        FlowNode::FunctionCall(n) => {
            check_function_call(project, flow_id, &node_id, &n.data.config, scope, diags);
        }
        FlowNode::Decision(n) => {
            check_condition(&n.data.config.condition, flow_id, &node_id, scope, diags);
        }
        FlowNode::Loop(n) => {
            check_condition(&n.data.config.condition, flow_id, &node_id, scope, diags);
        }
        FlowNode::Http(n) => {
            if n.data.config.url.trim().is_empty() {
                diags.push(Diagnostic::error(
                    "X010",
                    flow_id,
                    node_id.clone(),
                    "HTTP node has an empty URL",
                ));
            }
        }
        FlowNode::Db(n) => {
            if n.data.config.query.trim().is_empty() {
                diags.push(Diagnostic::error(
                    "X011",
                    flow_id,
                    node_id.clone(),
                    "Database node has an empty query",
                ));
            }
        }
        _ => {}
    }

    check_undefined_references(flow_id, &node_id, node, scope, diags);

    // Live per-field findings are propagated, never recomputed.
    for issue in node.issues() {
        diags.push(Diagnostic::new(
            "A001",
            flow_id,
            node_id.clone(),
            issue.severity,
            issue.message.clone(),
        ));
    }
}

fn check_function_call(
    project: &Project,
    flow_id: &str,
    node_id: &Option<String>,
    config: &FunctionCallConfig,
    scope: &Scope,
    diags: &mut Vec<Diagnostic>,
) {
    let file_id = config.code_file_id.as_deref().unwrap_or("");
    let function = config.function_name.as_deref().unwrap_or("");
    if file_id.is_empty() || function.is_empty() {
        diags.push(Diagnostic::error(
            "X004",
            flow_id,
            node_id.clone(),
            "Function call is not configured (missing target file or function)",
        ));
        return;
    }

    // Host state may be inconsistent; degrade to "target not found".
    let Some(file) = project.code_files.iter().find(|f| f.id == file_id) else {
        diags.push(Diagnostic::error(
            "X005",
            flow_id,
            node_id.clone(),
            format!("Function call targets unknown code file '{file_id}'"),
        ));
        return;
    };
    let Some(callable) = file.callable(function) else {
        diags.push(Diagnostic::error(
            "X006",
            flow_id,
            node_id.clone(),
            format!("Function '{function}' not found in code file '{}'", file.name),
        ));
        return;
    };

    for issue in callsite::validate_call_site(callable, &config.arguments, scope) {
        diags.push(Diagnostic::new(
            &issue.code,
            flow_id,
            node_id.clone(),
            issue.severity,
            issue.message,
        ));
    }
}

fn check_condition(
    condition: &str,
    flow_id: &str,
    node_id: &Option<String>,
    scope: &Scope,
    diags: &mut Vec<Diagnostic>,
) {
    if condition.trim().is_empty() {
        diags.push(Diagnostic::error(
            "X009",
            flow_id,
            node_id.clone(),
            "Condition must not be empty",
        ));
        return;
    }
    let verdict = expr::validate_expression(condition, scope);
    if let Some(message) = verdict.message {
        diags.push(Diagnostic::warning("X007", flow_id, node_id.clone(), message));
    }
}

/// Warn once per undefined name referenced from the node's text fields.
/// Code bodies only contribute interpolation tokens here: a bare
/// identifier in a script cannot be told apart from a script-local.
fn check_undefined_references(
    flow_id: &str,
    node_id: &Option<String>,
    node: &FlowNode,
    scope: &Scope,
    diags: &mut Vec<Diagnostic>,
) {
    let mut names: BTreeSet<String> = BTreeSet::new();
    for field in node.text_fields() {
        names.extend(scan::scan_references(field));
    }
    match node {
        FlowNode::Code(n) => {
            names.extend(scan::scan_references(&n.data.config.code));
        }
        FlowNode::FunctionCall(n) => {
            // Single-token arguments belong to the call-site validator.
            for argument in n.data.config.arguments.values() {
                if scan::single_token(argument).is_none() {
                    names.extend(scan::scan_references(argument));
                }
            }
        }
        _ => {}
    }

    for name in names {
        if scope.resolve(&name).is_none() {
            diags.push(Diagnostic::warning(
                "X008",
                flow_id,
                node_id.clone(),
                format!("Reference to undefined variable '{{{name}}}'"),
            ));
        }
    }
}
