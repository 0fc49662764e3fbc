//! Call-site validation: argument bindings against a parsed signature.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diag::Severity;
use crate::lattice;
use crate::project::types::Callable;
use crate::project::Scope;
use crate::scan::single_token;

/// One finding about one parameter binding. The compile pass lifts these
/// into full diagnostics with flow/node context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSiteIssue {
    pub code: String,
    pub severity: Severity,
    pub parameter: String,
    pub message: String,
}

/// Check each declared parameter of `callable` against its bound argument
/// text.
///
/// Only arguments that are exactly one interpolation token are
/// type-checked; literal text is accepted as-is (no literal-type
/// inference). An empty binding for a non-optional parameter is an error;
/// an argument naming an unknown variable is a lower-confidence warning.
pub fn validate_call_site(
    callable: &Callable,
    bindings: &BTreeMap<String, String>,
    scope: &Scope,
) -> Vec<CallSiteIssue> {
    let mut issues = Vec::new();

    for param in &callable.parameters {
        let bound = bindings
            .get(&param.name)
            .map(String::as_str)
            .unwrap_or("")
            .trim();

        if bound.is_empty() {
            if !param.optional {
                issues.push(CallSiteIssue {
                    code: "F001".into(),
                    severity: Severity::Error,
                    parameter: param.name.clone(),
                    message: format!(
                        "Parameter '{}' of '{}' has no argument",
                        param.name, callable.name
                    ),
                });
            }
            continue;
        }

        let Some(name) = single_token(bound) else {
            continue;
        };
        let Some(var) = scope.resolve(name) else {
            issues.push(CallSiteIssue {
                code: "F002".into(),
                severity: Severity::Warning,
                parameter: param.name.clone(),
                message: format!(
                    "Argument for '{}' references undefined variable '{{{name}}}'",
                    param.name
                ),
            });
            continue;
        };

        let expected = lattice::map_script_type(&param.param_type);
        if !lattice::compatible(&var.declared_type, expected) {
            issues.push(CallSiteIssue {
                code: "F003".into(),
                severity: Severity::Error,
                parameter: param.name.clone(),
                message: format!(
                    "Parameter '{}' of '{}' expects {expected} but '{{{name}}}' has type {}",
                    param.name, callable.name, var.declared_type
                ),
            });
        }
    }

    issues
}
