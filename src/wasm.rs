//! WASM entry points for browser use.
//!
//! Each export takes JSON strings from the host UI and returns a
//! serialized DTO. Host JSON that fails to deserialize is reported as an
//! error-status result, never thrown across the boundary.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::diag::ReferenceKind;
use crate::project::types::{Callable, Variable};
use crate::project::Scope;

#[derive(Serialize)]
#[serde(tag = "status")]
enum HostResult<T> {
    #[serde(rename = "ok")]
    Ok { value: T },
    #[serde(rename = "error")]
    Error { message: String },
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Parse one script file's source text into callable signatures.
#[wasm_bindgen]
pub fn parse_signatures(source: &str) -> JsValue {
    let callables = crate::signature::parse_signatures(source);
    to_js(&callables)
}

/// Interpolation-token names referenced from a text field.
#[wasm_bindgen]
pub fn scan_references(text: &str) -> JsValue {
    let names: Vec<String> = crate::scan::scan_references(text).into_iter().collect();
    to_js(&names)
}

/// Variable names referenced from a script body, including bare
/// whole-word occurrences of known variables.
#[wasm_bindgen]
pub fn scan_code_references(code: &str, variables_json: &str) -> JsValue {
    let result = match parse_variables(variables_json) {
        Ok(variables) => {
            let names: Vec<String> = crate::scan::scan_code_references(code, variables.iter())
                .into_iter()
                .collect();
            HostResult::Ok { value: names }
        }
        Err(message) => HostResult::Error { message },
    };
    to_js(&result)
}

/// Judge a decision/loop condition against local + global variables.
#[wasm_bindgen]
pub fn validate_expression(text: &str, locals_json: &str, globals_json: &str) -> JsValue {
    let result = match parse_scope_inputs(locals_json, globals_json) {
        Ok((locals, globals)) => {
            let scope = Scope::new(&locals, &globals);
            HostResult::Ok {
                value: crate::expr::validate_expression(text, &scope),
            }
        }
        Err(message) => HostResult::Error { message },
    };
    to_js(&result)
}

/// Check argument bindings for one callable.
#[wasm_bindgen]
pub fn validate_call_site(
    callable_json: &str,
    bindings_json: &str,
    locals_json: &str,
    globals_json: &str,
) -> JsValue {
    let result = validate_call_site_inner(callable_json, bindings_json, locals_json, globals_json);
    to_js(&result)
}

fn validate_call_site_inner(
    callable_json: &str,
    bindings_json: &str,
    locals_json: &str,
    globals_json: &str,
) -> HostResult<Vec<crate::callsite::CallSiteIssue>> {
    let callable: Callable = match serde_json::from_str(callable_json) {
        Ok(c) => c,
        Err(e) => {
            return HostResult::Error {
                message: format!("failed to parse callable JSON: {e}"),
            };
        }
    };
    let bindings: BTreeMap<String, String> = match serde_json::from_str(bindings_json) {
        Ok(b) => b,
        Err(e) => {
            return HostResult::Error {
                message: format!("failed to parse bindings JSON: {e}"),
            };
        }
    };
    match parse_scope_inputs(locals_json, globals_json) {
        Ok((locals, globals)) => {
            let scope = Scope::new(&locals, &globals);
            HostResult::Ok {
                value: crate::callsite::validate_call_site(&callable, &bindings, &scope),
            }
        }
        Err(message) => HostResult::Error { message },
    }
}

/// Every node referencing the target entity.
#[wasm_bindgen]
pub fn find_references(project_json: &str, kind: &str, target_id: &str) -> JsValue {
    let result = find_references_inner(project_json, kind, target_id);
    to_js(&result)
}

fn find_references_inner(
    project_json: &str,
    kind: &str,
    target_id: &str,
) -> HostResult<Vec<crate::diag::ReferenceResult>> {
    let kind = match kind {
        "subflow" => ReferenceKind::Subflow,
        "functioncall" => ReferenceKind::FunctionCall,
        other => {
            return HostResult::Error {
                message: format!("unknown reference kind '{other}'"),
            };
        }
    };
    match crate::project::parse_project(project_json) {
        Ok(project) => HostResult::Ok {
            value: crate::compile::find_references(&project, kind, target_id),
        },
        Err(e) => HostResult::Error {
            message: e.to_string(),
        },
    }
}

/// Whole-project compile pass: one flat diagnostic list.
#[wasm_bindgen]
pub fn compile_project(project_json: &str) -> JsValue {
    let result = match crate::project::parse_project(project_json) {
        Ok(project) => HostResult::Ok {
            value: crate::compile::compile(&project),
        },
        Err(e) => HostResult::Error {
            message: e.to_string(),
        },
    };
    to_js(&result)
}

fn parse_variables(json: &str) -> Result<Vec<Variable>, String> {
    serde_json::from_str(json).map_err(|e| format!("failed to parse variables JSON: {e}"))
}

fn parse_scope_inputs(
    locals_json: &str,
    globals_json: &str,
) -> Result<(Vec<Variable>, Vec<Variable>), String> {
    Ok((parse_variables(locals_json)?, parse_variables(globals_json)?))
}
