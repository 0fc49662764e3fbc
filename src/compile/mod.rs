//! Whole-project compile pass and cross-reference index.
//!
//! Both operations are recomputed from scratch on demand over in-memory
//! project state. Nothing is cached between calls, so a superseded result
//! can always be discarded and the call repeated.

pub mod code_rules;
pub mod node_rules;
pub mod references;

pub use references::find_references;

use crate::diag::Diagnostic;
use crate::lattice;
use crate::project::types::{Project, Variable};
use crate::project::{Scope, StructGraph};
use crate::scan;

/// Aggregate every diagnostic across the project into one flat,
/// stably-ordered list: flows (in id order, nodes in authoring order),
/// then code files, then the struct table. Never short-circuits on the
/// first error.
pub fn compile(project: &Project) -> Vec<Diagnostic> {
    let struct_graph = StructGraph::build(&project.structs);
    let mut diags = Vec::new();

    check_variables(
        &project.global_variables,
        "",
        &struct_graph,
        &mut diags,
    );

    for flow in project.flows.values() {
        check_variables(&flow.local_variables, &flow.id, &struct_graph, &mut diags);
        let scope = Scope::for_flow(flow, project);
        for node in &flow.nodes {
            node_rules::check_node(project, flow, node, &scope, &mut diags);
        }
    }

    for file in &project.code_files {
        code_rules::check_code_file(file, &mut diags);
    }

    for name in struct_graph.cyclic_structs() {
        diags.push(Diagnostic::warning(
            "T001",
            "",
            None,
            format!("Struct '{name}' is part of a reference cycle; member access resolves one level deep only"),
        ));
    }

    assign_ids(&mut diags);
    diags
}

/// Variable table hygiene: names must be identifiers, declared types must
/// name a builtin or a known struct.
fn check_variables(
    variables: &[Variable],
    owner_id: &str,
    struct_graph: &StructGraph,
    diags: &mut Vec<Diagnostic>,
) {
    for var in variables {
        if !scan::is_identifier(&var.name) {
            diags.push(Diagnostic::warning(
                "V001",
                owner_id,
                None,
                format!("Variable name '{}' is not a valid identifier", var.name),
            ));
        }
        let ty = var.declared_type.as_str();
        if !lattice::is_builtin(ty) && !struct_graph.is_struct(ty) {
            diags.push(Diagnostic::warning(
                "V002",
                owner_id,
                None,
                format!("Variable '{}' has unknown type '{ty}'", var.name),
            ));
        }
    }
}

/// Diagnostics get sequential ids once the full list is assembled, so ids
/// are stable for one compile and meaningless across compiles.
fn assign_ids(diags: &mut [Diagnostic]) {
    for (i, diag) in diags.iter_mut().enumerate() {
        diag.id = format!("diag-{}", i + 1);
    }
}
