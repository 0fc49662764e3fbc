//! Find-references query over the whole project.

use crate::diag::{ReferenceKind, ReferenceResult};
use crate::project::types::{FlowNode, Project};

/// Every node that points at the target entity: sub-flow calls matching a
/// flow id, function calls matching a code file id. One row per match, in
/// flow iteration order.
pub fn find_references(
    project: &Project,
    kind: ReferenceKind,
    target_id: &str,
) -> Vec<ReferenceResult> {
    let mut results = Vec::new();

    for flow in project.flows.values() {
        for node in &flow.nodes {
            let hit = match (kind, node) {
                (ReferenceKind::Subflow, FlowNode::SubflowCall(n)) => {
                    n.data.config.target_flow_id.as_deref() == Some(target_id)
                }
                (ReferenceKind::FunctionCall, FlowNode::FunctionCall(n)) => {
                    n.data.config.code_file_id.as_deref() == Some(target_id)
                }
                _ => false,
            };
            if hit {
                results.push(ReferenceResult {
                    flow_id: flow.id.clone(),
                    flow_name: flow.name.clone(),
                    node_id: node.id().to_string(),
                    node_label: node.label().to_string(),
                    context: kind,
                });
            }
        }
    }

    results
}
