#![allow(dead_code)]

use std::collections::BTreeMap;

use analyzer::project::types::*;

// =============================================================================
// Project builders
// =============================================================================

pub fn project(flows: Vec<Flow>) -> Project {
    Project {
        flows: flows.into_iter().map(|f| (f.id.clone(), f)).collect(),
        code_files: vec![],
        global_variables: vec![],
        structs: vec![],
        libraries: vec![],
    }
}

pub fn flow(id: &str, name: &str, nodes: Vec<FlowNode>) -> Flow {
    Flow {
        id: id.into(),
        name: name.into(),
        nodes,
        edges: vec![],
        local_variables: vec![],
    }
}

pub fn variable(name: &str, declared_type: &str) -> Variable {
    Variable {
        id: format!("var-{name}"),
        name: name.into(),
        declared_type: declared_type.into(),
        is_array: false,
        is_global: false,
        textual_value: String::new(),
    }
}

pub fn code_file(id: &str, name: &str, source_text: &str, callables: Vec<Callable>) -> CodeFile {
    CodeFile {
        id: id.into(),
        name: name.into(),
        source_text: source_text.into(),
        callables,
        referenced_file_ids: Default::default(),
    }
}

/// A code file whose source passes the structural completeness checks.
pub fn well_formed_code_file(id: &str, name: &str, callables: Vec<Callable>) -> CodeFile {
    code_file(
        id,
        name,
        "namespace Generated\n{\n    public static class Helpers\n    {\n    }\n}\n",
        callables,
    )
}

pub fn callable(name: &str, return_type: &str, parameters: &[(&str, &str, bool)]) -> Callable {
    Callable {
        name: name.into(),
        return_type: return_type.into(),
        parameters: parameters
            .iter()
            .map(|(pname, ptype, optional)| Parameter {
                name: (*pname).into(),
                param_type: (*ptype).into(),
                optional: *optional,
            })
            .collect(),
        description: String::new(),
    }
}

pub fn bindings(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// =============================================================================
// Node builders
// =============================================================================

fn base<C>(id: &str, label: &str, config: C) -> NodeBase<C> {
    NodeBase {
        id: id.into(),
        position: Position { x: 0.0, y: 0.0 },
        data: NodeData {
            label: label.into(),
            config,
        },
        issues: vec![],
    }
}

pub fn start_node(id: &str) -> FlowNode {
    FlowNode::Start(base(id, "Start", StartConfig::default()))
}

pub fn end_node(id: &str) -> FlowNode {
    FlowNode::End(base(id, "End", EndConfig::default()))
}

pub fn decision_node(id: &str, condition: &str) -> FlowNode {
    FlowNode::Decision(base(
        id,
        "Decision",
        DecisionConfig {
            condition: condition.into(),
        },
    ))
}

pub fn code_node(id: &str, code: &str) -> FlowNode {
    FlowNode::Code(base(
        id,
        "Script",
        CodeConfig {
            code: code.into(),
            language: None,
        },
    ))
}

pub fn subflow_node(id: &str, target_flow_id: Option<&str>) -> FlowNode {
    FlowNode::SubflowCall(base(
        id,
        "Sub-flow",
        SubflowCallConfig {
            target_flow_id: target_flow_id.map(String::from),
        },
    ))
}

pub fn function_call_node(
    id: &str,
    code_file_id: Option<&str>,
    function_name: Option<&str>,
    arguments: &[(&str, &str)],
) -> FlowNode {
    FlowNode::FunctionCall(base(
        id,
        "Function call",
        FunctionCallConfig {
            code_file_id: code_file_id.map(String::from),
            function_name: function_name.map(String::from),
            arguments: bindings(arguments),
        },
    ))
}

pub fn log_node(id: &str, message_template: &str) -> FlowNode {
    FlowNode::Log(base(
        id,
        "Log",
        LogConfig {
            level: "info".into(),
            message_template: message_template.into(),
        },
    ))
}

/// Attach a host-side live issue to a node.
pub fn with_issue(node: FlowNode, severity: analyzer::diag::Severity, message: &str) -> FlowNode {
    let issue = NodeIssue {
        severity,
        message: message.into(),
    };
    match node {
        FlowNode::Start(mut n) => {
            n.issues.push(issue);
            FlowNode::Start(n)
        }
        FlowNode::End(mut n) => {
            n.issues.push(issue);
            FlowNode::End(n)
        }
        FlowNode::Process(mut n) => {
            n.issues.push(issue);
            FlowNode::Process(n)
        }
        FlowNode::Decision(mut n) => {
            n.issues.push(issue);
            FlowNode::Decision(n)
        }
        FlowNode::Loop(mut n) => {
            n.issues.push(issue);
            FlowNode::Loop(n)
        }
        FlowNode::Http(mut n) => {
            n.issues.push(issue);
            FlowNode::Http(n)
        }
        FlowNode::Db(mut n) => {
            n.issues.push(issue);
            FlowNode::Db(n)
        }
        FlowNode::Code(mut n) => {
            n.issues.push(issue);
            FlowNode::Code(n)
        }
        FlowNode::SubflowCall(mut n) => {
            n.issues.push(issue);
            FlowNode::SubflowCall(n)
        }
        FlowNode::FunctionCall(mut n) => {
            n.issues.push(issue);
            FlowNode::FunctionCall(n)
        }
        FlowNode::Log(mut n) => {
            n.issues.push(issue);
            FlowNode::Log(n)
        }
        FlowNode::AiTask(mut n) => {
            n.issues.push(issue);
            FlowNode::AiTask(n)
        }
        FlowNode::Group(mut n) => {
            n.issues.push(issue);
            FlowNode::Group(n)
        }
    }
}
