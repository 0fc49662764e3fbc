//! Rust types mirroring the host application's project model.
//!
//! These types are the serde target for the frontend project JSON. The
//! validator only reads them; creation and editing stay with the host UI.
//! Canvas positions and sizes ride along for round-tripping but are never
//! inspected here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::diag::Severity;

// =============================================================================
// TOP-LEVEL PROJECT
// =============================================================================

/// The whole authoring project: flows keyed by id, script files, and the
/// project-global variable/struct tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub flows: BTreeMap<String, Flow>,
    #[serde(default)]
    pub code_files: Vec<CodeFile>,
    #[serde(default)]
    pub global_variables: Vec<Variable>,
    #[serde(default)]
    pub structs: Vec<StructDefinition>,
    /// Externally declared namespaces/types, advisory only: the host uses
    /// them to extend autocomplete, never validation.
    #[serde(default)]
    pub libraries: Vec<LibraryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
    #[serde(default)]
    pub local_variables: Vec<Variable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

// =============================================================================
// VARIABLES, STRUCTS, LIBRARIES
// =============================================================================

/// A named value, either project-global or local to one flow. A name may
/// exist in both scopes at once; the local one shadows the global.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub declared_type: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub textual_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<StructField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructField {
    pub name: String,
    pub declared_type: String,
    #[serde(default)]
    pub is_array: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub namespace: String,
    #[serde(default)]
    pub types: Vec<LibraryType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryType {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<String>,
}

// =============================================================================
// CODE FILES & CALLABLES
// =============================================================================

/// One embedded-script source file. `callables` is regenerated wholesale
/// from `source_text` by the signature parser whenever the text changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub callables: Vec<Callable>,
    /// Author-declared cross-file references; advisory metadata for the
    /// host. Call resolution never needs it since a call site always
    /// carries an explicit target file id.
    #[serde(default)]
    pub referenced_file_ids: BTreeSet<String>,
}

impl CodeFile {
    pub fn callable(&self, name: &str) -> Option<&Callable> {
        self.callables.iter().find(|c| c.name == name)
    }
}

/// A parsed public method signature, independent of any invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callable {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    /// A parameter declared with a default value may be legitimately
    /// omitted at the call site.
    #[serde(default)]
    pub optional: bool,
}

// =============================================================================
// NODE BASE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData<C> {
    pub label: String,
    pub config: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBase<C> {
    pub id: String,
    pub position: Position,
    pub data: NodeData<C>,
    /// Findings attached by the host's live per-field validation. The
    /// compile pass propagates these verbatim instead of recomputing them.
    #[serde(default)]
    pub issues: Vec<NodeIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeIssue {
    pub severity: Severity,
    pub message: String,
}

// =============================================================================
// FLOW NODE — tagged union over the node kinds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowNode {
    #[serde(rename = "start")]
    Start(NodeBase<StartConfig>),
    #[serde(rename = "end")]
    End(NodeBase<EndConfig>),
    #[serde(rename = "process")]
    Process(NodeBase<ProcessConfig>),
    #[serde(rename = "decision")]
    Decision(NodeBase<DecisionConfig>),
    #[serde(rename = "loop")]
    Loop(NodeBase<LoopConfig>),
    #[serde(rename = "http")]
    Http(NodeBase<HttpConfig>),
    #[serde(rename = "db")]
    Db(NodeBase<DbConfig>),
    #[serde(rename = "code")]
    Code(NodeBase<CodeConfig>),
    #[serde(rename = "subflowCall")]
    SubflowCall(NodeBase<SubflowCallConfig>),
    #[serde(rename = "functionCall")]
    FunctionCall(NodeBase<FunctionCallConfig>),
    #[serde(rename = "log")]
    Log(NodeBase<LogConfig>),
    #[serde(rename = "aiTask")]
    AiTask(NodeBase<AiTaskConfig>),
    #[serde(rename = "group")]
    Group(NodeBase<GroupConfig>),
}

impl FlowNode {
    pub fn id(&self) -> &str {
        match self {
            FlowNode::Start(n) => &n.id,
            FlowNode::End(n) => &n.id,
            FlowNode::Process(n) => &n.id,
            FlowNode::Decision(n) => &n.id,
            FlowNode::Loop(n) => &n.id,
            FlowNode::Http(n) => &n.id,
            FlowNode::Db(n) => &n.id,
            FlowNode::Code(n) => &n.id,
            FlowNode::SubflowCall(n) => &n.id,
            FlowNode::FunctionCall(n) => &n.id,
            FlowNode::Log(n) => &n.id,
            FlowNode::AiTask(n) => &n.id,
            FlowNode::Group(n) => &n.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FlowNode::Start(n) => &n.data.label,
            FlowNode::End(n) => &n.data.label,
            FlowNode::Process(n) => &n.data.label,
            FlowNode::Decision(n) => &n.data.label,
            FlowNode::Loop(n) => &n.data.label,
            FlowNode::Http(n) => &n.data.label,
            FlowNode::Db(n) => &n.data.label,
            FlowNode::Code(n) => &n.data.label,
            FlowNode::SubflowCall(n) => &n.data.label,
            FlowNode::FunctionCall(n) => &n.data.label,
            FlowNode::Log(n) => &n.data.label,
            FlowNode::AiTask(n) => &n.data.label,
            FlowNode::Group(n) => &n.data.label,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            FlowNode::Start(_) => "start",
            FlowNode::End(_) => "end",
            FlowNode::Process(_) => "process",
            FlowNode::Decision(_) => "decision",
            FlowNode::Loop(_) => "loop",
            FlowNode::Http(_) => "http",
            FlowNode::Db(_) => "db",
            FlowNode::Code(_) => "code",
            FlowNode::SubflowCall(_) => "subflowCall",
            FlowNode::FunctionCall(_) => "functionCall",
            FlowNode::Log(_) => "log",
            FlowNode::AiTask(_) => "aiTask",
            FlowNode::Group(_) => "group",
        }
    }

    pub fn issues(&self) -> &[NodeIssue] {
        match self {
            FlowNode::Start(n) => &n.issues,
            FlowNode::End(n) => &n.issues,
            FlowNode::Process(n) => &n.issues,
            FlowNode::Decision(n) => &n.issues,
            FlowNode::Loop(n) => &n.issues,
            FlowNode::Http(n) => &n.issues,
            FlowNode::Db(n) => &n.issues,
            FlowNode::Code(n) => &n.issues,
            FlowNode::SubflowCall(n) => &n.issues,
            FlowNode::FunctionCall(n) => &n.issues,
            FlowNode::Log(n) => &n.issues,
            FlowNode::AiTask(n) => &n.issues,
            FlowNode::Group(n) => &n.issues,
        }
    }

    /// Free-text fields that may carry interpolation tokens.
    ///
    /// Code bodies and function-call arguments are deliberately absent:
    /// both get dedicated handling (bare-identifier recovery and call-site
    /// checks respectively).
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            FlowNode::Start(_) | FlowNode::End(_) | FlowNode::Group(_) => vec![],
            FlowNode::Process(n) => vec![n.data.config.description.as_str()],
            FlowNode::Decision(n) => vec![n.data.config.condition.as_str()],
            FlowNode::Loop(n) => vec![n.data.config.condition.as_str()],
            FlowNode::Http(n) => {
                let c = &n.data.config;
                let mut fields = vec![c.url.as_str()];
                if let Some(headers) = &c.headers {
                    fields.extend(headers.values().map(String::as_str));
                }
                if let Some(body) = &c.body {
                    fields.push(body.as_str());
                }
                fields
            }
            FlowNode::Db(n) => vec![n.data.config.query.as_str()],
            FlowNode::Code(_) => vec![],
            FlowNode::SubflowCall(_) => vec![],
            FlowNode::FunctionCall(_) => vec![],
            FlowNode::Log(n) => vec![n.data.config.message_template.as_str()],
            FlowNode::AiTask(n) => vec![n.data.config.prompt.as_str()],
        }
    }
}

// =============================================================================
// NODE CONFIGS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartConfig {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndConfig {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfig {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionConfig {
    #[serde(default)]
    pub condition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopConfig {
    #[serde(default)]
    pub condition: String,
    pub max_iterations: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub method: String,
    #[serde(default)]
    pub url: String,
    pub headers: Option<BTreeMap<String, String>>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbConfig {
    #[serde(default)]
    pub connection: String,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeConfig {
    #[serde(default)]
    pub code: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubflowCallConfig {
    pub target_flow_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallConfig {
    pub code_file_id: Option<String>,
    pub function_name: Option<String>,
    /// Parameter name to argument text.
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTaskConfig {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    #[serde(default)]
    pub collapsed: bool,
}
