//! Diagnostic data types shared across all validators.
//!
//! Author mistakes are reported as data, never raised: every validator in
//! this crate returns diagnostics as plain values the host UI can render
//! and navigate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One validation finding, recomputed on demand and never persisted.
///
/// `flow_id` names the owning entity: a flow id for node-level findings,
/// a code file id for file-level findings, empty for project-level ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub id: String,
    pub code: String,
    pub flow_id: String,
    pub node_id: Option<String>,
    pub severity: Severity,
    pub message: String,
    pub timestamp: u64,
}

impl Diagnostic {
    pub fn error(
        code: &str,
        flow_id: impl Into<String>,
        node_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic::new(code, flow_id, node_id, Severity::Error, message)
    }

    pub fn warning(
        code: &str,
        flow_id: impl Into<String>,
        node_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic::new(code, flow_id, node_id, Severity::Warning, message)
    }

    pub fn new(
        code: &str,
        flow_id: impl Into<String>,
        node_id: Option<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            id: String::new(),
            code: code.into(),
            flow_id: flow_id.into(),
            node_id,
            severity,
            message: message.into(),
            timestamp: now_millis(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(
                f,
                "[{}:{}] {} (node '{}')",
                self.severity, self.code, self.message, id
            ),
            None => write!(f, "[{}:{}] {}", self.severity, self.code, self.message),
        }
    }
}

/// Verdict of the expression validator for one condition string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionVerdict {
    pub is_valid: bool,
    pub message: Option<String>,
    pub suggested_replacement: Option<String>,
}

impl ExpressionVerdict {
    pub fn valid() -> Self {
        ExpressionVerdict {
            is_valid: true,
            message: None,
            suggested_replacement: None,
        }
    }

    pub fn invalid(message: impl Into<String>, suggested_replacement: Option<String>) -> Self {
        ExpressionVerdict {
            is_valid: false,
            message: Some(message.into()),
            suggested_replacement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[serde(rename = "subflow")]
    Subflow,
    #[serde(rename = "functioncall")]
    FunctionCall,
}

/// One row of a "find references" query: a node that points at the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceResult {
    pub flow_id: String,
    pub flow_name: String,
    pub node_id: String,
    pub node_label: String,
    pub context: ReferenceKind,
}

pub(crate) fn now_millis() -> u64 {
    // SystemTime is unavailable on wasm32-unknown-unknown.
    #[cfg(target_arch = "wasm32")]
    {
        0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
