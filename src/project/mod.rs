//! Project model: serde types, scope resolution, and the struct type graph.

pub mod scope;
pub mod structs;
pub mod types;

pub use scope::Scope;
pub use structs::StructGraph;
pub use types::*;

use crate::error::ProjectError;

/// Deserialize a project JSON string into a `Project`.
pub fn parse_project(json: &str) -> Result<Project, ProjectError> {
    Ok(serde_json::from_str(json)?)
}
