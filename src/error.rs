//! Host-input failure type.
//!
//! Malformed author input is never an error here; it is exactly what the
//! validators exist to report. The only `Result`-shaped failure is project
//! state the host failed to hand over in one piece.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to parse project JSON: {0}")]
    Json(#[from] serde_json::Error),
}
