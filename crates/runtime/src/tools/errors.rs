use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during tool dispatch.
///
/// These are execution faults, not domain results: a search that finds no
/// hotels is a successful tool call whose payload carries an `error` field.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("execution failed: {0}")]
    Execution(String),
}
