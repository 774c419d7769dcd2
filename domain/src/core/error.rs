//! Domain error types

use thiserror::Error;

/// Argument validation failures.
///
/// Produced by a tool's validator before any remote call is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Arguments are required for tool '{tool}'")]
    Missing { tool: String },

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    Invalid { tool: String, reason: String },
}

impl ArgumentError {
    pub fn missing(tool: impl Into<String>) -> Self {
        ArgumentError::Missing { tool: tool.into() }
    }

    pub fn invalid(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        ArgumentError::Invalid {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Name of the tool whose arguments were rejected
    pub fn tool(&self) -> &str {
        match self {
            ArgumentError::Missing { tool } | ArgumentError::Invalid { tool, .. } => tool,
        }
    }
}
