//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP server operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that end an MCP connection
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Writer task failed: {0}")]
    WriterTask(String),
}
