//! Presentation layer for smartlead-mcp
//!
//! This crate contains the CLI definition and the MCP server that
//! speaks JSON-RPC to clients over a line-framed transport.

pub mod cli;
pub mod mcp;

// Re-export commonly used types
pub use cli::commands::{Cli, TransportKind};
pub use mcp::{McpError, McpServer, Outbound, Outgoing, ProtocolLogSink};
