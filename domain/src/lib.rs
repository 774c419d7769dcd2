//! Domain layer for smartlead-mcp
//!
//! This crate contains the tool model and the campaign tools built on it.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! Every remote Smartlead operation is exposed as one tool:
//!
//! - **Definition**: name, description and declared parameters
//! - **Arguments**: a typed shape the caller's argument bag must deserialize into
//! - **Request**: exactly one [`RemoteRequest`] built from valid arguments
//!
//! ## Result envelope
//!
//! Every outcome, success or failure, is reported to the caller as a
//! [`ToolResult`] with text content and an `isError` flag.

pub mod campaign;
pub mod core;
pub mod tool;

// Re-export commonly used types
pub use campaign::default_catalog;
pub use core::{
    error::ArgumentError,
    logging::{LogLevel, LoggingMode},
    remote::{HttpMethod, RemoteRequest},
};
pub use tool::{
    CampaignTool, ContentBlock, ToolCatalog, ToolDefinition, ToolEntry, ToolParameter, ToolRequest,
    ToolResult,
};
