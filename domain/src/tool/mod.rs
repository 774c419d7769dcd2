//! Tool domain module
//!
//! Defines how a remote campaign operation is exposed as a callable **tool**.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ ToolRequest  │───▶│ ToolCatalog  │───▶│ RemoteRequest │───▶│ ToolResult   │
//! │ (name, args) │    │ (validate)   │    │ (one HTTP op) │    │ (envelope)   │
//! └──────────────┘    └──────────────┘    └───────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`CampaignTool`]: implemented once per tool: definition, typed arguments,
//!   shape checks and request builder
//! - [`ToolCatalog`]: ordered name → entry table used for listing and dispatch
//! - [`ToolDefinition`]: declarative schema for a single tool
//! - [`ToolResult`]: the uniform `{content, isError}` envelope
//!
//! Everything here is pure: no I/O, no async. Execution lives behind the
//! application layer's `CampaignApi` port.

pub mod catalog;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use catalog::{ToolCatalog, ToolEntry};
pub use entities::{ToolDefinition, ToolParameter, ToolRequest};
pub use traits::CampaignTool;
pub use value_objects::{ContentBlock, ToolResult};
