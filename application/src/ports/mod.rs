//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod campaign_api;
pub mod log_sink;
pub mod tool_schema;
