//! Application layer for smartlead-mcp
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{RetryPolicy, RetryPolicyError};
pub use ports::{
    campaign_api::{CampaignApi, RATE_LIMIT_STATUS, RemoteError},
    log_sink::{GatewayContext, LogData, LogSink, NoLogSink},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::invoke_tool::{InvocationError, InvokeToolUseCase};
pub use use_cases::normalize::normalize;
pub use use_cases::retry::{RetryExecutor, Retryable};
