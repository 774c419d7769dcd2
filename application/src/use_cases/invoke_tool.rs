//! Invoke Tool use case.
//!
//! Dispatches one tool invocation end to end: look the tool up, validate the
//! argument bag, run its remote request under the retry policy, and normalize
//! whatever happened into a [`ToolResult`].

use crate::ports::campaign_api::{CampaignApi, RemoteError};
use crate::ports::log_sink::GatewayContext;
use crate::use_cases::normalize::normalize;
use crate::use_cases::retry::RetryExecutor;
use serde_json::{Value, json};
use smartlead_domain::core::error::ArgumentError;
use smartlead_domain::core::logging::LogLevel;
use smartlead_domain::tool::{ToolCatalog, ToolRequest, ToolResult};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while invoking a tool.
///
/// None of these escape [`InvokeToolUseCase::execute`]; they are reported
/// inside the result envelope.
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Arguments are required for tool '{0}'")]
    MissingArguments(String),

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl From<ArgumentError> for InvocationError {
    fn from(error: ArgumentError) -> Self {
        match error {
            ArgumentError::Missing { tool } => InvocationError::MissingArguments(tool),
            ArgumentError::Invalid { tool, reason } => {
                InvocationError::InvalidArguments { tool, reason }
            }
        }
    }
}

/// Use case for invoking a single tool.
///
/// Stateless per call: shared between concurrent invocations by `Arc`.
pub struct InvokeToolUseCase<A: CampaignApi + 'static> {
    catalog: Arc<ToolCatalog>,
    api: Arc<A>,
    executor: RetryExecutor,
    context: Arc<GatewayContext>,
}

impl<A: CampaignApi + 'static> InvokeToolUseCase<A> {
    pub fn new(
        catalog: Arc<ToolCatalog>,
        api: Arc<A>,
        executor: RetryExecutor,
        context: Arc<GatewayContext>,
    ) -> Self {
        Self {
            catalog,
            api,
            executor,
            context,
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn context(&self) -> &GatewayContext {
        &self.context
    }

    /// Run one invocation. Always returns exactly one result.
    pub async fn execute(&self, request: ToolRequest) -> ToolResult {
        let started = Instant::now();
        self.context.log(
            LogLevel::Info,
            json!({"event": "tool_call_started", "tool": request.name}),
        );

        let outcome = self.invoke(&request).await;
        if let Err(error) = &outcome {
            self.context.log(
                LogLevel::Error,
                json!({
                    "event": "tool_call_failed",
                    "tool": request.name,
                    "error": error.to_string(),
                }),
            );
        }

        let result = normalize(outcome);
        self.context.log(
            LogLevel::Info,
            json!({
                "event": "tool_call_completed",
                "tool": request.name,
                "is_error": result.is_error(),
                "elapsed_ms": started.elapsed().as_millis() as u64,
            }),
        );
        result
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<Value, InvocationError> {
        let entry = self
            .catalog
            .get(&request.name)
            .ok_or_else(|| InvocationError::UnknownTool(request.name.clone()))?;

        let remote = entry.prepare(request.arguments.as_ref())?;
        debug!(
            tool = %request.name,
            method = %remote.method,
            path = %remote.path,
            "Dispatching remote request"
        );

        let value = self
            .executor
            .run(&request.name, || self.api.call(&remote))
            .await?;
        Ok(value)
    }
}
