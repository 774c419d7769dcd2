//! MCP server loop.
//!
//! Reads newline-delimited JSON-RPC frames, answers protocol requests inline,
//! and runs each `tools/call` as its own task. All output, responses and
//! protocol-native log notifications alike, leaves through one [`Outbound`]
//! queue drained by a single writer task.

use crate::mcp::error::{McpError, Result};
use crate::mcp::log_sink::ProtocolLogSink;
use crate::mcp::protocol::{
    JsonRpcResponseOut, RpcError, SetLevelParams, ToolCallParams, initialize_result,
};
use crate::mcp::transport::{MessageKind, Outbound, Outgoing, classify_message, write_loop};
use serde_json::{Value, json};
use smartlead_application::ports::campaign_api::CampaignApi;
use smartlead_application::ports::tool_schema::ToolSchemaPort;
use smartlead_application::use_cases::invoke_tool::InvokeToolUseCase;
use smartlead_domain::core::logging::LogLevel;
use smartlead_domain::tool::ToolRequest;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// One MCP connection's server.
pub struct McpServer<A: CampaignApi + 'static> {
    use_case: Arc<InvokeToolUseCase<A>>,
    schema: Arc<dyn ToolSchemaPort>,
    outbound: Outbound,
    protocol_log: Option<Arc<ProtocolLogSink>>,
}

impl<A: CampaignApi + 'static> McpServer<A> {
    /// `outbound` must be the sending half of the queue later passed to [`serve`](Self::serve).
    pub fn new(
        use_case: Arc<InvokeToolUseCase<A>>,
        schema: Arc<dyn ToolSchemaPort>,
        outbound: Outbound,
    ) -> Self {
        Self {
            use_case,
            schema,
            outbound,
            protocol_log: None,
        }
    }

    /// Let `logging/setLevel` adjust this protocol-native sink.
    pub fn with_protocol_log(mut self, sink: Arc<ProtocolLogSink>) -> Self {
        self.protocol_log = Some(sink);
        self
    }

    /// Serve until `reader` reaches EOF.
    ///
    /// In-flight tool calls are awaited and the writer flushed before returning.
    pub async fn serve<R, W>(
        self,
        reader: R,
        writer: W,
        rx: mpsc::UnboundedReceiver<Outgoing>,
    ) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(mode = %self.use_case.context().mode(), "MCP server started");
        let writer_task = tokio::spawn(write_loop(writer, rx));

        let mut tasks = JoinSet::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let read_result = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break Ok(()),
                Ok(_) => {
                    match std::str::from_utf8(&buf) {
                        Ok(text) => {
                            let line = text.trim();
                            if !line.is_empty() {
                                self.handle_frame(line, &mut tasks);
                            }
                        }
                        Err(e) => self.reject_unparsable(e),
                    }
                    while let Some(finished) = tasks.try_join_next() {
                        log_join_failure(finished);
                    }
                }
                Err(e) => break Err(McpError::from(e)),
            }
        };

        debug!(in_flight = tasks.len(), "Input closed, waiting for in-flight tool calls");
        while let Some(finished) = tasks.join_next().await {
            log_join_failure(finished);
        }

        self.outbound.close();
        writer_task
            .await
            .map_err(|e| McpError::WriterTask(e.to_string()))??;
        info!("MCP server stopped");
        read_result
    }

    /// Answer a frame that is not JSON text with a null-id parse error.
    fn reject_unparsable(&self, error: impl std::fmt::Display) {
        warn!("Unparsable frame: {}", error);
        self.respond(JsonRpcResponseOut::failure(
            Value::Null,
            RpcError::parse_error(format!("Parse error: {}", error)),
        ));
    }

    fn handle_frame(&self, line: &str, tasks: &mut JoinSet<()>) {
        let frame: Value = match serde_json::from_str(line) {
            Ok(frame) => frame,
            Err(e) => {
                self.reject_unparsable(e);
                return;
            }
        };

        match classify_message(&frame) {
            MessageKind::Request { id, method } => {
                let params = frame.get("params").cloned().unwrap_or(Value::Null);
                self.handle_request(id, &method, params, tasks);
            }
            MessageKind::Notification { method } => self.handle_notification(&method),
            MessageKind::Response => debug!("Ignoring client response frame"),
            MessageKind::Invalid { id, reason } => {
                self.respond(JsonRpcResponseOut::failure(
                    id,
                    RpcError::invalid_request(reason),
                ));
            }
        }
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => debug!("Client initialized"),
            // Tool calls always run to completion
            "notifications/cancelled" => debug!("Ignoring cancellation"),
            other => debug!(method = other, "Ignoring unknown notification"),
        }
    }

    fn handle_request(&self, id: Value, method: &str, params: Value, tasks: &mut JoinSet<()>) {
        debug!(%id, method, "Request");
        let response = match method {
            "initialize" => JsonRpcResponseOut::success(id, initialize_result()),
            "ping" => JsonRpcResponseOut::success(id, json!({})),
            "tools/list" => {
                let tools = self.schema.all_tools_schema(self.use_case.catalog());
                JsonRpcResponseOut::success(id, json!({ "tools": tools }))
            }
            "tools/call" => match serde_json::from_value::<ToolCallParams>(params) {
                Ok(params) => {
                    self.spawn_tool_call(id, params, tasks);
                    return;
                }
                Err(e) => JsonRpcResponseOut::failure(
                    id,
                    RpcError::invalid_params(format!(
                        "tools/call requires a string field 'name': {}",
                        e
                    )),
                ),
            },
            "logging/setLevel" => match self.set_level(params) {
                Ok(()) => JsonRpcResponseOut::success(id, json!({})),
                Err(error) => JsonRpcResponseOut::failure(id, error),
            },
            other => JsonRpcResponseOut::failure(id, RpcError::method_not_found(other)),
        };
        self.respond(response);
    }

    fn spawn_tool_call(&self, id: Value, params: ToolCallParams, tasks: &mut JoinSet<()>) {
        let use_case = Arc::clone(&self.use_case);
        let outbound = self.outbound.clone();
        let request = ToolRequest {
            name: params.name,
            arguments: params.arguments,
        };

        tasks.spawn(async move {
            let result = use_case.execute(request).await;
            let response = match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponseOut::success(id, value),
                Err(e) => JsonRpcResponseOut::failure(id, RpcError::internal(e.to_string())),
            };
            outbound.send(&response);
        });
    }

    fn set_level(&self, params: Value) -> std::result::Result<(), RpcError> {
        let params: SetLevelParams = serde_json::from_value(params)
            .map_err(|e| RpcError::invalid_params(format!("logging/setLevel: {}", e)))?;
        let level: LogLevel = params.level.parse().map_err(RpcError::invalid_params)?;

        match &self.protocol_log {
            Some(sink) => sink.set_min_level(level),
            None => debug!(%level, "logging/setLevel has no effect on side-channel logging"),
        }
        Ok(())
    }

    fn respond(&self, response: JsonRpcResponseOut) {
        if !self.outbound.send(&response) {
            warn!("Outbound channel closed, dropping response");
        }
    }
}

fn log_join_failure(finished: std::result::Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        warn!("Tool call task failed: {}", e);
    }
}
