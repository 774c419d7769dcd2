//! JSON-RPC protocol types for MCP communication.
//!
//! This module defines the message structures used in the JSON-RPC 2.0
//! protocol spoken with MCP clients.
//!
//! # Protocol Overview
//!
//! - **Requests**: Client → gateway (`initialize`, `tools/list`, `tools/call`, ...)
//! - **Responses**: Gateway → client (result or error)
//! - **Notifications**: Both directions (`notifications/initialized` in,
//!   `notifications/message` out)

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use smartlead_domain::core::logging::LogLevel;

pub const JSONRPC_VERSION: &str = "2.0";

/// MCP revision this server implements
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

pub const MCP_SERVER_NAME: &str = "smartlead-mcp";

/// Logger name attached to protocol-native log notifications
pub const MCP_LOGGER_NAME: &str = "smartlead-mcp";

// JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }
}

/// JSON-RPC response sent from gateway → client.
///
/// Exactly one of `result` / `error` is present.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponseOut {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponseOut {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Notification sent from gateway → client
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcNotificationOut {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Value,
}

impl JsonRpcNotificationOut {
    /// `notifications/message` carrying one log entry
    pub fn log_message(level: LogLevel, data: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: "notifications/message",
            params: json!({
                "level": level,
                "logger": MCP_LOGGER_NAME,
                "data": data,
            }),
        }
    }
}

/// Parameters of a `tools/call` request
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Parameters of a `logging/setLevel` request
#[derive(Debug, Clone, Deserialize)]
pub struct SetLevelParams {
    pub level: String,
}

/// Result of `initialize`
pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "capabilities": {
            "tools": {
                "listChanged": false
            },
            "logging": {}
        },
        "serverInfo": {
            "name": MCP_SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let response = JsonRpcResponseOut::success(json!(1), json!({}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"jsonrpc": "2.0", "id": 1, "result": {}}));
    }

    #[test]
    fn test_error_response_shape() {
        let response =
            JsonRpcResponseOut::failure(json!("abc"), RpcError::method_not_found("foo/bar"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["error"]["message"], "Method not found: foo/bar");
        assert!(value.get("result").is_none());
        assert!(value["error"].get("data").is_none());
    }

    #[test]
    fn test_log_notification_shape() {
        let notification = JsonRpcNotificationOut::log_message(LogLevel::Warning, json!("slow"));
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["method"], "notifications/message");
        assert_eq!(value["params"]["level"], "warning");
        assert_eq!(value["params"]["logger"], "smartlead-mcp");
        assert_eq!(value["params"]["data"], "slow");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_tool_call_params() {
        let params: ToolCallParams =
            serde_json::from_value(json!({"name": "get_campaign"})).unwrap();
        assert_eq!(params.name, "get_campaign");
        assert!(params.arguments.is_none());

        assert!(serde_json::from_value::<ToolCallParams>(json!({"arguments": {}})).is_err());
    }

    #[test]
    fn test_initialize_result() {
        let result = initialize_result();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert!(result["capabilities"]["logging"].is_object());
        assert_eq!(result["serverInfo"]["name"], "smartlead-mcp");
    }
}
