//! Port for gateway logging.
//!
//! Where log entries go is decided once per process by the [`LoggingMode`]:
//! a side channel disjoint from the protocol stream, or first-class protocol
//! messages. Use cases only see the [`LogSink`] trait through a shared
//! [`GatewayContext`].

use serde_json::Value;
use smartlead_domain::core::logging::{LogLevel, LoggingMode};
use std::sync::Arc;

/// Payload of a log entry.
#[derive(Debug, Clone, PartialEq)]
pub enum LogData {
    Text(String),
    Structured(Value),
}

impl LogData {
    /// Render to a single string. Structured data is serialized as compact JSON.
    pub fn render(&self) -> String {
        match self {
            LogData::Text(text) => text.clone(),
            LogData::Structured(value) => value.to_string(),
        }
    }

    /// Render as a JSON value for protocol-native emission
    pub fn to_value(&self) -> Value {
        match self {
            LogData::Text(text) => Value::String(text.clone()),
            LogData::Structured(value) => value.clone(),
        }
    }
}

impl From<&str> for LogData {
    fn from(text: &str) -> Self {
        LogData::Text(text.to_string())
    }
}

impl From<String> for LogData {
    fn from(text: String) -> Self {
        LogData::Text(text)
    }
}

impl From<Value> for LogData {
    fn from(value: Value) -> Self {
        LogData::Structured(value)
    }
}

/// Port for emitting log entries.
///
/// The `log` method is synchronous and non-fallible; a sink that cannot
/// deliver an entry drops it.
pub trait LogSink: Send + Sync {
    /// Mode this sink implements. Fixed for the sink's lifetime.
    fn mode(&self) -> LoggingMode;

    fn log(&self, level: LogLevel, data: LogData);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoLogSink;

impl LogSink for NoLogSink {
    fn mode(&self) -> LoggingMode {
        LoggingMode::SideChannel
    }

    fn log(&self, _level: LogLevel, _data: LogData) {}
}

/// Process-scoped state shared by every request handler.
///
/// Holds the logging sink chosen at startup. Cloned by `Arc`, never mutated.
pub struct GatewayContext {
    mode: LoggingMode,
    sink: Arc<dyn LogSink>,
}

impl GatewayContext {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            mode: sink.mode(),
            sink,
        }
    }

    pub fn mode(&self) -> LoggingMode {
        self.mode
    }

    pub fn log(&self, level: LogLevel, data: impl Into<LogData>) {
        self.sink.log(level, data.into());
    }
}

impl Default for GatewayContext {
    fn default() -> Self {
        Self::new(Arc::new(NoLogSink))
    }
}

impl std::fmt::Debug for GatewayContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
