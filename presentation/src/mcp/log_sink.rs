//! Protocol-native log sink.
//!
//! Sends gateway log entries to the client as MCP `notifications/message`
//! frames on the connection's outbound queue.

use crate::mcp::protocol::JsonRpcNotificationOut;
use crate::mcp::transport::Outbound;
use smartlead_application::ports::log_sink::{LogData, LogSink};
use smartlead_domain::core::logging::{LogLevel, LoggingMode};
use std::sync::RwLock;

/// [`LogSink`] for [`LoggingMode::ProtocolNative`].
///
/// Entries below the minimum level set through `logging/setLevel` are dropped.
#[derive(Debug)]
pub struct ProtocolLogSink {
    outbound: Outbound,
    min_level: RwLock<LogLevel>,
}

impl ProtocolLogSink {
    pub fn new(outbound: Outbound) -> Self {
        Self {
            outbound,
            min_level: RwLock::new(LogLevel::Info),
        }
    }

    pub fn set_min_level(&self, level: LogLevel) {
        if let Ok(mut min_level) = self.min_level.write() {
            *min_level = level;
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
            .read()
            .map(|level| *level)
            .unwrap_or(LogLevel::Info)
    }
}

impl LogSink for ProtocolLogSink {
    fn mode(&self) -> LoggingMode {
        LoggingMode::ProtocolNative
    }

    fn log(&self, level: LogLevel, data: LogData) {
        if level < self.min_level() {
            return;
        }
        self.outbound
            .send(&JsonRpcNotificationOut::log_message(level, data.to_value()));
    }
}
