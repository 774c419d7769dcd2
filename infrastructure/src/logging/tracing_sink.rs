//! Side-channel log sink.
//!
//! Forwards gateway log entries to `tracing`. The subscriber installed by the
//! binary writes to stderr or a log file, never to the protocol stream.

use smartlead_application::ports::log_sink::{LogData, LogSink};
use smartlead_domain::core::logging::{LogLevel, LoggingMode};
use tracing::{debug, error, info, warn};

/// [`LogSink`] for [`LoggingMode::SideChannel`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn mode(&self) -> LoggingMode {
        LoggingMode::SideChannel
    }

    fn log(&self, level: LogLevel, data: LogData) {
        let message = data.render();
        match level {
            LogLevel::Debug => debug!(target: "smartlead::gateway", "{}", message),
            LogLevel::Info | LogLevel::Notice => {
                info!(target: "smartlead::gateway", mcp_level = %level, "{}", message)
            }
            LogLevel::Warning => warn!(target: "smartlead::gateway", "{}", message),
            LogLevel::Error => error!(target: "smartlead::gateway", "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mode_is_side_channel() {
        assert_eq!(TracingLogSink.mode(), LoggingMode::SideChannel);
    }

    #[test]
    fn test_entries_reach_tracing() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingLogSink.log(LogLevel::Warning, LogData::from("retrying soon"));
            TracingLogSink.log(
                LogLevel::Info,
                LogData::from(json!({"event": "tool_call_completed"})),
            );
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("retrying soon"));
        assert!(output.contains(r#"{"event":"tool_call_completed"}"#));
    }
}
