//! Recording fakes for the application ports.

use crate::ports::campaign_api::{CampaignApi, RemoteError};
use crate::ports::log_sink::{LogData, LogSink};
use async_trait::async_trait;
use serde_json::Value;
use smartlead_domain::core::logging::{LogLevel, LoggingMode};
use smartlead_domain::core::remote::RemoteRequest;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Sink that keeps every entry in memory
pub struct RecordingLogSink {
    mode: LoggingMode,
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogSink {
    pub fn new(mode: LoggingMode) -> Self {
        Self {
            mode,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn at_level(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }
}

impl LogSink for RecordingLogSink {
    fn mode(&self) -> LoggingMode {
        self.mode
    }

    fn log(&self, level: LogLevel, data: LogData) {
        self.entries.lock().unwrap().push((level, data.render()));
    }
}

/// API fake answering from a script and recording each request.
///
/// When the script runs dry it answers `{"ok": true}`.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Value, RemoteError>>>,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, response: Result<Value, RemoteError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RemoteRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CampaignApi for ScriptedApi {
    async fn call(&self, request: &RemoteRequest) -> Result<Value, RemoteError> {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({"ok": true})))
    }
}
