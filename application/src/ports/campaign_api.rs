//! Campaign API port
//!
//! Defines the single boundary through which tools reach the remote
//! campaign service. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;
use smartlead_domain::core::remote::RemoteRequest;
use thiserror::Error;

/// HTTP status the remote service uses for rate limiting
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Failure of a remote call.
///
/// `status` is set whenever the transport got an HTTP response; `body` holds
/// the parsed JSON error body, or the raw text as a JSON string.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RemoteError {
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<Value>,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    /// Failure for a non-2xx response
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status),
            body,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether this failure means the caller is being rate limited.
    ///
    /// A structured status decides on its own. Without one, the message is
    /// searched for `429` or "rate limit" (case-insensitive).
    pub fn is_rate_limited(&self) -> bool {
        match self.status {
            Some(status) => status == RATE_LIMIT_STATUS,
            None => {
                self.message.contains("429")
                    || self.message.to_lowercase().contains("rate limit")
            }
        }
    }

    /// Message supplied by the remote service in its error body, if any.
    ///
    /// Looks at `message`, `error` and `error.message` of a JSON object body,
    /// or takes a non-empty raw text body as is.
    pub fn remote_message(&self) -> Option<String> {
        match self.body.as_ref()? {
            Value::Object(map) => {
                let text = |value: &Value| {
                    value
                        .as_str()
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                };
                map.get("message")
                    .and_then(text)
                    .or_else(|| map.get("error").and_then(text))
                    .or_else(|| {
                        map.get("error")
                            .and_then(|error| error.get("message"))
                            .and_then(text)
                    })
            }
            Value::String(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
            _ => None,
        }
    }
}

/// Port for the remote campaign service
///
/// One call executes exactly one HTTP operation. Retrying is the caller's concern.
#[async_trait]
pub trait CampaignApi: Send + Sync {
    async fn call(&self, request: &RemoteRequest) -> Result<Value, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_decides_rate_limit() {
        assert!(RemoteError::from_status(429, None).is_rate_limited());
        assert!(!RemoteError::from_status(500, None).is_rate_limited());
        // A structured status wins over wording
        assert!(!RemoteError::new("rate limit exceeded").with_status(503).is_rate_limited());
    }

    #[test]
    fn test_text_fallback_without_status() {
        assert!(RemoteError::new("HTTP 429 from upstream").is_rate_limited());
        assert!(RemoteError::new("Rate Limit reached").is_rate_limited());
        assert!(!RemoteError::new("connection reset").is_rate_limited());
    }

    #[test]
    fn test_remote_message_sources() {
        let from_message = RemoteError::from_status(400, Some(json!({"message": "bad id"})));
        assert_eq!(from_message.remote_message().as_deref(), Some("bad id"));

        let from_error = RemoteError::from_status(400, Some(json!({"error": "nope"})));
        assert_eq!(from_error.remote_message().as_deref(), Some("nope"));

        let nested = RemoteError::from_status(400, Some(json!({"error": {"message": "deep"}})));
        assert_eq!(nested.remote_message().as_deref(), Some("deep"));

        let raw = RemoteError::from_status(502, Some(json!("Bad Gateway")));
        assert_eq!(raw.remote_message().as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_remote_message_absent() {
        assert_eq!(RemoteError::new("timeout").remote_message(), None);
        assert_eq!(
            RemoteError::from_status(500, Some(json!({"ok": false}))).remote_message(),
            None
        );
        assert_eq!(RemoteError::from_status(500, Some(json!(""))).remote_message(), None);
    }

    #[test]
    fn test_status_message_format() {
        assert_eq!(
            RemoteError::from_status(404, None).to_string(),
            "Request failed with status code 404"
        );
    }
}
