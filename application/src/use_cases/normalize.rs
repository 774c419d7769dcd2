//! Result normalizer.
//!
//! Every invocation outcome ends here and leaves as exactly one [`ToolResult`].

use crate::use_cases::invoke_tool::InvocationError;
use serde_json::Value;
use smartlead_domain::tool::ToolResult;

/// Convert an invocation outcome into the uniform result envelope.
///
/// Success payloads are pretty-printed JSON, so equal payloads always render
/// to identical text.
pub fn normalize(outcome: Result<Value, InvocationError>) -> ToolResult {
    match outcome {
        Ok(payload) => ToolResult::success(render_payload(&payload)),
        Err(error) => ToolResult::error(error_message(&error)),
    }
}

fn render_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

/// Human-readable failure text, preferring what the remote service said.
pub fn error_message(error: &InvocationError) -> String {
    match error {
        InvocationError::Remote(remote) => {
            if let Some(message) = remote.remote_message() {
                return message;
            }
            if !remote.message.trim().is_empty() {
                return remote.message.clone();
            }
            match &remote.body {
                Some(body) if !body.is_null() => body.to_string(),
                _ => "Remote call failed".to_string(),
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::campaign_api::RemoteError;
    use serde_json::json;

    #[test]
    fn test_success_is_pretty_json() {
        let result = normalize(Ok(json!({"id": 7, "name": "Q3"})));
        assert!(!result.is_error());
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.text(), "{\n  \"id\": 7,\n  \"name\": \"Q3\"\n}");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let payload = json!({"campaigns": [{"id": 1}, {"id": 2}], "total": 2});
        let first = normalize(Ok(payload.clone()));
        let second = normalize(Ok(payload));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_null_payload() {
        assert_eq!(normalize(Ok(Value::Null)).text(), "null");
    }

    #[test]
    fn test_remote_message_preferred() {
        let error = RemoteError::from_status(422, Some(json!({"message": "Invalid timezone"})));
        let result = normalize(Err(error.into()));
        assert!(result.is_error());
        assert_eq!(result.text(), "Invalid timezone");
    }

    #[test]
    fn test_falls_back_to_own_message() {
        let error = RemoteError::from_status(500, Some(json!({"status": "down"})));
        let result = normalize(Err(error.into()));
        assert_eq!(result.text(), "Request failed with status code 500");
    }

    #[test]
    fn test_falls_back_to_body_then_generic() {
        let with_body = RemoteError {
            status: None,
            message: String::new(),
            body: Some(json!({"code": 9})),
        };
        assert_eq!(normalize(Err(with_body.into())).text(), r#"{"code":9}"#);

        let bare = RemoteError::new("");
        assert_eq!(normalize(Err(bare.into())).text(), "Remote call failed");
    }

    #[test]
    fn test_unknown_tool_and_argument_errors() {
        let unknown = normalize(Err(InvocationError::UnknownTool("nope".into())));
        assert!(unknown.is_error());
        assert_eq!(unknown.text(), "Unknown tool: nope");

        let missing = normalize(Err(InvocationError::MissingArguments("get_campaign".into())));
        assert!(missing.is_error());
        assert!(missing.text().contains("get_campaign"));
    }
}
