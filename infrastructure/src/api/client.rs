//! Smartlead REST client.
//!
//! Implements the [`CampaignApi`] port on top of `reqwest`. The credential is
//! sent as the `api_key` query parameter on every call.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use smartlead_application::ports::campaign_api::{CampaignApi, RemoteError};
use smartlead_domain::core::remote::{HttpMethod, RemoteRequest};
use std::time::Duration;
use tracing::{debug, trace};

/// HTTP adapter for the remote campaign service
#[derive(Debug, Clone)]
pub struct SmartleadClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SmartleadClient {
    /// Build a client. `timeout` bounds each request end to end.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Parse a response body. Non-JSON text is kept as a JSON string; blank bodies are `None`.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

fn transport_error(error: reqwest::Error) -> RemoteError {
    let remote = RemoteError::new(error.to_string());
    match error.status() {
        Some(status) => remote.with_status(status.as_u16()),
        None => remote,
    }
}

#[async_trait]
impl CampaignApi for SmartleadClient {
    async fn call(&self, request: &RemoteRequest) -> Result<Value, RemoteError> {
        debug!(method = %request.method, path = %request.path, "Calling remote API");

        let mut builder = self
            .http
            .request(to_method(request.method), self.url(&request.path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        trace!(status = status.as_u16(), bytes = text.len(), "Remote API responded");

        if status.is_success() {
            Ok(parse_body(&text).unwrap_or(Value::Null))
        } else {
            Err(RemoteError::from_status(status.as_u16(), parse_body(&text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP/1.1 response and hand back the raw request.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), None);
        assert_eq!(parse_body("  \n"), None);
        assert_eq!(parse_body(r#"{"ok":true}"#), Some(json!({"ok": true})));
        assert_eq!(parse_body("Bad Gateway"), Some(json!("Bad Gateway")));
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_method(HttpMethod::Delete), Method::DELETE);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SmartleadClient::new("http://localhost/api/v1/", "k", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost/api/v1");
        assert_eq!(client.url("/campaigns"), "http://localhost/api/v1/campaigns");
    }

    #[tokio::test]
    async fn test_get_sends_key_and_query() {
        let (base, server) = serve_once("200 OK", r#"[{"id":1}]"#).await;
        let client = SmartleadClient::new(base, "secret", None).unwrap();

        let request = RemoteRequest::get("/campaigns").with_query("client_id", 5);
        let value = client.call(&request).await.unwrap();
        assert_eq!(value, json!([{"id": 1}]));

        let raw = server.await.unwrap();
        let request_line = raw.lines().next().unwrap();
        assert!(request_line.starts_with("GET /campaigns?"));
        assert!(request_line.contains("api_key=secret"));
        assert!(request_line.contains("client_id=5"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let (base, server) = serve_once("200 OK", r#"{"id":9}"#).await;
        let client = SmartleadClient::new(base, "secret", None).unwrap();

        let request = RemoteRequest::post("/campaigns/create").with_field("name", "Q3");
        client.call(&request).await.unwrap();

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /campaigns/create?api_key=secret"));
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw.ends_with(r#"{"name":"Q3"}"#));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (base, _server) = serve_once("200 OK", "").await;
        let client = SmartleadClient::new(base, "k", None).unwrap();
        let value = client
            .call(&RemoteRequest::delete("/campaigns/3"))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let (base, _server) =
            serve_once("429 Too Many Requests", r#"{"message":"Slow down"}"#).await;
        let client = SmartleadClient::new(base, "k", None).unwrap();

        let err = client
            .call(&RemoteRequest::get("/campaigns"))
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(429));
        assert_eq!(err.message, "Request failed with status code 429");
        assert_eq!(err.body, Some(json!({"message": "Slow down"})));
        assert!(err.is_rate_limited());
        assert_eq!(err.remote_message().as_deref(), Some("Slow down"));
    }

    #[tokio::test]
    async fn test_connection_failure_has_no_status() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SmartleadClient::new(format!("http://{}", addr), "k", None).unwrap();
        let err = client
            .call(&RemoteRequest::get("/campaigns"))
            .await
            .unwrap_err();
        assert_eq!(err.status, None);
        assert!(!err.is_rate_limited());
    }
}
