//! Description of one remote HTTP operation.
//!
//! Tools never talk HTTP themselves: each one turns its validated arguments
//! into a [`RemoteRequest`], which the infrastructure adapter executes.

use serde::Serialize;
use serde_json::{Map, Value};

/// HTTP method of a remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully described remote call: method, path, query pairs and optional JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRequest {
    pub method: HttpMethod,
    /// Path relative to the API base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RemoteRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_optional_query<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with_query(key, v),
            None => self,
        }
    }

    /// Set a field on the JSON object body, creating the body if needed
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let body = self
            .body
            .get_or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = body {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Set a body field only when a value is present
    pub fn with_optional_field<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with_field(key, v),
            None => self,
        }
    }

    /// Send an empty JSON object body (for POST endpoints that take none)
    pub fn with_empty_body(mut self) -> Self {
        self.body.get_or_insert_with(|| Value::Object(Map::new()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = RemoteRequest::post("/campaigns/create")
            .with_field("name", "Q3 outreach")
            .with_optional_field("client_id", None::<i64>)
            .with_optional_query("include_tags", Some(true));

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/campaigns/create");
        assert_eq!(
            request.query,
            vec![("include_tags".to_string(), "true".to_string())]
        );
        assert_eq!(request.body, Some(serde_json::json!({"name": "Q3 outreach"})));
    }

    #[test]
    fn test_get_has_no_body() {
        let request = RemoteRequest::get("/campaigns").with_optional_query("client_id", None::<i64>);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
