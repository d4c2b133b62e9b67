//! Incoming request envelope.
//!
//! # Responsibilities
//! - Mirror the API Gateway proxy request shape
//! - Generate a unique request ID (UUID v4) for synthesized requests
//! - Build the composite routing key from method and path

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Header carrying a caller-supplied request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// An API Gateway style proxy request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    /// Resource template as configured in the gateway, if any.
    pub resource: String,

    /// Raw request path, e.g. `/users/42`.
    pub path: String,

    /// HTTP method, e.g. `GET`.
    pub http_method: String,

    #[serde(deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,

    #[serde(deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,

    /// Captures bound by the router for the matched route.
    #[serde(deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,

    pub body: Option<String>,

    pub is_base64_encoded: bool,

    pub request_context: RequestContext,
}

/// Gateway-provided request metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub request_id: String,
    pub stage: String,
}

impl ProxyRequest {
    /// Create a request for `method` and `path` with a fresh request ID.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            http_method: method.into(),
            request_context: RequestContext {
                request_id: Uuid::new_v4().to_string(),
                ..RequestContext::default()
            },
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The `x-request-id` header if present, else the gateway request ID.
    pub fn request_id(&self) -> &str {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(X_REQUEST_ID))
            .map(|(_, value)| value.as_str())
            .unwrap_or(&self.request_context.request_id)
    }

    /// The routing key, e.g. `GET /users/42`.
    pub fn route_key(&self) -> String {
        format!("{} {}", self.http_method, self.path)
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }
}

/// Gateway events send `null` instead of an empty map.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_request_id() {
        let a = ProxyRequest::new("GET", "/users");
        let b = ProxyRequest::new("GET", "/users");

        assert_eq!(a.http_method, "GET");
        assert_eq!(a.path, "/users");
        assert!(Uuid::parse_str(a.request_id()).is_ok());
        assert_ne!(a.request_id(), b.request_id());
        assert_eq!(a.route_key(), "GET /users");
    }

    #[test]
    fn test_request_id_header_wins() {
        let req = ProxyRequest::new("GET", "/").with_header("X-Request-ID", "abc-123");
        assert_eq!(req.request_id(), "abc-123");
    }

    #[test]
    fn test_deserialize_gateway_event() {
        let event = r#"{
            "resource": "/{proxy+}",
            "path": "/pet/42",
            "httpMethod": "GET",
            "headers": {"Accept": "application/json"},
            "queryStringParameters": null,
            "pathParameters": null,
            "body": null,
            "isBase64Encoded": false,
            "requestContext": {"requestId": "c6af9ac6", "stage": "prod"}
        }"#;

        let req: ProxyRequest = serde_json::from_str(event).unwrap();
        assert_eq!(req.http_method, "GET");
        assert_eq!(req.path, "/pet/42");
        assert!(req.query_string_parameters.is_empty());
        assert!(req.path_parameters.is_empty());
        assert_eq!(req.headers.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(req.request_id(), "c6af9ac6");
        assert_eq!(req.request_context.stage, "prod");
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let req: ProxyRequest =
            serde_json::from_str(r#"{"httpMethod": "POST", "path": "/pet"}"#).unwrap();
        assert_eq!(req.http_method, "POST");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }
}
