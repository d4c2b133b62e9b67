//! Outgoing response envelope.
//!
//! # Responsibilities
//! - Mirror the API Gateway proxy response shape
//! - Produce the standard not-found response
//! - Convert into an axum response for local serving
//!
//! # Design Decisions
//! - The not-found body is a fixed literal, not re-serialized JSON
//! - Headers that are not valid HTTP are dropped during axum conversion

use std::collections::HashMap;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Body of every unmatched request.
pub const NOT_FOUND_BODY: &str = r#"{"error": "404 Not Found"}"#;

/// An API Gateway style proxy response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// A response whose body is `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(
        status_code: u16,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(Self::new(status_code)
            .with_header(CONTENT_TYPE, APPLICATION_JSON)
            .with_body(body))
    }

    /// The response for a request no route matched.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND.as_u16())
            .with_header(CONTENT_TYPE, APPLICATION_JSON)
            .with_body(NOT_FOUND_BODY)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_not_found_shape() {
        let resp = ProxyResponse::not_found();

        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.body, r#"{"error": "404 Not Found"}"#);

        let body: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(body["error"], "404 Not Found");
    }

    #[test]
    fn test_json_constructor() {
        let resp = ProxyResponse::json(201, &serde_json::json!({"id": 7})).unwrap();

        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.header(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(resp.body, r#"{"id":7}"#);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(ProxyResponse::new(204)).unwrap();

        assert_eq!(value["statusCode"], 204);
        assert_eq!(value["isBase64Encoded"], false);
        assert!(value["headers"].as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_into_axum_response() {
        let response = ProxyResponse::not_found()
            .with_header("X-Bad Header", "dropped")
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(!response
            .headers()
            .keys()
            .any(|name| name.as_str().starts_with("x-bad")));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
    }

    #[test]
    fn test_invalid_status_becomes_500() {
        let response = ProxyResponse::new(42).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
