//! Request handlers.
//!
//! # Responsibilities
//! - Define the capability the route table stores per route
//! - Adapt plain async functions and closures into handlers
//! - Provide a configurable fixed-response handler
//!
//! # Design Decisions
//! - Handlers are boxed trait objects so one table can hold any mix of them
//! - The returned future is `'static` and owns the request

use std::future::Future;

use futures_util::future::BoxFuture;
use serde_json::json;

use crate::http::{ProxyRequest, ProxyResponse, APPLICATION_JSON, CONTENT_TYPE};

/// Error type handlers may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<ProxyResponse, BoxError>;

/// Something that turns a matched request into a response.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: ProxyRequest) -> BoxFuture<'static, HandlerResult>;
}

impl<F, Fut> Handler for F
where
    F: Fn(ProxyRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, request: ProxyRequest) -> BoxFuture<'static, HandlerResult> {
        Box::pin(self(request))
    }
}

/// Answers every request with the same status and body.
///
/// Without a configured body it echoes the request path and the bound
/// path parameters as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHandler {
    pub status: u16,
    pub body: Option<String>,
    pub content_type: String,
}

impl StaticHandler {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: None,
            content_type: APPLICATION_JSON.to_string(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.content_type = content_type.into();
        self
    }

    fn respond(&self, request: &ProxyRequest) -> HandlerResult {
        let body = match &self.body {
            Some(body) => body.clone(),
            None => serde_json::to_string(&json!({
                "path": request.path,
                "params": request.path_parameters,
            }))?,
        };

        Ok(ProxyResponse::new(self.status)
            .with_header(CONTENT_TYPE, self.content_type.as_str())
            .with_body(body))
    }
}

impl Handler for StaticHandler {
    fn call(&self, request: ProxyRequest) -> BoxFuture<'static, HandlerResult> {
        let result = self.respond(&request);
        Box::pin(async move { result })
    }
}
