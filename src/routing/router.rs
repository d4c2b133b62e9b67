//! Route table and dispatch.
//!
//! # Responsibilities
//! - Key every route as `"<METHOD> <path>"` in one radix tree
//! - Resolve a request to its handler and bound captures
//! - Dispatch to the handler or answer with the not-found response
//!
//! # Design Decisions
//! - Built once, then only read; concurrent `resolve`/`handle` need no locks
//! - The method is an ordinary literal prefix of the key, not a separate index
//! - Conflicts are returned to the caller, never logged here

use std::fmt;

use crate::config::RouteConfig;
use crate::http::{ProxyRequest, ProxyResponse};
use crate::radix::{Params, RadixTree};
use crate::routing::error::RouteError;
use crate::routing::handler::{Handler, HandlerResult, StaticHandler};

/// A route resolved for one request.
pub struct Resolved<'a> {
    pub handler: &'a dyn Handler,

    /// The registered pattern, e.g. `GET /users/:id`.
    pub pattern: String,

    pub params: Params,
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Method + path route table over a radix tree.
#[derive(Default)]
pub struct LambdaMux {
    tree: RadixTree<Box<dyn Handler>>,
}

impl LambdaMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table of fixed-response handlers from configuration.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteError> {
        let mut mux = Self::new();
        for route in routes {
            let mut handler = StaticHandler::new(route.status);
            handler.content_type = route.content_type.clone();
            handler.body = route.body.clone();
            mux.register(&route.method, &route.path, handler)?;
        }
        Ok(mux)
    }

    /// Register `handler` for `method` and `path`.
    ///
    /// On error nothing is registered and existing routes are untouched.
    /// Registering the same method and path again replaces the handler.
    pub fn register<H: Handler>(
        &mut self,
        method: &str,
        path: &str,
        handler: H,
    ) -> Result<(), RouteError> {
        if !is_valid_method(method) {
            return Err(RouteError::InvalidMethod(method.to_string()));
        }
        if !is_valid_path(path) {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let key = route_key(method, path);
        self.tree.insert(&key, Box::new(handler))?;
        tracing::debug!(route = %key, "Registered route");
        Ok(())
    }

    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("GET", path, handler)
    }

    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("POST", path, handler)
    }

    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("PUT", path, handler)
    }

    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("PATCH", path, handler)
    }

    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("DELETE", path, handler)
    }

    pub fn head<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("HEAD", path, handler)
    }

    pub fn options<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register("OPTIONS", path, handler)
    }

    /// Find the handler for `method` and `path`. A miss is `None`.
    pub fn resolve(&self, method: &str, path: &str) -> Option<Resolved<'_>> {
        let found = self.tree.search(route_key(method, path))?;
        Some(Resolved {
            handler: &**found.value,
            pattern: found.pattern,
            params: found.params,
        })
    }

    /// Dispatch `request` to its handler, or answer 404.
    ///
    /// Bound captures are merged into `request.path_parameters` before the
    /// handler runs.
    pub async fn handle(&self, mut request: ProxyRequest) -> HandlerResult {
        let Some(resolved) = self.resolve(&request.http_method, &request.path) else {
            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                request_id = %request.request_id(),
                "No route matched"
            );
            return Ok(ProxyResponse::not_found());
        };

        tracing::debug!(
            pattern = %resolved.pattern,
            request_id = %request.request_id(),
            "Route matched"
        );
        request.path_parameters.extend(resolved.params);
        resolved.handler.call(request).await
    }

    /// Every registered pattern, sorted.
    pub fn routes(&self) -> Vec<String> {
        self.tree.all_complete_patterns()
    }

    /// Every edge label in the underlying tree, sorted.
    pub fn edge_labels(&self) -> Vec<String> {
        self.tree.all_edge_labels()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl fmt::Debug for LambdaMux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaMux")
            .field("routes", &self.routes())
            .finish()
    }
}

fn route_key(method: &str, path: &str) -> String {
    format!("{method} {path}")
}

/// True if `method` is a non-empty HTTP token (RFC 9110 `tchar`s).
pub fn is_valid_method(method: &str) -> bool {
    !method.is_empty()
        && method.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^'
                        | b'_' | b'`' | b'|' | b'~'
                )
        })
}

/// True if `path` starts with `/` and has no whitespace.
pub fn is_valid_path(path: &str) -> bool {
    path.starts_with('/') && !path.bytes().any(|b| b.is_ascii_whitespace())
}
