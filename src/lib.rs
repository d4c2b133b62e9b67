//! Radix-tree request router for serverless HTTP handlers.
//!
//! Routes are registered as `"<METHOD> <path>"` keys, where `:name` path
//! segments capture, and resolved with literal segments taking precedence
//! over captures.
//!
//! ```
//! use lambdamux::{LambdaMux, StaticHandler};
//!
//! let mut mux = LambdaMux::new();
//! mux.get("/users/:id", StaticHandler::new(200)).unwrap();
//! mux.get("/users/history", StaticHandler::new(200)).unwrap();
//!
//! let resolved = mux.resolve("GET", "/users/42").unwrap();
//! assert_eq!(resolved.pattern, "GET /users/:id");
//! assert_eq!(resolved.params["id"], "42");
//!
//! assert!(mux.get("/users/:username", StaticHandler::new(200)).is_err());
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod radix;
pub mod routing;

pub use config::MuxConfig;
pub use http::{ProxyRequest, ProxyResponse};
pub use radix::{RadixTree, RouteConflict};
pub use routing::{BoxError, Handler, HandlerResult, LambdaMux, RouteError, StaticHandler};
