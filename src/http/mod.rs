//! Serverless HTTP envelope.
//!
//! # Data Flow
//! ```text
//! API Gateway proxy event (JSON)
//!     → request.rs (ProxyRequest, request ID, path parameters)
//!     → [routing layer resolves "<METHOD> <path>"]
//!     → handler
//!     → response.rs (ProxyResponse, 404 shape, axum conversion)
//!     → Returned to the invoker
//! ```
//!
//! # Design Decisions
//! - Field names follow the proxy event's camelCase JSON
//! - Null maps in incoming events deserialize as empty maps
//! - Path parameters are filled in by the router, never by the caller

pub mod request;
pub mod response;

pub use request::{ProxyRequest, RequestContext, X_REQUEST_ID};
pub use response::{ProxyResponse, APPLICATION_JSON, CONTENT_TYPE, NOT_FOUND_BODY};
