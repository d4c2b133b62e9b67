//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     register(method, path, handler)
//!     → validate method token and path
//!     → radix insert of "<METHOD> <path>"
//!     → Ok or RouteError (table unchanged)
//!
//! Incoming Request (ProxyRequest):
//!     → router.rs (compose key, radix search)
//!     → handler.rs (call handler with bound captures)
//!     → Return: handler's ProxyResponse or 404
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, read-only while serving
//! - Literal segments win over captures at the same position
//! - Deterministic: same input always matches same route

pub mod error;
pub mod handler;
pub mod router;

pub use error::RouteError;
pub use handler::{BoxError, Handler, HandlerResult, StaticHandler};
pub use router::{is_valid_method, is_valid_path, LambdaMux, Resolved};
