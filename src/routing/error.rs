//! Registration errors.

use thiserror::Error;

use crate::radix::RouteConflict;

/// Reasons a route could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A capture collides with a sibling capture already registered.
    #[error(transparent)]
    Conflict(#[from] RouteConflict),

    /// Method is empty or contains characters outside the HTTP token set.
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    /// Path does not start with `/` or contains whitespace.
    #[error("invalid route path {0:?}: must start with '/' and contain no whitespace")]
    InvalidPath(String),
}
