//! Errors raised while building the tree.

use thiserror::Error;

/// A parameter segment collides with an already registered sibling that
/// captures under a different name at the same branch point.
///
/// The tree is left exactly as it was before the rejected insert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route {key:?} captures `:{conflicting}` where an existing route captures `:{existing}`")]
pub struct RouteConflict {
    /// The key whose insertion was rejected.
    pub key: String,

    /// Capture name already registered at the branch point.
    pub existing: String,

    /// Capture name the rejected key would have introduced.
    pub conflicting: String,
}
