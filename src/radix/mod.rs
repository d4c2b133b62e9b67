//! Radix tree subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (before serving):
//!     "<METHOD> <path>" key
//!     → insert.rs (walk by leading byte, split labels, detect param conflicts)
//!     → edges.rs (sorted edge list, binary search)
//!     → node.rs (label → literal/param segment metadata)
//!
//! Lookup (once per request):
//!     "<METHOD> <path>" query
//!     → search.rs (literal edges first, then param fallback)
//!     → Return: Match { value, pattern, params } or None
//! ```
//!
//! # Design Decisions
//! - Nodes live in an arena and are addressed by `NodeId`; a split rewrites
//!   an index slot in the parent's edge list
//! - Edges are keyed by the leading byte of the child's label
//! - The method is part of the key, not a separate index dimension
//! - No logging here: conflicts come back as `RouteConflict`

pub mod edges;
pub mod error;
pub mod insert;
pub mod node;
pub mod search;
pub mod tree;
mod util;

pub use error::RouteConflict;
pub use node::{Node, NodeId, PARAM_MARKER, SEGMENT_SEPARATOR};
pub use search::{Match, Params};
pub use tree::RadixTree;
