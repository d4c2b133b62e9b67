//! Sorted edge index of a node.
//!
//! # Responsibilities
//! - Keep a node's children sorted by the leading byte of their label
//! - Binary search for the slot of a leading byte
//! - Fall back to the first parameter edge when no literal edge matches
//!
//! # Design Decisions
//! - At most one child per leading byte (branch points are prefix-free)
//! - The leading byte is cached in the edge; a split keeps it stable because
//!   the replacing node starts with the same byte
//! - The param fallback only inspects the first `/`-segment of a label

use crate::radix::node::{has_param_marker, segments, NodeId};
use crate::radix::tree::RadixTree;

/// A child link keyed by the first byte of the child's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub label: u8,
    pub node: NodeId,
}

impl<T> RadixTree<T> {
    /// Index of the first edge of `parent` whose leading byte is `>= label`.
    pub(crate) fn first_match_index(&self, parent: NodeId, label: u8) -> usize {
        self.node(parent)
            .edges
            .partition_point(|edge| edge.label < label)
    }

    /// Attach `child` under `parent`, keeping the edge list sorted.
    pub(crate) fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        let label = self.node(child).leading_byte();
        let idx = self.first_match_index(parent, label);
        let edges = &mut self.node_mut(parent).edges;
        debug_assert!(
            edges.get(idx).map_or(true, |edge| edge.label != label),
            "duplicate leading byte in edge list"
        );
        edges.insert(idx, Edge { label, node: child });
    }

    /// Point the existing edge for `label` at `child`.
    ///
    /// # Panics
    /// If `parent` has no edge for `label`. The insertion engine only
    /// replaces edges it has just looked up, so this is a defect.
    pub(crate) fn replace_edge(&mut self, parent: NodeId, label: u8, child: NodeId) {
        let idx = self.first_match_index(parent, label);
        match self.node_mut(parent).edges.get_mut(idx) {
            Some(edge) if edge.label == label => edge.node = child,
            _ => panic!(
                "replacing missing edge {:?} under node {}",
                label as char,
                parent.index()
            ),
        }
    }

    /// Look up the child of `parent` for `label`.
    ///
    /// An exact leading-byte match always wins. Otherwise, with
    /// `allow_param_fallback`, the first edge in sorted order whose first
    /// segment holds a parameter marker is returned.
    pub(crate) fn get_edge(
        &self,
        parent: NodeId,
        label: u8,
        allow_param_fallback: bool,
    ) -> Option<NodeId> {
        let edges = &self.node(parent).edges;
        let idx = self.first_match_index(parent, label);
        if let Some(edge) = edges.get(idx) {
            if edge.label == label {
                return Some(edge.node);
            }
        }

        if !allow_param_fallback {
            return None;
        }

        edges
            .iter()
            .find(|edge| {
                segments(&self.node(edge.node).label)
                    .next()
                    .map_or(false, has_param_marker)
            })
            .map(|edge| edge.node)
    }
}
