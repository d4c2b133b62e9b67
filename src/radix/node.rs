//! Tree node and label model.
//!
//! A label is the byte string on the edge leading into a node. It may span
//! several `/`-separated segments; a segment starting with `:` is a named
//! capture, everything else matches literally.

use crate::radix::edges::Edge;

/// Marker that opens a named capture segment (`:id`).
pub const PARAM_MARKER: u8 = b':';

/// Separator between path segments.
pub const SEGMENT_SEPARATOR: u8 = b'/';

/// Stable handle to a node inside a `RadixTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node. Its label is empty and it only holds edges.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of the radix tree.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Edge value leading into this node (empty only for the root).
    pub(crate) label: Vec<u8>,

    /// True if the label contains a parameter marker anywhere.
    pub(crate) is_param: bool,

    /// Capture names of the label's parameter segments, in order.
    pub(crate) param_names: Vec<String>,

    /// Payload of a route terminating here. `Some` iff the node is complete.
    pub(crate) value: Option<T>,

    /// Children sorted ascending by leading byte, at most one per byte.
    pub(crate) edges: Vec<Edge>,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Self::new(Vec::new(), None)
    }

    pub(crate) fn new(label: Vec<u8>, value: Option<T>) -> Self {
        let is_param = has_param_marker(&label);
        let param_names = param_names(&label);
        Self {
            label,
            is_param,
            param_names,
            value,
            edges: Vec::new(),
        }
    }

    /// Replace the label and re-derive the parameter metadata from it.
    pub(crate) fn set_label(&mut self, label: Vec<u8>) {
        self.is_param = has_param_marker(&label);
        self.param_names = param_names(&label);
        self.label = label;
    }

    /// First byte of the label, used as the edge key in the parent.
    ///
    /// Only non-root nodes are ever attached as edges, and their labels are
    /// never empty.
    pub(crate) fn leading_byte(&self) -> u8 {
        self.label[0]
    }

    pub fn label(&self) -> &[u8] {
        &self.label
    }

    /// True if a registered route terminates exactly at this node.
    pub fn is_complete(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_param(&self) -> bool {
        self.is_param
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Split a label or query into its `/`-separated segments.
pub(crate) fn segments(label: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    label.split(|byte| *byte == SEGMENT_SEPARATOR)
}

/// True if the segment is a named capture.
pub(crate) fn is_param_segment(segment: &[u8]) -> bool {
    segment.first() == Some(&PARAM_MARKER)
}

pub(crate) fn has_param_marker(bytes: &[u8]) -> bool {
    bytes.contains(&PARAM_MARKER)
}

/// Capture names of every segment of `label` that opens with the marker.
pub(crate) fn param_names(label: &[u8]) -> Vec<String> {
    segments(label)
        .filter(|segment| is_param_segment(segment))
        .map(|segment| String::from_utf8_lossy(&segment[1..]).into_owned())
        .collect()
}
