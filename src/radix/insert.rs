//! Insertion engine.
//!
//! # Responsibilities
//! - Walk from the root consuming the key by leading byte
//! - Split a label where the key diverges from it
//! - Reject keys whose capture collides with a sibling capture
//!
//! # Design Decisions
//! - No param fallback while inserting; edges are matched purely by byte
//! - The conflict check runs before the arena or any edge list is touched
//! - Re-inserting an existing key replaces its value

use crate::radix::error::RouteConflict;
use crate::radix::node::{is_param_segment, Node, NodeId, SEGMENT_SEPARATOR};
use crate::radix::tree::RadixTree;
use crate::radix::util::common_prefix;

impl<T> RadixTree<T> {
    /// Inserts `key` with `value`, returning the node where the key ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdamux::radix::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("GET /users/:id", 1).unwrap();
    /// assert!(tree.insert("GET /users/:username", 2).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: T) -> Result<NodeId, RouteConflict> {
        let key = key.as_ref();
        let mut current = NodeId::ROOT;
        let mut remaining = key;

        loop {
            // Key exhausted on an existing node.
            if remaining.is_empty() {
                self.set_value(current, value);
                return Ok(current);
            }

            let parent = current;
            let Some(child) = self.get_edge(parent, remaining[0], false) else {
                return Ok(self.attach_leaf(parent, remaining, value));
            };

            let label = &self.node(child).label;
            let common = common_prefix(remaining, label);

            if common == label.len() {
                self.check_capture_extension(key, child, &remaining[common..])?;
                remaining = &remaining[common..];
                current = child;
                continue;
            }

            self.check_param_conflict(key, child, remaining, common)?;

            // Split: parent -> split(prefix) -> {child(suffix), leaf(rest)}
            let split = self.push_node(Node::new(remaining[..common].to_vec(), None));
            self.replace_edge(parent, remaining[0], split);

            let suffix = self.node(child).label[common..].to_vec();
            self.node_mut(child).set_label(suffix);
            self.add_edge(split, child);

            remaining = &remaining[common..];
            if remaining.is_empty() {
                self.set_value(split, value);
                return Ok(split);
            }
            return Ok(self.attach_leaf(split, remaining, value));
        }
    }

    fn attach_leaf(&mut self, parent: NodeId, label: &[u8], value: T) -> NodeId {
        let leaf = self.push_node(Node::new(label.to_vec(), None));
        self.add_edge(parent, leaf);
        self.set_value(leaf, value);
        leaf
    }

    /// Fails if `existing`'s label ends in a capture segment that the key
    /// continues past, e.g. `:idx` over an existing `:id`.
    fn check_capture_extension(
        &self,
        key: &[u8],
        existing: NodeId,
        rest: &[u8],
    ) -> Result<(), RouteConflict> {
        if rest.first().map_or(true, |byte| *byte == SEGMENT_SEPARATOR) {
            return Ok(());
        }

        let label = &self.node(existing).label;
        let start = label
            .iter()
            .rposition(|byte| *byte == SEGMENT_SEPARATOR)
            .map_or(0, |idx| idx + 1);
        let capture = &label[start..];
        if !is_param_segment(capture) {
            return Ok(());
        }

        let mut conflicting = capture[1..].to_vec();
        conflicting.extend_from_slice(segment_at(rest, 0));
        Err(RouteConflict {
            key: String::from_utf8_lossy(key).into_owned(),
            existing: String::from_utf8_lossy(&capture[1..]).into_owned(),
            conflicting: String::from_utf8_lossy(&conflicting).into_owned(),
        })
    }

    /// Fails if the key and `existing`'s label diverge inside a capture
    /// segment, i.e. both name a parameter at this position but differently.
    fn check_param_conflict(
        &self,
        key: &[u8],
        existing: NodeId,
        remaining: &[u8],
        common: usize,
    ) -> Result<(), RouteConflict> {
        let label = &self.node(existing).label;
        let start = label[..common]
            .iter()
            .rposition(|byte| *byte == SEGMENT_SEPARATOR)
            .map_or(0, |idx| idx + 1);

        // Divergence on a segment boundary: at most one side is a capture.
        if start == common {
            return Ok(());
        }

        let existing_segment = segment_at(label, start);
        let new_segment = segment_at(remaining, start);
        if !is_param_segment(existing_segment) || existing_segment == new_segment {
            return Ok(());
        }

        Err(RouteConflict {
            key: String::from_utf8_lossy(key).into_owned(),
            existing: String::from_utf8_lossy(&existing_segment[1..]).into_owned(),
            conflicting: String::from_utf8_lossy(&new_segment[1..]).into_owned(),
        })
    }
}

/// The full segment of `bytes` beginning at `start`.
fn segment_at(bytes: &[u8], start: usize) -> &[u8] {
    let rest = &bytes[start..];
    let end = rest
        .iter()
        .position(|byte| *byte == SEGMENT_SEPARATOR)
        .unwrap_or(rest.len());
    &rest[..end]
}
