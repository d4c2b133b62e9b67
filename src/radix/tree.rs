//! Arena-backed radix tree.
//!
//! # Responsibilities
//! - Own every node of the tree in a single arena
//! - Hand out stable `NodeId`s for parent/child links
//! - Enumerate registered patterns and raw edge labels for introspection
//!
//! # Design Decisions
//! - Strict ownership: the tree owns the arena, nodes own only edge indices
//! - Nodes are never removed; dropping the tree releases everything at once
//! - Enumeration is diagnostic only and not on the request path

use crate::radix::node::{Node, NodeId};

/// A compressed trie mapping composite route keys to values.
#[derive(Debug, Clone)]
pub struct RadixTree<T> {
    /// Arena of nodes; index 0 is the root.
    nodes: Vec<Node<T>>,

    /// Number of complete nodes.
    len: usize,
}

impl<T> RadixTree<T> {
    /// Creates an empty tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            len: 0,
        }
    }

    /// Number of distinct keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node by id.
    ///
    /// Ids are only produced by this tree, so they are always in bounds.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &Node<T> {
        self.node(NodeId::ROOT)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Store `value` on `id`, marking it complete. Returns the previous value.
    pub(crate) fn set_value(&mut self, id: NodeId, value: T) -> Option<T> {
        let previous = self.node_mut(id).value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Every complete key, reconstructed from the labels on its path and
    /// sorted lexicographically.
    pub fn all_complete_patterns(&self) -> Vec<String> {
        let mut result = Vec::new();
        let mut stack = vec![(NodeId::ROOT, Vec::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = self.node(id);
            if node.is_complete() {
                result.push(String::from_utf8_lossy(&prefix).into_owned());
            }
            for edge in &node.edges {
                let mut path = prefix.clone();
                path.extend_from_slice(&self.node(edge.node).label);
                stack.push((edge.node, path));
            }
        }

        result.sort();
        result
    }

    /// Every non-root label in the tree, sorted lexicographically.
    pub fn all_edge_labels(&self) -> Vec<String> {
        let mut result = Vec::new();
        let mut stack = vec![NodeId::ROOT];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !node.label.is_empty() {
                result.push(String::from_utf8_lossy(&node.label).into_owned());
            }
            stack.extend(node.edges.iter().map(|edge| edge.node));
        }

        result.sort();
        result
    }
}

impl<T> Default for RadixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree() {
        let tree: RadixTree<u32> = RadixTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().label().is_empty());
        assert!(tree.all_complete_patterns().is_empty());
        assert!(tree.all_edge_labels().is_empty());
    }

    #[test]
    fn test_set_value_counts_once() {
        let mut tree = RadixTree::new();
        let id = tree.push_node(Node::new(b"water".to_vec(), None));
        tree.add_edge(NodeId::ROOT, id);

        assert_eq!(tree.set_value(id, 1), None);
        assert_eq!(tree.set_value(id, 2), Some(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(id).value(), Some(&2));
    }

    #[test]
    fn test_enumeration_is_sorted() {
        let mut tree = RadixTree::new();
        for key in ["water", "slow", "slower", "wash"] {
            tree.insert(key, ()).unwrap();
        }

        assert_eq!(
            tree.all_complete_patterns(),
            ["slow", "slower", "wash", "water"]
        );
        assert_eq!(tree.all_edge_labels(), ["er", "sh", "slow", "ter", "wa"]);
    }
}
