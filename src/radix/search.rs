//! Search engine.
//!
//! # Responsibilities
//! - Match a query key against the tree, edge by edge
//! - Bind capture segments to the aligned query segments
//! - Report the registered pattern that matched
//!
//! # Design Decisions
//! - Literal edges are tried before the param fallback; no backtracking
//! - A param edge is checked segment by segment: literal segments must be
//!   equal, except the label's last segment which may be a partial segment
//!   left by a split and only has to prefix the query segment
//! - Only call-local state is written; concurrent searches are safe

use std::collections::HashMap;

use crate::radix::node::{is_param_segment, segments, Node, NodeId};
use crate::radix::tree::RadixTree;
use crate::radix::util::common_prefix;

/// Capture name to captured query segment.
pub type Params = HashMap<String, String>;

/// A successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, T> {
    /// Node where the query ended.
    pub node: NodeId,

    /// Value stored for the matched pattern.
    pub value: &'a T,

    /// The registered pattern, e.g. `GET /users/:id`.
    pub pattern: String,

    /// Bound captures, e.g. `{"id": "42"}`.
    pub params: Params,
}

impl<T> Match<'_, T> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl<T> RadixTree<T> {
    /// Looks up `query`, returning the matched value and its captures.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdamux::radix::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("GET /users/:id", "user").unwrap();
    ///
    /// let found = tree.search("GET /users/42").unwrap();
    /// assert_eq!(found.pattern, "GET /users/:id");
    /// assert_eq!(found.param("id"), Some("42"));
    /// assert!(tree.search("GET /users/42/").is_none());
    /// ```
    pub fn search(&self, query: impl AsRef<[u8]>) -> Option<Match<'_, T>> {
        let mut current = NodeId::ROOT;
        let mut remaining = query.as_ref();
        let mut pattern = Vec::new();
        let mut params = Params::new();

        loop {
            if remaining.is_empty() {
                let value = self.node(current).value.as_ref()?;
                return Some(Match {
                    node: current,
                    value,
                    pattern: String::from_utf8_lossy(&pattern).into_owned(),
                    params,
                });
            }

            current = self.get_edge(current, remaining[0], true)?;
            let node = self.node(current);

            let consumed = if node.is_param {
                bind_params(node, remaining, &mut params)?
            } else {
                let common = common_prefix(remaining, &node.label);
                if common < node.label.len() {
                    return None;
                }
                common
            };

            pattern.extend_from_slice(&node.label);
            remaining = &remaining[consumed..];
        }
    }
}

/// Aligns a param label with the query segment by segment, binding each
/// capture to its query segment. Returns how many query bytes the label
/// stands for.
fn bind_params<T>(node: &Node<T>, query: &[u8], params: &mut Params) -> Option<usize> {
    let label_segments: Vec<&[u8]> = segments(&node.label).collect();
    let query_segments: Vec<&[u8]> = segments(query).take(label_segments.len()).collect();
    if label_segments.len() > query_segments.len() {
        return None;
    }

    let last = label_segments.len() - 1;
    let mut names = node.param_names.iter();
    let mut consumed = 0;

    for (i, (label_segment, query_segment)) in label_segments.iter().zip(&query_segments).enumerate() {
        if is_param_segment(label_segment) {
            let name = names.next()?;
            params.insert(
                name.clone(),
                String::from_utf8_lossy(query_segment).into_owned(),
            );
            consumed += query_segment.len();
        } else if i < last {
            if label_segment != query_segment {
                return None;
            }
            consumed += label_segment.len();
        } else {
            if !query_segment.starts_with(label_segment) {
                return None;
            }
            consumed += label_segment.len();
        }

        if i < last {
            consumed += 1;
        }
    }

    Some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[&'static str]) -> RadixTree<&'static str> {
        let mut tree = RadixTree::new();
        for key in keys {
            tree.insert(key, *key).unwrap();
        }
        tree
    }

    #[test]
    fn test_search_literal() {
        let tree = build(&["water", "slow", "slower", "wash", "washer", "wasnt", "watering"]);

        let found = tree.search("wasnt").unwrap();
        assert_eq!(found.pattern, "wasnt");
        assert_eq!(*found.value, "wasnt");
        assert!(found.params.is_empty());

        assert!(tree.search("non-existing-item").is_none());
        assert!(tree.search("was").is_none(), "internal node is not complete");
        assert!(tree.search("wat").is_none(), "partial label is not a match");
    }

    #[test]
    fn test_search_empty_query() {
        let tree = build(&["water"]);
        assert!(tree.search("").is_none());
    }

    #[test]
    fn test_search_binds_multiple_params() {
        let tree = build(&["POST /api/widgets/:id/parts/:partId/update"]);

        let found = tree.search("POST /api/widgets/42/parts/99/update").unwrap();
        assert_eq!(found.pattern, "POST /api/widgets/:id/parts/:partId/update");
        assert_eq!(found.param("id"), Some("42"));
        assert_eq!(found.param("partId"), Some("99"));
        assert_eq!(found.params.len(), 2);
    }

    #[test]
    fn test_search_rejects_wrong_literal_inside_param_label() {
        let tree = build(&["POST /api/widgets/:id/parts/:partId/update"]);
        assert!(tree.search("POST /api/widgets/42/pieces/99/update").is_none());
    }

    #[test]
    fn test_search_too_few_segments() {
        let tree = build(&["GET /users/:id/admin"]);
        assert!(tree.search("GET /users/42").is_none());
    }

    #[test]
    fn test_literal_precedence() {
        let tree = build(&["GET /users/:id", "GET /users/history"]);

        let literal = tree.search("GET /users/history").unwrap();
        assert_eq!(literal.pattern, "GET /users/history");
        assert!(literal.params.is_empty());

        let param = tree.search("GET /users/123").unwrap();
        assert_eq!(param.pattern, "GET /users/:id");
        assert_eq!(param.param("id"), Some("123"));
    }

    #[test]
    fn test_no_backtracking_from_literal_edge() {
        // 'h' selects the literal edge; its mismatch is final.
        let tree = build(&["GET /users/:id", "GET /users/history"]);
        assert!(tree.search("GET /users/h1").is_none());
    }

    #[test]
    fn test_partial_tail_segment_is_verified() {
        let tree = build(&["GET /:id/parts", "GET /:id/pages"]);
        assert_eq!(tree.all_edge_labels(), ["GET /:id/pa", "ges", "rts"]);

        assert_eq!(tree.search("GET /5/parts").unwrap().pattern, "GET /:id/parts");
        assert_eq!(tree.search("GET /5/pages").unwrap().pattern, "GET /:id/pages");
        assert!(tree.search("GET /5/pbrts").is_none());
    }

    #[test]
    fn test_trailing_slash_is_strict() {
        let tree = build(&["GET /api/widgets"]);
        assert!(tree.search("GET /api/widgets/").is_none());
    }

    #[test]
    fn test_capture_binds_empty_segment() {
        let tree = build(&["GET /users/:id"]);

        let found = tree.search("GET /users/").unwrap();
        assert_eq!(found.pattern, "GET /users/:id");
        assert_eq!(found.param("id"), Some(""));
        assert!(tree.search("GET /users").is_none());
    }

    #[test]
    fn test_method_isolation() {
        let tree = build(&["GET /a/:id"]);
        assert!(tree.search("POST /a/1").is_none());
    }

    #[test]
    fn test_param_value_passthrough() {
        let tree = build(&["GET /files/:name"]);
        let found = tree.search("GET /files/caf%C3%A9.txt").unwrap();
        assert_eq!(found.param("name"), Some("caf%C3%A9.txt"));
    }
}
