//! Correlation index construction and lookup.

use crate::correlate::fingerprint;
use crate::model::{GraphNode, TreeNode};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Lookup structure joining tree identity to graph identity for one
/// revision.
///
/// Only fingerprints that matched on both sides are represented; a
/// tree key without a graph counterpart (or the reverse) is simply
/// absent, and a lookup miss is a normal "no correlate" outcome every
/// consumer must tolerate.
#[derive(Debug, Default)]
pub struct CorrelationIndex {
    tree_to_graph: IndexMap<String, String>,
    graph_to_tree: HashMap<String, String>,
    collisions: usize,
}

impl CorrelationIndex {
    /// Graph node id correlated with a tree key, if any.
    #[must_use]
    pub fn graph_id_for_tree_key(&self, key: &str) -> Option<&str> {
        self.tree_to_graph.get(key).map(String::as_str)
    }

    /// Reverse lookup: tree key correlated with a graph node id.
    #[must_use]
    pub fn tree_key_for_graph_id(&self, id: &str) -> Option<&str> {
        self.graph_to_tree.get(id).map(String::as_str)
    }

    /// Number of matched tree-key/graph-id pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree_to_graph.len()
    }

    /// True when no pair matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree_to_graph.is_empty()
    }

    /// Number of fingerprint collisions observed during the tree walk.
    ///
    /// Collisions are resolved last-write-wins and never fail the
    /// build; the count exists for diagnostics only.
    #[must_use]
    pub const fn collision_count(&self) -> usize {
        self.collisions
    }

    /// Matched pairs in tree pre-order, as (tree key, graph id).
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tree_to_graph
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build the correlation index for one revision.
///
/// One pre-order walk over the tree collects every change-carrying
/// leaf by fingerprint (a later leaf with a colliding fingerprint
/// silently replaces the earlier one), then one linear pass over the
/// graph nodes attaches the graph side. `tree_root` is `None` for a
/// revision without a tree, which yields an empty index rather than an
/// error.
#[must_use]
pub fn build_index(tree_root: Option<&TreeNode>, graph_nodes: &[GraphNode]) -> CorrelationIndex {
    let mut by_fingerprint: IndexMap<String, &TreeNode> = IndexMap::new();
    let mut collisions = 0usize;

    if let Some(root) = tree_root {
        root.walk(&mut |node| {
            if let Some(change) = node.carried_change() {
                if by_fingerprint.insert(fingerprint(change), node).is_some() {
                    collisions += 1;
                }
            }
        });
    }

    let mut tree_to_graph = IndexMap::with_capacity(by_fingerprint.len());
    let mut graph_to_tree = HashMap::with_capacity(by_fingerprint.len());
    for graph_node in graph_nodes {
        let Some(data) = &graph_node.data else {
            continue;
        };
        if let Some(tree_node) = by_fingerprint.get(fingerprint(data).as_str()) {
            tree_to_graph.insert(tree_node.key.clone(), graph_node.id.clone());
            graph_to_tree.insert(graph_node.id.clone(), tree_node.key.clone());
        }
    }

    if collisions > 0 {
        tracing::debug!(
            collisions,
            matched = tree_to_graph.len(),
            "fingerprint collisions during correlation index build"
        );
    }
    tracing::debug!(
        tree_changes = by_fingerprint.len(),
        graph_nodes = graph_nodes.len(),
        matched = tree_to_graph.len(),
        "correlation index built"
    );

    CorrelationIndex {
        tree_to_graph,
        graph_to_tree,
        collisions,
    }
}
