//! Hierarchical change tree.

use crate::model::Change;
use serde::{Deserialize, Serialize};

/// One node of the hierarchical change representation.
///
/// `key` is unique within a revision's tree and stable across renders;
/// it is the identity the selection store and correlation index speak
/// in on the tree side. Internal nodes aggregate `total_changes` /
/// `breaking_changes` over their subtree; change-carrying leaves hold
/// the [`Change`] itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub key: String,
    #[serde(rename = "titleString", default)]
    pub title_string: String,
    #[serde(rename = "isLeaf", default)]
    pub is_leaf: bool,
    #[serde(rename = "totalChanges", default)]
    pub total_changes: u32,
    #[serde(rename = "breakingChanges", default)]
    pub breaking_changes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Change>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// True when the node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children slice, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The change this node carries, if it is a change-carrying leaf.
    ///
    /// Nodes with children never act as change carriers, even when
    /// malformed input supplies both a change and children.
    #[must_use]
    pub fn carried_change(&self) -> Option<&Change> {
        if self.has_children() {
            None
        } else {
            self.change.as_ref()
        }
    }

    /// Pre-order traversal over this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a TreeNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
