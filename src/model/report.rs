//! Top-level report container and per-revision statistics.

use crate::model::{GraphData, TreeNode};
use serde::{Deserialize, Serialize};

/// Commit provenance for one analyzed revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatistics {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "authorEmail", default)]
    pub author_email: String,
}

impl CommitStatistics {
    /// Short (7 character) form of the commit hash.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(i, _)| i);
        &self.hash[..end]
    }
}

/// Aggregate change counters for one revision, with commit provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatistics {
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "totalBreaking", default)]
    pub total_breaking: u32,
    #[serde(default)]
    pub added: u32,
    #[serde(default)]
    pub modified: u32,
    #[serde(default)]
    pub removed: u32,
    #[serde(rename = "breakingAdded", default)]
    pub breaking_added: u32,
    #[serde(rename = "breakingModified", default)]
    pub breaking_modified: u32,
    #[serde(rename = "breakingRemoved", default)]
    pub breaking_removed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitStatistics>,
}

/// One revision's complete analysis output.
///
/// `tree` and `graph` are both optional on the wire: a revision with
/// no detected changes ships neither, and renders as an empty state
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(rename = "originalSpec", default)]
    pub original_spec: String,
    #[serde(rename = "modifiedSpec", default)]
    pub modified_spec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
    #[serde(default)]
    pub statistics: ChangeStatistics,
}

impl ReportItem {
    /// Root of the change tree, when the revision has one.
    ///
    /// The engine emits the tree as a single-root sequence.
    #[must_use]
    pub fn tree_root(&self) -> Option<&TreeNode> {
        self.tree.as_deref().and_then(<[TreeNode]>::first)
    }

    /// Graph nodes, empty when the revision carries no graph.
    #[must_use]
    pub fn graph_nodes(&self) -> &[crate::model::GraphNode] {
        self.graph.as_ref().map_or(&[], |g| &g.nodes)
    }

    /// True when the revision detected at least one change.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.statistics.total > 0 && self.tree_root().is_some()
    }
}

/// Top-level report: an ordered sequence of revisions.
///
/// By convention index 0 is the most recent revision and the last
/// element the earliest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "dateGenerated", default)]
    pub date_generated: String,
    #[serde(rename = "reportItems", default)]
    pub report_items: Vec<ReportItem>,
}

impl Report {
    /// Number of revisions in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.report_items.len()
    }

    /// True when the report carries no revisions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.report_items.is_empty()
    }

    /// Index of the earliest revision (the last item).
    ///
    /// # Panics
    /// Panics on an empty report; the loader rejects those before any
    /// store is constructed.
    #[must_use]
    pub fn earliest_index(&self) -> usize {
        assert!(!self.is_empty(), "report has no revisions");
        self.report_items.len() - 1
    }

    /// Revision at `idx`, if in range.
    #[must_use]
    pub fn item(&self, idx: usize) -> Option<&ReportItem> {
        self.report_items.get(idx)
    }
}
