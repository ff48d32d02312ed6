//! JSON report generator.
//!
//! Emits a machine-readable projection of a loaded report: aggregate
//! statistics per revision plus correlation coverage (how many tree
//! changes found a graph counterpart), which is useful when debugging
//! engine output.

use crate::correlate::build_index;
use crate::error::{ExplorerError, ReportErrorKind, Result};
use crate::model::{Report, ReportItem};
use serde::Serialize;

/// Correlation coverage for one revision.
#[derive(Debug, Serialize)]
pub struct CorrelationSummary {
    /// Matched tree-key/graph-id pairs
    pub matched: usize,
    /// Fingerprint collisions observed while indexing
    pub collisions: usize,
    /// Graph nodes carrying change data
    pub graph_changes: usize,
}

#[derive(Debug, Serialize)]
struct RevisionSummary<'a> {
    index: usize,
    statistics: &'a crate::model::ChangeStatistics,
    correlation: CorrelationSummary,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "dateGenerated")]
    date_generated: &'a str,
    revisions: Vec<RevisionSummary<'a>>,
}

/// JSON reporter for programmatic consumption
#[derive(Debug)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report projection as pretty-printed JSON.
    pub fn generate(&self, report: &Report) -> Result<String> {
        let revisions = report
            .report_items
            .iter()
            .enumerate()
            .map(|(index, item)| RevisionSummary {
                index,
                statistics: &item.statistics,
                correlation: correlation_summary(item),
            })
            .collect();
        let projection = JsonReport {
            date_generated: &report.date_generated,
            revisions,
        };
        serde_json::to_string_pretty(&projection).map_err(|e| {
            ExplorerError::report(
                "serializing report projection",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn correlation_summary(item: &ReportItem) -> CorrelationSummary {
    let index = build_index(item.tree_root(), item.graph_nodes());
    CorrelationSummary {
        matched: index.len(),
        collisions: index.collision_count(),
        graph_changes: item
            .graph_nodes()
            .iter()
            .filter(|n| n.data.is_some())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Change, ChangeContext, ChangeKind, ChangeStatistics, GraphData, GraphNode, TreeNode,
    };

    #[test]
    fn test_json_projection_shape() {
        let change = Change {
            breaking: false,
            kind: ChangeKind::Modified,
            property: "title".into(),
            original: Some("Old".into()),
            new: Some("New".into()),
            context: ChangeContext::default(),
        };
        let report = Report {
            date_generated: "today".into(),
            report_items: vec![ReportItem {
                tree: Some(vec![TreeNode {
                    key: "a".into(),
                    title_string: "title".into(),
                    is_leaf: true,
                    total_changes: 1,
                    breaking_changes: 0,
                    change: Some(change.clone()),
                    children: None,
                }]),
                graph: Some(GraphData {
                    nodes: vec![GraphNode {
                        id: "n1".into(),
                        text: None,
                        data: Some(change),
                    }],
                    edges: Vec::new(),
                }),
                statistics: ChangeStatistics {
                    total: 1,
                    modified: 1,
                    ..Default::default()
                },
                ..Default::default()
            }],
        };

        let json = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dateGenerated"], "today");
        assert_eq!(value["revisions"][0]["correlation"]["matched"], 1);
        assert_eq!(value["revisions"][0]["statistics"]["total"], 1);
    }

    #[test]
    fn test_json_handles_bare_item() {
        let report = Report {
            date_generated: String::new(),
            report_items: vec![ReportItem::default()],
        };
        let json = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["revisions"][0]["correlation"]["matched"], 0);
    }
}
