//! Dependency graph representation of a change set.

use crate::model::Change;
use serde::{Deserialize, Serialize};

/// One node of the graph representation.
///
/// `id` is engine-assigned and unique within the graph, but carries no
/// relationship to any tree key; the correlation index is the only
/// sanctioned way to cross between the two identity spaces. Structural
/// grouping nodes have `text` and no `data`; change nodes carry the
/// [`Change`] in `data`. Geometry is owned by the external layout
/// engine and deliberately not modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Change>,
}

impl GraphNode {
    /// Display label: structural text when present, otherwise the
    /// change's property name.
    #[must_use]
    pub fn label(&self) -> &str {
        if let Some(text) = &self.text {
            text
        } else if let Some(data) = &self.data {
            &data.property
        } else {
            &self.id
        }
    }
}

/// Directed edge between two graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    pub from: String,
    pub to: String,
}

/// Full graph payload for one revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}
