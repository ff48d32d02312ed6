//! The selection state store.

use crate::correlate::{build_index, CorrelationIndex};
use crate::model::{Change, Report, ReportItem};
use crate::store::{NavPhase, RevisionNavigator};

/// Process-wide selection state for one loaded report.
///
/// Owns the report, the revision navigator, and the active revision's
/// correlation index. Views mutate it only through the setters below;
/// derived values (like resolving a graph-side selection to a tree
/// key) are recomputed by consumers after a completed mutation, never
/// mid-mutation.
#[derive(Debug)]
pub struct SelectionStore {
    report: Report,
    navigator: RevisionNavigator,
    index: CorrelationIndex,
    current_change: Option<Change>,
    selected_keys: Vec<String>,
    expanded_keys: Vec<String>,
    pending_graph_selection: Option<String>,
}

impl SelectionStore {
    /// Create a store for `report`, starting at the earliest revision
    /// with nothing selected.
    ///
    /// The report is passed in rather than read from any ambient
    /// source, so independent stores can coexist and tests need no
    /// host environment.
    ///
    /// # Panics
    /// Panics when the report has no revisions; the loader rejects
    /// those before a store is built.
    #[must_use]
    pub fn new(report: Report) -> Self {
        let navigator = RevisionNavigator::new(report.len());
        let index = Self::index_for(&report, navigator.selected());
        Self {
            report,
            navigator,
            index,
            current_change: None,
            selected_keys: Vec::new(),
            expanded_keys: Vec::new(),
            pending_graph_selection: None,
        }
    }

    fn index_for(report: &Report, idx: usize) -> CorrelationIndex {
        let item = &report.report_items[idx];
        build_index(item.tree_root(), item.graph_nodes())
    }

    /// The loaded report.
    #[must_use]
    pub const fn report(&self) -> &Report {
        &self.report
    }

    /// The revision item the committed selection points at.
    #[must_use]
    pub fn active_item(&self) -> &ReportItem {
        &self.report.report_items[self.navigator.selected()]
    }

    /// Correlation index for the active revision.
    #[must_use]
    pub const fn index(&self) -> &CorrelationIndex {
        &self.index
    }

    /// Revision navigation phase, for timeline rendering.
    #[must_use]
    pub const fn nav_phase(&self) -> NavPhase {
        self.navigator.phase()
    }

    /// Committed revision index.
    #[must_use]
    pub const fn selected_report_index(&self) -> usize {
        self.navigator.selected()
    }

    /// Previewed revision index.
    #[must_use]
    pub const fn highlighted_report_index(&self) -> usize {
        self.navigator.highlighted()
    }

    /// The globally active change, `None` when nothing is selected and
    /// dependent views should render their placeholder state.
    #[must_use]
    pub const fn current_change(&self) -> Option<&Change> {
        self.current_change.as_ref()
    }

    /// Set (or clear) the globally active change.
    pub fn set_current_change(&mut self, change: Option<Change>) {
        self.current_change = change;
    }

    /// Tree-view selected keys.
    #[must_use]
    pub fn selected_keys(&self) -> &[String] {
        &self.selected_keys
    }

    /// Replace the tree-view selected keys.
    pub fn set_selected_keys(&mut self, keys: Vec<String>) {
        self.selected_keys = keys;
    }

    /// Tree-view expanded keys. Expansion is independent of selection;
    /// a node can be expanded without being selected.
    #[must_use]
    pub fn expanded_keys(&self) -> &[String] {
        &self.expanded_keys
    }

    /// Replace the tree-view expanded keys.
    pub fn set_expanded_keys(&mut self, keys: Vec<String>) {
        self.expanded_keys = keys;
    }

    /// True when `key` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_keys.iter().any(|k| k == key)
    }

    /// Toggle expansion of a single tree key.
    pub fn toggle_expanded(&mut self, key: &str) {
        if let Some(pos) = self.expanded_keys.iter().position(|k| k == key) {
            self.expanded_keys.remove(pos);
        } else {
            self.expanded_keys.push(key.to_string());
        }
    }

    /// Tree-side selection: a change-carrying node was chosen in the
    /// tree view.
    pub fn select_tree_node(&mut self, key: &str, change: Change) {
        self.selected_keys = vec![key.to_string()];
        self.pending_graph_selection = None;
        self.current_change = Some(change);
    }

    /// Graph-side selection: a node was clicked in the graph view.
    ///
    /// Structural nodes (no change data) are ignored. For a change
    /// node the change becomes current and the graph node id is
    /// recorded as the pending selection for the tree view to
    /// reconcile on its next pass. Returns whether the click selected
    /// anything.
    pub fn select_graph_node(&mut self, node_id: &str) -> bool {
        let Some(change) = self
            .active_item()
            .graph_nodes()
            .iter()
            .find(|n| n.id == node_id)
            .and_then(|n| n.data.clone())
        else {
            return false;
        };
        self.current_change = Some(change);
        self.pending_graph_selection = Some(node_id.to_string());
        true
    }

    /// Reconcile a pending graph-side selection into tree terms.
    ///
    /// Resolves the recorded graph node id through the reverse
    /// correlation lookup. On a hit the tree key becomes the selected
    /// key and is returned so the caller can scroll it into view. On a
    /// miss the tree selection is left untouched and `None` is
    /// returned; graph-only-visible changes are a legitimate state,
    /// not an error. The pending marker is consumed either way.
    pub fn take_pending_tree_reveal(&mut self) -> Option<String> {
        let node_id = self.pending_graph_selection.take()?;
        let key = self.index.tree_key_for_graph_id(&node_id)?.to_string();
        self.selected_keys = vec![key.clone()];
        Some(key)
    }

    /// Whether a graph-side selection is awaiting reconciliation.
    #[must_use]
    pub const fn has_pending_graph_selection(&self) -> bool {
        self.pending_graph_selection.is_some()
    }

    /// Preview a revision on the timeline. No cascade runs.
    pub fn highlight_revision(&mut self, idx: usize) {
        self.navigator.highlight(idx);
    }

    /// Commit to a revision.
    ///
    /// When the committed index changes this runs the full cascade:
    /// the active item pointer moves, the current change is cleared (a
    /// change from another revision is not meaningful), tree selection
    /// and any pending graph selection are dropped with it, and the
    /// correlation index is rebuilt from the new revision's tree and
    /// graph. Expanded keys are also dropped since they name nodes of
    /// the outgoing tree.
    ///
    /// # Panics
    /// Panics on an out-of-range index; see [`RevisionNavigator::select`].
    pub fn select_revision(&mut self, idx: usize) {
        if !self.navigator.select(idx) {
            return;
        }
        tracing::debug!(revision = idx, "revision selected, rebuilding index");
        self.current_change = None;
        self.selected_keys.clear();
        self.expanded_keys.clear();
        self.pending_graph_selection = None;
        self.index = Self::index_for(&self.report, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Change, ChangeContext, ChangeKind, ChangeStatistics, GraphData, GraphNode, TreeNode,
    };

    fn change(property: &str, line: u32) -> Change {
        Change {
            breaking: false,
            kind: ChangeKind::Modified,
            property: property.to_string(),
            original: Some("Old".into()),
            new: Some("New".into()),
            context: ChangeContext {
                new_line: Some(line),
                new_column: Some(1),
                ..Default::default()
            },
        }
    }

    fn item_with(pairs: &[(&str, &str, Change)]) -> ReportItem {
        let children: Vec<TreeNode> = pairs
            .iter()
            .map(|(key, _, c)| TreeNode {
                key: (*key).to_string(),
                title_string: (*key).to_string(),
                is_leaf: true,
                total_changes: 1,
                breaking_changes: 0,
                change: Some(c.clone()),
                children: None,
            })
            .collect();
        let nodes: Vec<GraphNode> = pairs
            .iter()
            .map(|(_, id, c)| GraphNode {
                id: (*id).to_string(),
                text: None,
                data: Some(c.clone()),
            })
            .collect();
        ReportItem {
            original_spec: "old".into(),
            modified_spec: "new".into(),
            tree: Some(vec![TreeNode {
                key: "root".into(),
                title_string: "root".into(),
                is_leaf: false,
                total_changes: pairs.len() as u32,
                breaking_changes: 0,
                change: None,
                children: Some(children),
            }]),
            graph: Some(GraphData {
                nodes,
                edges: Vec::new(),
            }),
            statistics: ChangeStatistics {
                total: pairs.len() as u32,
                ..Default::default()
            },
        }
    }

    fn two_item_report() -> Report {
        Report {
            date_generated: "now".into(),
            report_items: vec![
                item_with(&[("a", "n1", change("title", 5))]),
                item_with(&[("b", "n2", change("servers", 9))]),
            ],
        }
    }

    #[test]
    fn test_initial_state_earliest_nothing_chosen() {
        let store = SelectionStore::new(two_item_report());
        assert_eq!(store.selected_report_index(), 1);
        assert_eq!(store.highlighted_report_index(), 1);
        assert!(store.current_change().is_none());
        assert!(store.selected_keys().is_empty());
        assert_eq!(store.nav_phase(), NavPhase::Idle);
    }

    #[test]
    fn test_revision_switch_cascade() {
        let mut store = SelectionStore::new(two_item_report());
        store.select_tree_node("b", change("servers", 9));
        assert!(store.current_change().is_some());

        store.select_revision(0);
        assert!(store.current_change().is_none());
        assert!(store.selected_keys().is_empty());
        // Index now belongs to item 0.
        assert_eq!(store.index().graph_id_for_tree_key("a"), Some("n1"));
        assert_eq!(store.index().graph_id_for_tree_key("b"), None);
    }

    #[test]
    fn test_reselecting_same_revision_keeps_selection() {
        let mut store = SelectionStore::new(two_item_report());
        store.select_tree_node("b", change("servers", 9));
        store.select_revision(1);
        assert!(store.current_change().is_some());
        assert_eq!(store.selected_keys(), ["b".to_string()]);
    }

    #[test]
    fn test_highlight_never_cascades() {
        let mut store = SelectionStore::new(two_item_report());
        store.select_tree_node("b", change("servers", 9));
        store.highlight_revision(0);
        assert!(store.current_change().is_some());
        assert_eq!(store.selected_report_index(), 1);
        assert_eq!(store.highlighted_report_index(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_revision_panics() {
        let mut store = SelectionStore::new(two_item_report());
        store.select_revision(2);
    }

    #[test]
    fn test_graph_selection_reconciles_to_tree_key() {
        let mut store = SelectionStore::new(two_item_report());
        assert!(store.select_graph_node("n2"));
        assert!(store.has_pending_graph_selection());
        assert!(store.current_change().is_some());

        let revealed = store.take_pending_tree_reveal();
        assert_eq!(revealed.as_deref(), Some("b"));
        assert_eq!(store.selected_keys(), ["b".to_string()]);
        assert!(!store.has_pending_graph_selection());
    }

    #[test]
    fn test_graph_selection_miss_leaves_tree_untouched() {
        let mut store = SelectionStore::new(two_item_report());
        store.select_tree_node("b", change("servers", 9));

        // Unknown node id: click is a no-op.
        assert!(!store.select_graph_node("missing"));
        assert_eq!(store.selected_keys(), ["b".to_string()]);
        assert!(store.take_pending_tree_reveal().is_none());
    }

    #[test]
    fn test_structural_graph_node_click_is_ignored() {
        let mut report = two_item_report();
        if let Some(graph) = &mut report.report_items[1].graph {
            graph.nodes.push(GraphNode {
                id: "group".into(),
                text: Some("paths".into()),
                data: None,
            });
        }
        let mut store = SelectionStore::new(report);
        assert!(!store.select_graph_node("group"));
        assert!(store.current_change().is_none());
    }

    #[test]
    fn test_expansion_independent_of_selection() {
        let mut store = SelectionStore::new(two_item_report());
        store.toggle_expanded("root");
        assert!(store.is_expanded("root"));
        assert!(store.selected_keys().is_empty());
        store.toggle_expanded("root");
        assert!(!store.is_expanded("root"));
    }
}
