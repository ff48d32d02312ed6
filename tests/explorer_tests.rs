//! End-to-end tests over a realistic multi-revision report fixture.

use oas_explorer::reports::{JsonReporter, SummaryReporter};
use oas_explorer::{build_index, load_report_str, NavPhase, Report, SelectionStore};

fn fixture() -> Report {
    load_report_str(include_str!("fixtures/petstore_report.json")).unwrap()
}

#[test]
fn test_fixture_loads_with_two_revisions() {
    let report = fixture();
    assert_eq!(report.len(), 2);
    assert_eq!(report.earliest_index(), 1);

    let latest = &report.report_items[0];
    assert!(latest.has_changes());
    assert_eq!(latest.statistics.total, 3);
    assert_eq!(
        latest
            .statistics
            .commit
            .as_ref()
            .map(oas_explorer::model::CommitStatistics::short_hash),
        Some("9f2c4d1")
    );
}

#[test]
fn test_index_matches_shared_changes_only() {
    let report = fixture();
    let latest = &report.report_items[0];
    let index = build_index(latest.tree_root(), latest.graph_nodes());

    // title and summary appear in both representations; version is
    // tree-only in the latest revision.
    assert_eq!(index.len(), 2);
    assert_eq!(index.graph_id_for_tree_key("info-title"), Some("n1"));
    assert_eq!(
        index.graph_id_for_tree_key("paths-pets-get-summary"),
        Some("n2")
    );
    assert_eq!(index.graph_id_for_tree_key("info-version"), None);
    assert_eq!(index.tree_key_for_graph_id("n1"), Some("info-title"));
    // The structural document node never enters the index.
    assert_eq!(index.tree_key_for_graph_id("n0"), None);
    assert_eq!(index.collision_count(), 0);
}

#[test]
fn test_store_starts_at_earliest_revision() {
    let store = SelectionStore::new(fixture());
    assert_eq!(store.selected_report_index(), 1);
    assert_eq!(store.nav_phase(), NavPhase::Idle);
    assert!(store.current_change().is_none());
    // The earliest revision's own index is active.
    assert_eq!(store.index().graph_id_for_tree_key("info-version"), Some("n1"));
}

#[test]
fn test_graph_selection_round_trip() {
    let mut store = SelectionStore::new(fixture());

    // Click the breaking removal in the graph.
    assert!(store.select_graph_node("n2"));
    let change = store.current_change().unwrap();
    assert!(change.breaking);
    assert_eq!(change.property, "/owners");

    // The tree reconciles it to its own key.
    assert_eq!(store.take_pending_tree_reveal().as_deref(), Some("paths-owners"));
    assert_eq!(store.selected_keys(), ["paths-owners".to_string()]);
}

#[test]
fn test_structural_node_click_ignored() {
    let mut store = SelectionStore::new(fixture());
    assert!(!store.select_graph_node("n0"));
    assert!(store.current_change().is_none());
    assert!(!store.has_pending_graph_selection());
}

#[test]
fn test_revision_commit_rebuilds_everything() {
    let mut store = SelectionStore::new(fixture());
    assert!(store.select_graph_node("n1"));
    store.take_pending_tree_reveal();

    store.highlight_revision(0);
    // Highlight alone leaves the cascade untouched.
    assert!(store.current_change().is_some());
    assert_eq!(store.selected_report_index(), 1);

    store.select_revision(0);
    assert!(store.current_change().is_none());
    assert!(store.selected_keys().is_empty());
    // Index now resolves the latest revision's pairs.
    assert_eq!(store.index().graph_id_for_tree_key("info-title"), Some("n1"));
    assert_eq!(store.index().graph_id_for_tree_key("paths-owners"), None);
}

#[test]
fn test_removal_position_falls_back_to_original() {
    let report = fixture();
    let earliest = &report.report_items[1];
    let removal = earliest
        .tree_root()
        .and_then(|root| root.children().iter().find(|n| n.key == "paths-owners"))
        .and_then(|n| n.carried_change())
        .unwrap();
    assert_eq!(removal.position(), Some((12, 3)));
}

#[test]
fn test_summary_reporter_covers_history() {
    let text = SummaryReporter::new().no_color().generate(&fixture());
    assert!(text.contains("Revisions:  2"));
    assert!(text.contains("9f2c4d1"));
    assert!(text.contains("4b0a9cc"));
    assert!(text.contains("1 breaking"));
}

#[test]
fn test_json_reporter_correlation_counts() {
    let json = JsonReporter::new().generate(&fixture()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["revisions"][0]["correlation"]["matched"], 2);
    assert_eq!(value["revisions"][0]["correlation"]["graph_changes"], 2);
    assert_eq!(value["revisions"][1]["correlation"]["matched"], 2);
    assert_eq!(value["revisions"][1]["statistics"]["totalBreaking"], 1);
}
