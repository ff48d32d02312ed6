//! Graph tab event handlers.

use crate::tui::app::ExplorerApp;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_graph_keys(app: &mut ExplorerApp, key: KeyEvent) {
    let len = app.store.active_item().graph_nodes().len();
    if len == 0 {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.graph.cursor = app.graph.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.graph.cursor = (app.graph.cursor + 1).min(len - 1);
        }
        KeyCode::Home | KeyCode::Char('g') => app.graph.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => app.graph.cursor = len - 1,
        KeyCode::Enter | KeyCode::Char(' ') => activate_node(app),
        KeyCode::Char('s') => {
            if app.store.current_change().is_some() {
                app.jump_to_source();
            }
        }
        _ => {}
    }
}

/// Selecting a change node records it for the tree view to reconcile;
/// structural nodes are inert.
fn activate_node(app: &mut ExplorerApp) {
    let node_id = app
        .store
        .active_item()
        .graph_nodes()
        .get(app.graph.cursor)
        .map(|n| n.id.clone());
    let Some(node_id) = node_id else {
        return;
    };
    if app.store.select_graph_node(&node_id) {
        app.set_status_message("change selected, press 1 to view in tree".to_string());
    }
}
