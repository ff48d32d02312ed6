//! Tree tab event handlers.

use crate::tui::app::ExplorerApp;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_tree_keys(app: &mut ExplorerApp, key: KeyEvent) {
    let len = app.visible_tree_len();
    if len == 0 {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.tree.cursor = app.tree.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.tree.cursor = (app.tree.cursor + 1).min(len - 1);
        }
        KeyCode::PageUp => {
            app.tree.cursor = app.tree.cursor.saturating_sub(10);
        }
        KeyCode::PageDown => {
            app.tree.cursor = (app.tree.cursor + 10).min(len - 1);
        }
        KeyCode::Home | KeyCode::Char('g') => app.tree.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => app.tree.cursor = len - 1,
        KeyCode::Enter | KeyCode::Char(' ') => activate_row(app),
        KeyCode::Left | KeyCode::Char('h') => collapse_row(app),
        KeyCode::Right | KeyCode::Char('l') => expand_row(app),
        KeyCode::Char('s') => {
            if app.store.current_change().is_some() {
                app.jump_to_source();
            }
        }
        _ => {}
    }
}

/// Enter on an internal node toggles expansion; on a change-carrying
/// leaf it selects the change.
fn activate_row(app: &mut ExplorerApp) {
    let Some((key, has_children, change)) = app.tree_row_under_cursor() else {
        return;
    };
    if has_children {
        app.store.toggle_expanded(&key);
        clamp_cursor(app);
    } else if let Some(change) = change {
        app.store.select_tree_node(&key, change);
    }
}

fn expand_row(app: &mut ExplorerApp) {
    if let Some((key, true, _)) = app.tree_row_under_cursor() {
        if !app.store.is_expanded(&key) {
            app.store.toggle_expanded(&key);
        }
    }
}

fn collapse_row(app: &mut ExplorerApp) {
    if let Some((key, true, _)) = app.tree_row_under_cursor() {
        if app.store.is_expanded(&key) {
            app.store.toggle_expanded(&key);
            clamp_cursor(app);
        }
    }
}

/// Collapsing can shrink the visible row count below the cursor.
fn clamp_cursor(app: &mut ExplorerApp) {
    let len = app.visible_tree_len();
    if len > 0 && app.tree.cursor >= len {
        app.tree.cursor = len - 1;
    }
}
