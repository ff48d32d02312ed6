//! Timeline tab event handlers.
//!
//! `j`/`k` move the highlight without committing; Enter commits the
//! highlighted revision and triggers the selection cascade.

use crate::tui::app::ExplorerApp;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_timeline_keys(app: &mut ExplorerApp, key: KeyEvent) {
    let len = app.store.report().len();

    match key.code {
        // The list renders newest first, so moving down walks toward
        // earlier revisions.
        KeyCode::Up | KeyCode::Char('k') => {
            let idx = app.store.highlighted_report_index().saturating_sub(1);
            app.store.highlight_revision(idx);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let idx = (app.store.highlighted_report_index() + 1).min(len - 1);
            app.store.highlight_revision(idx);
        }
        KeyCode::Home | KeyCode::Char('g') => app.store.highlight_revision(0),
        KeyCode::End | KeyCode::Char('G') => app.store.highlight_revision(len - 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let idx = app.store.highlighted_report_index();
            app.store.select_revision(idx);
            app.set_status_message(format!("Viewing revision {idx}"));
        }
        _ => {}
    }
}
