//! Source tab event handlers.

use crate::tui::app::{ExplorerApp, SourcePane};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_source_keys(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => {
            app.source.pane = match app.source.pane {
                SourcePane::Original => SourcePane::Modified,
                SourcePane::Modified => SourcePane::Original,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.source.scroll = app.source.scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.source.scroll = app.source.scroll.saturating_add(1);
        }
        KeyCode::PageUp => {
            app.source.scroll = app.source.scroll.saturating_sub(20);
        }
        KeyCode::PageDown => {
            app.source.scroll = app.source.scroll.saturating_add(20);
        }
        KeyCode::Home | KeyCode::Char('g') => app.source.scroll = 0,
        KeyCode::End | KeyCode::Char('G') => app.source.scroll = u16::MAX,
        _ => {}
    }
}
