//! Event handling for the TUI: key polling and dispatch to the
//! per-tab handlers.

mod graph;
mod source;
mod timeline;
mod tree;

use crate::config::TuiPreferences;
use crate::tui::app::{ExplorerApp, Tab};
use crate::tui::theme::toggle_theme;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
#[derive(Debug)]
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut ExplorerApp, key: KeyEvent) {
    // Clear any status message on key press
    app.clear_status_message();

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => app.show_help = false,
            _ => {}
        }
        return;
    }

    // Global key bindings
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('T') => {
            let theme = toggle_theme();
            let prefs = TuiPreferences {
                theme: theme.name().to_string(),
            };
            let _ = prefs.save();
            app.set_status_message(format!("Theme: {}", theme.name()));
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        KeyCode::Char('1') => {
            app.tab = Tab::Tree;
            return;
        }
        KeyCode::Char('2') => {
            app.tab = Tab::Graph;
            return;
        }
        KeyCode::Char('3') => {
            app.tab = Tab::Timeline;
            return;
        }
        KeyCode::Char('4') => {
            app.tab = Tab::Source;
            return;
        }
        KeyCode::Char('5') => {
            app.tab = Tab::Stats;
            return;
        }
        _ => {}
    }

    // Tab-specific key bindings
    match app.tab {
        Tab::Tree => tree::handle_tree_keys(app, key),
        Tab::Graph => graph::handle_graph_keys(app, key),
        Tab::Timeline => timeline::handle_timeline_keys(app, key),
        Tab::Source => source::handle_source_keys(app, key),
        Tab::Stats => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Change, ChangeContext, ChangeKind, ChangeStatistics, GraphData, GraphNode, Report,
        ReportItem, TreeNode,
    };
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn change() -> Change {
        Change {
            breaking: true,
            kind: ChangeKind::Modified,
            property: "title".into(),
            original: Some("Old".into()),
            new: Some("New".into()),
            context: ChangeContext {
                new_line: Some(2),
                new_column: Some(3),
                ..Default::default()
            },
        }
    }

    fn app() -> ExplorerApp {
        let c = change();
        let item = ReportItem {
            original_spec: "a: 1\nb: 2\n".into(),
            modified_spec: "a: 1\nb: 3\n".into(),
            tree: Some(vec![TreeNode {
                key: "root".into(),
                title_string: "document".into(),
                is_leaf: false,
                total_changes: 1,
                breaking_changes: 1,
                change: None,
                children: Some(vec![TreeNode {
                    key: "leaf".into(),
                    title_string: "title".into(),
                    is_leaf: true,
                    total_changes: 1,
                    breaking_changes: 1,
                    change: Some(c.clone()),
                    children: None,
                }]),
            }]),
            graph: Some(GraphData {
                nodes: vec![GraphNode {
                    id: "n1".into(),
                    text: None,
                    data: Some(c),
                }],
                edges: Vec::new(),
            }),
            statistics: ChangeStatistics {
                total: 1,
                total_breaking: 1,
                modified: 1,
                ..Default::default()
            },
        };
        ExplorerApp::new(Report {
            date_generated: "now".into(),
            report_items: vec![item.clone(), item],
        })
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Timeline);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.tab, Tab::Tree);
    }

    #[test]
    fn test_tab_cycles() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Graph);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Tree);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Tree);
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_tree_enter_selects_leaf_change() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.tree.cursor, 1);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.store.current_change().is_some());
        assert_eq!(app.store.selected_keys(), ["leaf".to_string()]);
    }

    #[test]
    fn test_tree_enter_toggles_internal_node() {
        let mut app = app();
        assert!(app.store.is_expanded("root"));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.store.is_expanded("root"));
        assert!(app.store.current_change().is_none());
    }

    #[test]
    fn test_timeline_enter_commits_revision() {
        let mut app = app();
        app.tab = Tab::Timeline;
        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.store.highlighted_report_index(), 0);
        assert_eq!(app.store.selected_report_index(), 1);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.selected_report_index(), 0);
    }

    #[test]
    fn test_graph_enter_records_pending_selection() {
        let mut app = app();
        app.tab = Tab::Graph;
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.store.has_pending_graph_selection());
        assert!(app.store.current_change().is_some());
    }
}
