//! Application state for the TUI.

use crate::model::Report;
use crate::store::SelectionStore;
use crate::viewmodel::{all_keys, decorate, flatten_visible, DecoratedNode};

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tree,
    Graph,
    Timeline,
    Source,
    Stats,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Tree,
        Self::Graph,
        Self::Timeline,
        Self::Source,
        Self::Stats,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Tree => "Tree",
            Self::Graph => "Graph",
            Self::Timeline => "Timeline",
            Self::Source => "Source",
            Self::Stats => "Stats",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Which source pane is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePane {
    Original,
    Modified,
}

/// Cursor state for the tree tab: a row index over the flattened
/// visible rows plus the window scroll offset.
#[derive(Debug, Default)]
pub struct TreeTabState {
    pub cursor: usize,
    pub scroll: usize,
}

/// Cursor state for the graph tab's node list.
#[derive(Debug, Default)]
pub struct GraphTabState {
    pub cursor: usize,
    pub scroll: usize,
}

/// Scroll state for the source tab.
#[derive(Debug)]
pub struct SourceTabState {
    pub pane: SourcePane,
    pub scroll: u16,
    /// Cursor position (line, column) awaiting reveal once the pane
    /// height is known at render time. Fire-and-forget, never awaited.
    pub pending_reveal: Option<(u32, u32)>,
}

impl Default for SourceTabState {
    fn default() -> Self {
        Self {
            pane: SourcePane::Modified,
            scroll: 0,
            pending_reveal: None,
        }
    }
}

/// Transient footer status message.
#[derive(Debug)]
pub struct StatusMessage {
    pub text: String,
}

/// The explorer application.
///
/// Owns the selection store and per-tab cursor state. The decorated
/// tree is a cache keyed by the committed revision index; it is
/// rebuilt (and the tree fully expanded, matching the report's default
/// presentation) whenever the committed revision moves.
#[derive(Debug)]
pub struct ExplorerApp {
    pub store: SelectionStore,
    pub tab: Tab,
    pub tree: TreeTabState,
    pub graph: GraphTabState,
    pub source: SourceTabState,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    status: Option<StatusMessage>,
    decorated: Option<DecoratedNode>,
    decorated_revision: usize,
}

impl ExplorerApp {
    /// Build the app around a loaded report.
    #[must_use]
    pub fn new(report: Report) -> Self {
        let store = SelectionStore::new(report);
        let mut app = Self {
            store,
            tab: Tab::Tree,
            tree: TreeTabState::default(),
            graph: GraphTabState::default(),
            source: SourceTabState::default(),
            show_help: false,
            should_quit: false,
            tick: 0,
            status: None,
            decorated: None,
            decorated_revision: usize::MAX,
        };
        app.sync_revision();
        app
    }

    /// Decorated tree for the active revision, `None` when the
    /// revision has no tree.
    #[must_use]
    pub const fn decorated(&self) -> Option<&DecoratedNode> {
        self.decorated.as_ref()
    }

    /// Re-derive revision-scoped caches when the committed revision
    /// has moved since the last pass. Called once per event loop turn.
    pub fn sync_revision(&mut self) {
        let revision = self.store.selected_report_index();
        if revision == self.decorated_revision {
            return;
        }
        self.decorated_revision = revision;
        self.decorated = self.store.active_item().tree_root().map(decorate);
        // Default presentation expands the whole tree.
        let expanded = self
            .store
            .active_item()
            .tree_root()
            .map(all_keys)
            .unwrap_or_default();
        self.store.set_expanded_keys(expanded);
        self.tree = TreeTabState::default();
        self.graph = GraphTabState::default();
        self.source = SourceTabState::default();
    }

    /// Visible tree rows under the current expansion state, as
    /// (key, is-selected) pairs resolved against the store.
    #[must_use]
    pub fn visible_tree_len(&self) -> usize {
        self.decorated.as_ref().map_or(0, |root| {
            flatten_visible(root, self.store.expanded_keys()).len()
        })
    }

    /// Snapshot of the visible row under the tree cursor: the node
    /// key, whether it has children, and its carried change.
    #[must_use]
    pub fn tree_row_under_cursor(&self) -> Option<(String, bool, Option<crate::model::Change>)> {
        let root = self.decorated.as_ref()?;
        let rows = flatten_visible(root, self.store.expanded_keys());
        let row = rows.get(self.tree.cursor)?;
        Some((
            row.node.key.clone(),
            row.node.has_children(),
            row.node.change.clone(),
        ))
    }

    /// Switch to the next tab, wrapping.
    pub fn next_tab(&mut self) {
        let next = (self.tab.index() + 1) % Tab::ALL.len();
        self.tab = Tab::ALL[next];
    }

    /// Switch to the previous tab, wrapping.
    pub fn prev_tab(&mut self) {
        let prev = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.tab = Tab::ALL[prev];
    }

    /// Reconcile a pending graph-side selection into the tree tab:
    /// resolve it through the correlation index, move the tree cursor
    /// to the revealed key, and report it. A miss leaves the tree
    /// untouched; graph-only changes are a normal state.
    pub fn reconcile_graph_selection(&mut self) {
        if !self.store.has_pending_graph_selection() {
            return;
        }
        let Some(key) = self.store.take_pending_tree_reveal() else {
            self.set_status_message("change has no tree counterpart".to_string());
            return;
        };
        self.reveal_tree_key(&key);
    }

    /// Move the tree cursor onto `key` if it is currently visible.
    pub fn reveal_tree_key(&mut self, key: &str) {
        let Some(root) = &self.decorated else {
            return;
        };
        let rows = flatten_visible(root, self.store.expanded_keys());
        if let Some(pos) = rows.iter().position(|row| row.node.key == key) {
            self.tree.cursor = pos;
        }
    }

    /// Point the source tab cursor at the current change and switch to
    /// the source tab.
    pub fn jump_to_source(&mut self) {
        let position = self.store.current_change().and_then(crate::model::Change::position);
        self.source.pending_reveal = position.or(Some((1, 1)));
        self.tab = Tab::Source;
    }

    /// Set a transient status message shown in the footer.
    pub fn set_status_message(&mut self, text: String) {
        self.status = Some(StatusMessage { text });
    }

    /// Clear the status message.
    pub fn clear_status_message(&mut self) {
        self.status = None;
    }

    /// Current status message text, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}
