//! Interactive TUI for exploring a change report.
//!
//! Five tabs over one [`SelectionStore`](crate::store::SelectionStore):
//! Tree, Graph, Timeline, Source, and Stats. Every tab reads the store
//! and writes back through its setters, so a selection made in the
//! graph surfaces in the tree (via the correlation index) and a
//! revision committed on the timeline resets them all.

mod app;
mod events;
pub mod theme;
mod ui;
mod views;
mod widgets;

pub use app::{ExplorerApp, SourcePane, Tab};
pub use events::Event;
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Theme};
pub use ui::run_tui;
