//! Graph tab: the navigation graph's nodes as a selectable list.
//!
//! Change-carrying nodes show their correlated tree key so the
//! cross-view link is visible; structural nodes render muted and are
//! inert to selection.

use crate::tui::app::ExplorerApp;
use crate::tui::theme::colors;
use crate::tui::widgets::{change_detail_lines, render_detail_panel, render_empty_state};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub fn render_graph(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let scheme = colors();
    let nodes = app.store.active_item().graph_nodes();
    if nodes.is_empty() {
        render_empty_state(frame, area, "This revision carries no graph");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = nodes
        .iter()
        .map(|node| {
            let mut spans = Vec::new();
            if node.data.is_some() {
                let correlated = app.store.index().tree_key_for_graph_id(&node.id).is_some();
                spans.push(Span::styled("● ", Style::default().fg(scheme.primary)));
                spans.push(Span::styled(
                    node.label().to_string(),
                    Style::default().fg(scheme.text),
                ));
                if correlated {
                    spans.push(Span::styled(
                        "  ⇄ tree",
                        Style::default().fg(scheme.success),
                    ));
                } else {
                    spans.push(Span::styled(
                        "  (graph only)",
                        Style::default().fg(scheme.muted),
                    ));
                }
                if node.data.as_ref().is_some_and(|c| c.breaking) {
                    spans.push(Span::styled(
                        " ⚠",
                        Style::default().fg(scheme.breaking).bold(),
                    ));
                }
            } else {
                spans.push(Span::styled("○ ", Style::default().fg(scheme.muted)));
                spans.push(Span::styled(
                    node.label().to_string(),
                    Style::default().fg(scheme.muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        " Graph ({} nodes, {} matched) ",
        nodes.len(),
        app.store.index().len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        )
        .highlight_style(Style::default().bg(scheme.selection_bg));

    let mut state = ListState::default();
    state.select(Some(app.graph.cursor.min(nodes.len() - 1)));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let lines = app.store.current_change().map_or_else(
        || {
            vec![
                Line::from(""),
                Line::styled(
                    "Enter selects a change node;",
                    Style::default().fg(scheme.muted),
                ),
                Line::styled(
                    "the tree view follows the selection",
                    Style::default().fg(scheme.muted),
                ),
            ]
        },
        change_detail_lines,
    );
    render_detail_panel(frame, chunks[1], "Detail", lines, false);
}
