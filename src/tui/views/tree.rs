//! Tree tab: the hierarchical change tree with a detail pane.

use crate::tui::app::ExplorerApp;
use crate::tui::theme::colors;
use crate::tui::widgets::{change_detail_lines, icon_style, render_detail_panel, render_empty_state};
use crate::viewmodel::flatten_visible;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub fn render_tree(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let scheme = colors();
    let Some(root) = app.decorated() else {
        render_empty_state(frame, area, "This revision detected no changes");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let rows = flatten_visible(root, app.store.expanded_keys());
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let marker = if row.node.has_children() {
                if row.expanded { "▾ " } else { "▸ " }
            } else {
                "  "
            };
            let mut spans = vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(scheme.muted)),
                Span::styled(
                    format!("{} ", row.node.icon.glyph()),
                    icon_style(row.node.icon),
                ),
            ];
            let title_style = if row.node.is_verb {
                Style::default().fg(scheme.accent).bold()
            } else if app.store.selected_keys().contains(&row.node.key) {
                Style::default().fg(scheme.highlight).bold()
            } else {
                Style::default().fg(scheme.text)
            };
            spans.push(Span::styled(row.node.title.clone(), title_style));
            if row.node.breaking || row.node.breaking_changes > 0 {
                spans.push(Span::styled(
                    " ⚠",
                    Style::default().fg(scheme.breaking).bold(),
                ));
            }
            if row.node.has_children() && row.node.total_changes > 0 {
                spans.push(Span::styled(
                    format!(" ({})", row.node.total_changes),
                    Style::default().fg(scheme.muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Changes ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        )
        .highlight_style(Style::default().bg(scheme.selection_bg));

    let mut state = ListState::default();
    state.select(Some(app.tree.cursor.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_detail(frame, chunks[1], app);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = colors();
    let lines = app.store.current_change().map_or_else(
        || {
            vec![
                Line::from(""),
                Line::styled(
                    "Select a change to inspect it",
                    Style::default().fg(scheme.muted),
                ),
                Line::from(""),
                Line::styled(
                    "Enter selects, h/l collapse and expand,",
                    Style::default().fg(scheme.muted),
                ),
                Line::styled(
                    "s jumps to the source location",
                    Style::default().fg(scheme.muted),
                ),
            ]
        },
        change_detail_lines,
    );
    render_detail_panel(frame, area, "Detail", lines, false);
}
