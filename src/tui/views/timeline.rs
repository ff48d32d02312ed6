//! Timeline tab: the revision history, newest first.
//!
//! The cursor previews a revision without committing it; Enter commits
//! and the other tabs repopulate from the newly active revision.

use crate::store::NavPhase;
use crate::tui::app::ExplorerApp;
use crate::tui::theme::colors;
use crate::tui::widgets::{render_detail_panel, sparkline};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Engine commit dates are RFC 3339; show them in a compact local
/// form, falling back to the raw string for anything unparseable.
fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

pub fn render_timeline(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let scheme = colors();
    let report = app.store.report();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let selected = app.store.selected_report_index();
    let items: Vec<ListItem> = report
        .report_items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let stats = &item.statistics;
            let marker = if idx == selected { "● " } else { "  " };
            let label = stats.commit.as_ref().map_or_else(
                || format!("revision {idx}"),
                |c| format!("{} {}", c.short_hash(), c.message.lines().next().unwrap_or("")),
            );
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(scheme.primary)),
                Span::styled(label, Style::default().fg(scheme.text)),
                Span::styled(
                    format!("  {} changes", stats.total),
                    Style::default().fg(scheme.muted),
                ),
            ];
            if stats.total_breaking > 0 {
                spans.push(Span::styled(
                    format!("  {} breaking", stats.total_breaking),
                    Style::default().fg(scheme.breaking),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let counts: Vec<u32> = report.report_items.iter().map(|i| i.statistics.total).collect();
    let title = format!(" Timeline  {} ", sparkline(&counts));
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border_focused)),
        )
        .highlight_style(Style::default().bg(scheme.selection_bg));

    let mut state = ListState::default();
    state.select(Some(app.store.highlighted_report_index()));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_revision_detail(frame, chunks[1], app);
}

fn render_revision_detail(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = colors();
    let highlighted = app.store.highlighted_report_index();
    let Some(item) = app.store.report().item(highlighted) else {
        return;
    };
    let stats = &item.statistics;

    let mut lines = Vec::new();
    if let Some(commit) = &stats.commit {
        lines.push(Line::from(vec![
            Span::styled("Commit:  ", Style::default().fg(scheme.muted)),
            Span::styled(commit.short_hash().to_string(), Style::default().fg(scheme.primary)),
        ]));
        if !commit.author.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Author:  ", Style::default().fg(scheme.muted)),
                Span::styled(commit.author.clone(), Style::default().fg(scheme.text)),
            ]));
        }
        if !commit.date.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Date:    ", Style::default().fg(scheme.muted)),
                Span::styled(format_date(&commit.date), Style::default().fg(scheme.text)),
            ]));
        }
        if !commit.message.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                commit.message.clone(),
                Style::default().fg(scheme.text),
            ));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Total:    ", Style::default().fg(scheme.muted)),
        Span::styled(stats.total.to_string(), Style::default().fg(scheme.text)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Breaking: ", Style::default().fg(scheme.muted)),
        Span::styled(
            stats.total_breaking.to_string(),
            Style::default().fg(scheme.breaking),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Added:    ", Style::default().fg(scheme.muted)),
        Span::styled(stats.added.to_string(), Style::default().fg(scheme.added)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Modified: ", Style::default().fg(scheme.muted)),
        Span::styled(stats.modified.to_string(), Style::default().fg(scheme.modified)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Removed:  ", Style::default().fg(scheme.muted)),
        Span::styled(stats.removed.to_string(), Style::default().fg(scheme.removed)),
    ]));

    lines.push(Line::from(""));
    let hint = match app.store.nav_phase() {
        NavPhase::Idle => "j/k to browse revisions",
        NavPhase::Highlighted(_) => "Enter to view this revision",
        NavPhase::Selected(_) => "Viewing this revision",
    };
    lines.push(Line::styled(hint, Style::default().fg(scheme.muted)));

    render_detail_panel(frame, area, "Revision", lines, false);
}
