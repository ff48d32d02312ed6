//! Stats tab: aggregate counters and provenance for the active
//! revision.

use crate::tui::app::ExplorerApp;
use crate::tui::theme::colors;
use crate::tui::widgets::render_detail_panel;
use ratatui::prelude::*;

pub fn render_stats(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let scheme = colors();
    let item = app.store.active_item();
    let stats = item.statistics.clone();
    let index_len = app.store.index().len();
    let collisions = app.store.index().collision_count();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let counter = |label: &str, value: u32, color: Color| {
        Line::from(vec![
            Span::styled(format!("{label:<22}"), Style::default().fg(scheme.muted)),
            Span::styled(value.to_string(), Style::default().fg(color).bold()),
        ])
    };

    let left = vec![
        counter("Total changes", stats.total, scheme.text),
        counter("Breaking", stats.total_breaking, scheme.breaking),
        Line::from(""),
        counter("Added", stats.added, scheme.added),
        counter("Modified", stats.modified, scheme.modified),
        counter("Removed", stats.removed, scheme.removed),
        Line::from(""),
        counter("Breaking added", stats.breaking_added, scheme.breaking),
        counter("Breaking modified", stats.breaking_modified, scheme.breaking),
        counter("Breaking removed", stats.breaking_removed, scheme.breaking),
    ];
    render_detail_panel(frame, chunks[0], "Changes", left, false);

    let mut right = Vec::new();
    if let Some(commit) = &stats.commit {
        right.push(Line::from(vec![
            Span::styled("Commit:  ", Style::default().fg(scheme.muted)),
            Span::styled(commit.short_hash().to_string(), Style::default().fg(scheme.primary)),
        ]));
        if !commit.author.is_empty() {
            right.push(Line::from(vec![
                Span::styled("Author:  ", Style::default().fg(scheme.muted)),
                Span::styled(
                    format!("{} <{}>", commit.author, commit.author_email),
                    Style::default().fg(scheme.text),
                ),
            ]));
        }
        if !commit.date.is_empty() {
            right.push(Line::from(vec![
                Span::styled("Date:    ", Style::default().fg(scheme.muted)),
                Span::styled(commit.date.clone(), Style::default().fg(scheme.text)),
            ]));
        }
        right.push(Line::from(""));
    }
    right.push(Line::from(vec![
        Span::styled("Matched pairs:  ", Style::default().fg(scheme.muted)),
        Span::styled(index_len.to_string(), Style::default().fg(scheme.success)),
    ]));
    right.push(Line::from(vec![
        Span::styled("Collisions:     ", Style::default().fg(scheme.muted)),
        Span::styled(
            collisions.to_string(),
            Style::default().fg(if collisions > 0 {
                scheme.warning
            } else {
                scheme.muted
            }),
        ),
    ]));
    right.push(Line::from(""));
    right.push(Line::from(vec![
        Span::styled("Generated: ", Style::default().fg(scheme.muted)),
        Span::styled(
            app.store.report().date_generated.clone(),
            Style::default().fg(scheme.text),
        ),
    ]));
    render_detail_panel(frame, chunks[1], "Provenance", right, false);
}
