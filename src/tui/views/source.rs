//! Source tab: the original and modified documents side by side.
//!
//! A selected change's position is revealed by centering its line in
//! the focused pane; the reveal is consumed on first render.

use crate::tui::app::{ExplorerApp, SourcePane};
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_source(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let pane_height = chunks[0].height.saturating_sub(2);
    if let Some((line, _column)) = app.source.pending_reveal.take() {
        // Center the revealed line in the viewport.
        let target = line.saturating_sub(1) as u16;
        app.source.scroll = target.saturating_sub(pane_height / 2);
    }

    let highlight = app
        .store
        .current_change()
        .and_then(crate::model::Change::position)
        .map(|(line, _)| line);

    let (original, modified) = {
        let item = app.store.active_item();
        (item.original_spec.clone(), item.modified_spec.clone())
    };
    let focus_original = app.source.pane == SourcePane::Original;
    render_pane(frame, chunks[0], "Original", &original, app, focus_original, highlight);
    render_pane(frame, chunks[1], "Modified", &modified, app, !focus_original, highlight);
}

fn render_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    app: &mut ExplorerApp,
    focused: bool,
    highlight_line: Option<u32>,
) {
    let scheme = colors();
    let total_lines = content.lines().count() as u16;
    let pane_height = area.height.saturating_sub(2);

    // Clamp End-key (and stale) scroll to the real content length.
    let max_scroll = total_lines.saturating_sub(pane_height);
    if app.source.scroll > max_scroll {
        app.source.scroll = max_scroll;
    }

    let lines: Vec<Line> = content
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let line_no = i as u32 + 1;
            let number = Span::styled(
                format!("{line_no:>4} "),
                Style::default().fg(scheme.muted),
            );
            let body_style = if Some(line_no) == highlight_line {
                Style::default().fg(scheme.highlight).bg(scheme.selection_bg)
            } else {
                Style::default().fg(scheme.text)
            };
            Line::from(vec![number, Span::styled(text.to_string(), body_style)])
        })
        .collect();

    let border = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };
    let pane = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .scroll((app.source.scroll, 0));
    frame.render_widget(pane, area);
}
