//! Reusable widgets shared by the tab views.

use crate::model::Change;
use crate::tui::theme::colors;
use crate::viewmodel::ChangeIcon;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const MIN_WIDTH: u16 = 70;
pub const MIN_HEIGHT: u16 = 18;

/// Whether the terminal is large enough for the tabbed layout.
#[must_use]
pub fn terminal_size_ok(width: u16, height: u16) -> bool {
    width >= MIN_WIDTH && height >= MIN_HEIGHT
}

/// Full-screen warning shown when the terminal is too small.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Terminal too small",
            Style::default().fg(scheme.warning).bold(),
        ),
        Line::from(""),
        Line::styled(
            format!(
                "Need at least {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}",
                area.width, area.height
            ),
            Style::default().fg(scheme.muted),
        ),
    ];
    let warning = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(warning, area);
}

/// Style for a change icon glyph.
#[must_use]
pub fn icon_style(icon: ChangeIcon) -> Style {
    let scheme = colors();
    match icon {
        ChangeIcon::Edited => Style::default().fg(scheme.modified),
        ChangeIcon::Added => Style::default().fg(scheme.added),
        ChangeIcon::Removed => Style::default().fg(scheme.removed),
        ChangeIcon::None => Style::default().fg(scheme.muted),
    }
}

/// Detail lines describing a single change, shared by the tree and
/// graph detail panes.
#[must_use]
pub fn change_detail_lines(change: &Change) -> Vec<Line<'static>> {
    let scheme = colors();
    let mut lines = vec![Line::from(vec![
        Span::styled("Property: ", Style::default().fg(scheme.muted)),
        Span::styled(change.property.clone(), Style::default().fg(scheme.text)),
    ])];
    lines.push(Line::from(vec![
        Span::styled("Kind:     ", Style::default().fg(scheme.muted)),
        Span::styled(change.kind.label(), Style::default().fg(scheme.primary)),
    ]));
    if change.breaking {
        lines.push(Line::styled(
            "BREAKING",
            Style::default().fg(scheme.breaking).bold(),
        ));
    }
    if let Some(original) = &change.original {
        lines.push(Line::from(vec![
            Span::styled("Original: ", Style::default().fg(scheme.muted)),
            Span::styled(original.clone(), Style::default().fg(scheme.removed)),
        ]));
    }
    if let Some(new) = &change.new {
        lines.push(Line::from(vec![
            Span::styled("New:      ", Style::default().fg(scheme.muted)),
            Span::styled(new.clone(), Style::default().fg(scheme.added)),
        ]));
    }
    if let Some((line, column)) = change.position() {
        lines.push(Line::from(vec![
            Span::styled("Position: ", Style::default().fg(scheme.muted)),
            Span::styled(
                format!("line {line}, column {column}"),
                Style::default().fg(scheme.text),
            ),
        ]));
    }
    lines
}

/// Render a bordered detail panel with a title.
pub fn render_detail_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    focused: bool,
) {
    let scheme = colors();
    let border = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str) {
    let scheme = colors();
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(scheme.muted)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border)),
    )
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render a popup overlay centered in `area`.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
) {
    let scheme = colors();
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(scheme.primary).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.primary)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(popup, popup_area);
}

/// Inline sparkline over per-revision change counts, newest first.
#[must_use]
pub fn sparkline(counts: &[u32]) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let max = counts.iter().copied().max().unwrap_or(0).max(1);
    counts
        .iter()
        .map(|&c| {
            let bucket = (c as usize * (BARS.len() - 1)) / max as usize;
            BARS[bucket]
        })
        .collect()
}

/// Helper function to create a centered rectangle.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_scales_to_max() {
        let s = sparkline(&[0, 4, 8]);
        let chars: Vec<char> = s.chars().collect();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn test_sparkline_all_zero() {
        assert_eq!(sparkline(&[0, 0]), "▁▁");
    }

    #[test]
    fn test_size_check() {
        assert!(terminal_size_ok(80, 24));
        assert!(!terminal_size_ok(40, 24));
        assert!(!terminal_size_ok(80, 10));
    }
}
