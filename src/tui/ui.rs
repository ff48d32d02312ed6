//! Main UI rendering and the terminal event loop.

use super::app::{ExplorerApp, Tab};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, set_theme, Theme};
use super::views;
use super::widgets::{render_popup, render_size_warning, terminal_size_ok};
use crate::config::TuiPreferences;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Tabs},
};
use std::io::{self, stdout};

/// Run the TUI application
pub fn run_tui(app: &mut ExplorerApp) -> io::Result<()> {
    // Load saved theme preference
    let prefs = TuiPreferences::load();
    set_theme(Theme::from_name(&prefs.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event handler
    let events = EventHandler::default();

    // Main loop
    loop {
        app.sync_revision();
        if app.tab == Tab::Tree {
            app.reconcile_graph_selection();
        }

        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick += 1;
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function
fn render(frame: &mut Frame, app: &mut ExplorerApp) {
    let area = frame.area();

    if !terminal_size_ok(area.width, area.height) {
        render_size_warning(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_tabs(frame, chunks[0], app);

    match app.tab {
        Tab::Tree => views::render_tree(frame, chunks[1], app),
        Tab::Graph => views::render_graph(frame, chunks[1], app),
        Tab::Timeline => views::render_timeline(frame, chunks[1], app),
        Tab::Source => views::render_source(frame, chunks[1], app),
        Tab::Stats => views::render_stats(frame, chunks[1], app),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = colors();
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", i + 1),
                    Style::default().fg(scheme.muted),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let revision = app.store.selected_report_index();
    let total = app.store.report().len();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(
            ratatui::widgets::Block::default()
                .title(format!(" oas-explorer  revision {revision}/{} ", total - 1))
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .style(Style::default().fg(scheme.muted))
        .highlight_style(Style::default().fg(scheme.primary).bold());
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let scheme = colors();
    let text = app.status_message().map_or_else(
        || match app.tab {
            Tab::Tree => "j/k move  Enter select  h/l fold  s source  ? help  q quit",
            Tab::Graph => "j/k move  Enter select  s source  ? help  q quit",
            Tab::Timeline => "j/k browse  Enter view revision  ? help  q quit",
            Tab::Source => "j/k scroll  o switch pane  g/G top/bottom  ? help  q quit",
            Tab::Stats => "1-5 switch tabs  ? help  q quit",
        },
        |msg| msg,
    );
    let footer = Paragraph::new(Line::styled(text, Style::default().fg(scheme.muted)));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Style::default().fg(scheme.primary)),
            Span::styled(desc.to_string(), Style::default().fg(scheme.text)),
        ])
    };
    let content = vec![
        Line::from(""),
        Line::styled("Global", Style::default().fg(scheme.accent).bold()),
        key("1-5", "switch tab"),
        key("Tab / S-Tab", "next / previous tab"),
        key("T", "toggle theme"),
        key("q", "quit"),
        Line::from(""),
        Line::styled("Tree", Style::default().fg(scheme.accent).bold()),
        key("j/k", "move cursor"),
        key("Enter", "select change / toggle fold"),
        key("h/l", "collapse / expand"),
        key("s", "jump to source location"),
        Line::from(""),
        Line::styled("Graph", Style::default().fg(scheme.accent).bold()),
        key("Enter", "select change node"),
        Line::from(""),
        Line::styled("Timeline", Style::default().fg(scheme.accent).bold()),
        key("j/k", "browse revisions (preview only)"),
        key("Enter", "commit to revision"),
        Line::from(""),
        Line::styled("Source", Style::default().fg(scheme.accent).bold()),
        key("o", "switch pane"),
        key("j/k", "scroll"),
    ];
    render_popup(frame, area, "Help", content, 60, 80);
}
