//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use crate::model::{Report, ReportItem};
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
#[derive(Debug)]
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render the full report summary: the most recent revision in
    /// detail, then one line per historical revision.
    #[must_use]
    pub fn generate(&self, report: &Report) -> String {
        let mut lines = Vec::new();

        lines.push(self.color("OpenAPI Change Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Generated:", "cyan"),
            report.date_generated
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Revisions:", "cyan"),
            report.len()
        ));
        lines.push(String::new());

        if let Some(latest) = report.item(0) {
            lines.push(self.color("Latest revision", "bold"));
            self.push_item_lines(&mut lines, latest);
            lines.push(String::new());
        }

        if report.len() > 1 {
            lines.push(self.color("History", "bold"));
            for (idx, item) in report.report_items.iter().enumerate() {
                lines.push(self.history_line(idx, item));
            }
        }

        lines.join("\n")
    }

    fn push_item_lines(&self, lines: &mut Vec<String>, item: &ReportItem) {
        let stats = &item.statistics;
        if let Some(commit) = &stats.commit {
            lines.push(format!(
                "  {} {} {}",
                self.color(commit.short_hash(), "yellow"),
                commit.date,
                commit.message
            ));
            lines.push(format!("  {} <{}>", commit.author, commit.author_email));
        }
        lines.push(format!(
            "  {} {}   {} {}   {} {}   {} {}",
            self.color("total:", "cyan"),
            stats.total,
            self.color("added:", "green"),
            stats.added,
            self.color("modified:", "yellow"),
            stats.modified,
            self.color("removed:", "red"),
            stats.removed,
        ));
        if stats.total_breaking > 0 {
            lines.push(format!(
                "  {} {} ({} added, {} modified, {} removed)",
                self.color("breaking:", "red"),
                stats.total_breaking,
                stats.breaking_added,
                stats.breaking_modified,
                stats.breaking_removed,
            ));
        }
        if !item.has_changes() {
            lines.push(self.color("  no changes detected in this revision", "dim"));
        }
    }

    fn history_line(&self, idx: usize, item: &ReportItem) -> String {
        let stats = &item.statistics;
        let mut line = format!("  [{idx}]");
        if let Some(commit) = &stats.commit {
            let _ = write!(line, " {}", self.color(commit.short_hash(), "yellow"));
        }
        let _ = write!(line, " {} changes", stats.total);
        if stats.total_breaking > 0 {
            let _ = write!(
                line,
                " ({})",
                self.color(&format!("{} breaking", stats.total_breaking), "red")
            );
        }
        line
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
