//! Non-interactive output generation.
//!
//! This module renders a loaded report for shell use:
//! - Summary: compact, colored terminal overview
//! - JSON: structured projection for programmatic consumption
//!
//! The interactive TUI lives in [`crate::tui`] and shares nothing with
//! these generators beyond the model and the correlation core.

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use clap::ValueEnum;

/// Output format selection for the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief summary output
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}
