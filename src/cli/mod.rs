//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs, plus the shared output plumbing (target selection, format
//! auto-detection, color gating).

mod summary;
mod view;

pub use summary::run_summary;
pub use view::run_view;

// Re-export config types used by handlers
pub use crate::config::{OutputConfig, ViewConfig};

use crate::reports::OutputFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Process exit codes.
pub mod exit_codes {
    /// Clean run.
    pub const SUCCESS: i32 = 0;
    /// `--fail-on-breaking` tripped on the latest revision.
    pub const BREAKING_CHANGES: i32 = 1;
    /// Load or render failure.
    pub const ERROR: i32 = 3;
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Auto-detect the output format based on TTY and output target.
///
/// `Auto` becomes TUI on an interactive terminal and summary
/// otherwise; explicit choices pass through untouched.
#[must_use]
pub fn auto_detect_format(format: OutputFormat, target: &OutputTarget) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if target.is_terminal() {
                OutputFormat::Tui
            } else {
                OutputFormat::Summary
            }
        }
        other => other,
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert!(matches!(
            OutputTarget::from_option(None),
            OutputTarget::Stdout
        ));
        let path = PathBuf::from("/tmp/report.json");
        match OutputTarget::from_option(Some(path.clone())) {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("expected File variant"),
        }
    }

    #[test]
    fn test_explicit_format_passes_through() {
        let target = OutputTarget::File(PathBuf::from("/tmp/x"));
        assert_eq!(
            auto_detect_format(OutputFormat::Json, &target),
            OutputFormat::Json
        );
        assert_eq!(
            auto_detect_format(OutputFormat::Tui, &target),
            OutputFormat::Tui
        );
    }

    #[test]
    fn test_auto_format_without_tty_is_summary() {
        // File targets are never terminals.
        let target = OutputTarget::File(PathBuf::from("/tmp/x"));
        assert_eq!(
            auto_detect_format(OutputFormat::Auto, &target),
            OutputFormat::Summary
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
