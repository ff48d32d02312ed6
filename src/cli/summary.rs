//! Summary command handler.
//!
//! Shorthand for `view -o summary`, always non-interactive.

use super::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::config::OutputConfig;
use crate::loader::load_report;
use crate::reports::SummaryReporter;
use anyhow::Result;
use std::path::Path;

/// Run the summary command
pub fn run_summary(report_path: &Path, output: &OutputConfig) -> Result<i32> {
    let report = load_report(report_path)?;
    let target = OutputTarget::from_option(output.file.clone());

    let reporter = if should_use_color(output.no_color) && target.is_terminal() {
        SummaryReporter::new()
    } else {
        SummaryReporter::new().no_color()
    };
    write_output(&reporter.generate(&report), &target)?;
    Ok(exit_codes::SUCCESS)
}
