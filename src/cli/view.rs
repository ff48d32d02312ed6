//! View command handler.
//!
//! Loads a change report and presents it: interactively in the TUI, or
//! as a summary or JSON document for shell use.

use super::{auto_detect_format, exit_codes, should_use_color, write_output, OutputTarget};
use crate::config::ViewConfig;
use crate::loader::load_report;
use crate::model::Report;
use crate::reports::{JsonReporter, OutputFormat, SummaryReporter};
use crate::tui::{run_tui, ExplorerApp};
use anyhow::Result;

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<i32> {
    let report = load_report(&config.report_path)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);

    let breaking = latest_breaking_count(&report);

    if format == OutputFormat::Tui {
        let mut app = ExplorerApp::new(report);
        run_tui(&mut app)?;
    } else {
        let content = match format {
            OutputFormat::Json => JsonReporter::new().generate(&report)?,
            _ => {
                let reporter = if should_use_color(config.output.no_color) && target.is_terminal()
                {
                    SummaryReporter::new()
                } else {
                    SummaryReporter::new().no_color()
                };
                reporter.generate(&report)
            }
        };
        write_output(&content, &target)?;
    }

    if config.fail_on_breaking && breaking > 0 {
        tracing::warn!(breaking, "latest revision has breaking changes");
        return Ok(exit_codes::BREAKING_CHANGES);
    }
    Ok(exit_codes::SUCCESS)
}

/// Breaking-change count of the most recent revision.
fn latest_breaking_count(report: &Report) -> u32 {
    report
        .report_items
        .first()
        .map_or(0, |item| item.statistics.total_breaking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeStatistics, ReportItem};

    #[test]
    fn test_latest_breaking_count_reads_first_item() {
        let report = Report {
            date_generated: String::new(),
            report_items: vec![
                ReportItem {
                    statistics: ChangeStatistics {
                        total: 3,
                        total_breaking: 2,
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ReportItem::default(),
            ],
        };
        assert_eq!(latest_breaking_count(&report), 2);
    }
}
