//! Report document loading.
//!
//! A report is a single JSON document, fully resident in memory once
//! loaded; there is no streaming path and no other wire protocol.

use crate::error::{ErrorContext, ExplorerError, LoadErrorKind, Result};
use crate::model::Report;
use std::path::Path;

/// Load a report document from a file.
pub fn load_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ExplorerError::io(path, e))
        .context("reading report file")?;
    load_report_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a report document from a string.
///
/// A report with zero revisions is rejected: every downstream
/// consumer (store, navigator, views) is specified against at least
/// one revision. A revision missing its tree or graph is fine; it
/// renders as an empty state.
pub fn load_report_str(content: &str) -> Result<Report> {
    let report: Report = serde_json::from_str(content)?;
    if report.is_empty() {
        return Err(ExplorerError::load(
            "report validation",
            LoadErrorKind::EmptyReport,
        ));
    }
    tracing::info!(
        revisions = report.len(),
        generated = %report.date_generated,
        "report loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "dateGenerated": "Wed, 28 Aug 2026 10:00:00 GMT",
        "reportItems": [
            {
                "originalSpec": "a",
                "modifiedSpec": "b",
                "statistics": {"total": 0, "totalBreaking": 0, "added": 0,
                               "modified": 0, "removed": 0, "breakingAdded": 0,
                               "breakingModified": 0, "breakingRemoved": 0}
            }
        ]
    }"#;

    #[test]
    fn test_load_minimal_report() {
        let report = load_report_str(MINIMAL).unwrap();
        assert_eq!(report.len(), 1);
        assert!(!report.report_items[0].has_changes());
    }

    #[test]
    fn test_empty_report_rejected() {
        let err = load_report_str(r#"{"dateGenerated": "x", "reportItems": []}"#).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::Load {
                source: LoadErrorKind::EmptyReport,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = load_report_str("not json").unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_keeps_path_context() {
        let err = load_report(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(err.to_string().contains("report.json"));
    }
}
