//! Output formatting functionality
//!
//! Line rendering shared by the streaming text output and the whole-report
//! formatters.

use crate::error::{GitreeError, Result};
use crate::models::{AuditReport, CheckMode, WarningRecord};
use ansi_term::Colour::Yellow;
use std::path::Path;

/// Render one warning for the given mode.
///
/// Path-enumerating modes print the bare path; the others print
/// `WARNING: <path> <message>`.
pub fn format_warning_line(warning: &WarningRecord, mode: CheckMode, use_colors: bool) -> String {
    if mode.enumerates_paths() {
        return warning.path.display().to_string();
    }

    if use_colors {
        format!("{} {} {}", Yellow.bold().paint("WARNING:"), warning.path.display(), warning.detail)
    } else {
        warning.to_string()
    }
}

/// Directory announcement printed in unified mode
pub fn format_visit_line(path: &Path) -> String {
    format!("Checking {}", path.display())
}

/// Summary block with one count per active category
pub fn format_summary(report: &AuditReport) -> String {
    let mut output = String::from("\nCheck Result:\n");

    for category in report.mode.active_categories() {
        output.push_str(&format!("{} {}\n", report.counts.get(*category), category.summary_label()));
    }

    output
}

/// Format an audit report as JSON
pub fn format_report_json(report: &AuditReport, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    json.push('\n');
    Ok(json)
}

/// Format an audit report as CSV, one row per warning
pub fn format_report_csv(report: &AuditReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["category", "path", "detail"])?;

    for warning in &report.warnings {
        writer.write_record([
            warning.category.to_string(),
            warning.path.display().to_string(),
            warning.detail.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GitreeError::Context {
            message: format!("CSV buffer error: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|source| GitreeError::CsvSerialize { source })
}
