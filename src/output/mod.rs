//! Output formatting and writing functionality

mod formatters;
mod progress;
mod stream;
mod writers;

pub use self::formatters::{format_summary, format_visit_line, format_warning_line};
pub use self::progress::ProgressReporter;
pub use self::stream::StreamObserver;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::{AuditReport, OutputFormat, Settings};

/// Trait for different output formatters
pub trait Formatter {
    /// Format an audit report into a string
    fn format(&self, report: &AuditReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub quiet: bool,
    /// Warning lines were already streamed during the walk
    pub streamed: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, quiet: bool, streamed: bool) -> Self {
        Self {
            use_colors,
            quiet,
            streamed,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        if !self.streamed {
            for warning in &report.warnings {
                output.push_str(&format_warning_line(warning, report.mode, self.use_colors));
                output.push('\n');
            }
        }

        if !self.quiet {
            output.push_str(&format_summary(report));
        }

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        formatters::format_report_json(report, self.pretty)
    }
}

/// CSV formatter for spreadsheet analysis
#[derive(Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create the formatter that renders the finished report.
///
/// For text output `streamed` says whether the warning lines already went
/// out through a [`StreamObserver`].
pub fn create_formatter(settings: &Settings, streamed: bool) -> Box<dyn Formatter> {
    match settings.output_format {
        OutputFormat::Text => Box::new(TextFormatter::new(settings.use_colors, settings.quiet, streamed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
