//! Streaming text output
//!
//! Bridges walk events to an [`OutputWriter`] so text reports appear while
//! the walk is still running.

use super::formatters::{format_visit_line, format_warning_line};
use super::progress::ProgressReporter;
use super::writers::OutputWriter;
use crate::core::AuditObserver;
use crate::error::Result;
use crate::models::{CheckMode, WarningRecord};
use std::path::Path;

/// Observer that writes report lines as events arrive
pub struct StreamObserver<'a> {
    writer: Option<&'a mut dyn OutputWriter>,
    progress: &'a ProgressReporter,
    mode: CheckMode,
    quiet: bool,
    use_colors: bool,
}

impl<'a> StreamObserver<'a> {
    /// Stream text lines into `writer`
    pub fn new(
        writer: &'a mut dyn OutputWriter,
        progress: &'a ProgressReporter,
        mode: CheckMode,
        quiet: bool,
        use_colors: bool,
    ) -> Self {
        Self {
            writer: Some(writer),
            progress,
            mode,
            quiet,
            use_colors,
        }
    }

    /// Only drive the progress spinner; used for whole-report formats
    pub fn progress_only(progress: &'a ProgressReporter, mode: CheckMode) -> Self {
        Self {
            writer: None,
            progress,
            mode,
            quiet: true,
            use_colors: false,
        }
    }

    fn emit_line(&mut self, line: &str) -> Result<()> {
        let progress = self.progress;
        match self.writer.as_mut() {
            Some(writer) => progress.suspend(|| writer.write_line(line)),
            None => Ok(()),
        }
    }
}

impl AuditObserver for StreamObserver<'_> {
    fn directory_entered(&mut self, path: &Path) -> Result<()> {
        self.progress.visit(path);

        if self.mode == CheckMode::All && !self.quiet {
            self.emit_line(&format_visit_line(path))?;
        }
        Ok(())
    }

    fn warning_emitted(&mut self, warning: &WarningRecord) -> Result<()> {
        let line = format_warning_line(warning, self.mode, self.use_colors);
        self.emit_line(&line)
    }
}
