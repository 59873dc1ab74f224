//! Progress reporting functionality
//!
//! A spinner on stderr naming the directory currently being read. When
//! progress is disabled every method is a no-op.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress reporter for a running audit
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        let spinner = if enabled {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} dirs {wide_msg}") {
                spinner.set_style(style);
            }
            Some(spinner)
        } else {
            None
        };

        Self { spinner }
    }

    /// A reporter that never draws anything
    pub fn disabled() -> Self {
        Self { spinner: None }
    }

    /// Start ticking
    pub fn start(&self, root: &Path) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("scanning {}", root.display()));
            spinner.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// A directory listing was read
    pub fn visit(&self, dir: &Path) {
        if let Some(spinner) = &self.spinner {
            spinner.inc(1);
            spinner.set_message(dir.display().to_string());
        }
    }

    /// Run `f` with the spinner hidden so stdout lines do not interleave with it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.spinner {
            Some(spinner) => spinner.suspend(f),
            None => f(),
        }
    }

    /// Stop and clear the spinner after a completed walk
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Stop the spinner after an aborted walk, leaving the last directory visible
    pub fn abandon(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.abandon();
        }
    }
}
