//! Known-acceptable deviations
//!
//! Each entry names a path prefix and the warning categories it silences.
//! Matching is by whole path components, so `/git/android/.repo` covers
//! `/git/android/.repo/projects` but not `/git/android/.repository`.

use crate::models::WarningCategory;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct ExceptionEntry {
    pub prefix: &'static str,
    pub categories: &'static [WarningCategory],
}

impl ExceptionEntry {
    pub fn matches(&self, category: WarningCategory, path: &Path) -> bool {
        self.categories.contains(&category) && path.starts_with(self.prefix)
    }
}

/// Fixed list of exceptions, scanned linearly
#[derive(Debug, Clone, Copy)]
pub struct ExceptionRegistry {
    entries: &'static [ExceptionEntry],
}

impl ExceptionRegistry {
    pub const fn new(entries: &'static [ExceptionEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [ExceptionEntry] {
        self.entries
    }

    /// Whether a warning of `category` about `path` is suppressed
    pub fn exempts(&self, category: WarningCategory, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.matches(category, path))
    }
}

/// The `repo` tool's metadata tree keeps working-copy style checkouts and
/// loose files of its own.
pub static DEFAULT_EXCEPTIONS: ExceptionRegistry = ExceptionRegistry::new(&[ExceptionEntry {
    prefix: "/git/android/.repo",
    categories: &[WarningCategory::NonBareLayout, WarningCategory::StrayFile],
}]);
