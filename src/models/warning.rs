//! Audit findings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The four kinds of deviation the audit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCategory {
    /// A repository root holds an entry the tooling never creates
    LayoutViolation,
    /// A repository root whose name lacks the `.git` suffix
    BadNameSuffix,
    /// A repository root named exactly `.git` (working-copy layout)
    NonBareLayout,
    /// A regular file outside any repository
    StrayFile,
}

impl WarningCategory {
    /// Every category, in summary order
    pub const ALL: [WarningCategory; 4] = [
        WarningCategory::LayoutViolation,
        WarningCategory::BadNameSuffix,
        WarningCategory::NonBareLayout,
        WarningCategory::StrayFile,
    ];

    /// Message printed after the path on a WARNING line
    pub fn message(self) -> &'static str {
        match self {
            WarningCategory::LayoutViolation => "breaks Git repo layout rule",
            WarningCategory::BadNameSuffix => "name not terminated with .git",
            WarningCategory::NonBareLayout => "non-bare git tree",
            WarningCategory::StrayFile => "not in a git tree",
        }
    }

    /// Summary line suffix, printed after the count
    pub fn summary_label(self) -> &'static str {
        match self {
            WarningCategory::LayoutViolation => "files break Git repo layout rule",
            WarningCategory::BadNameSuffix => "git dirs name not terminated with .git",
            WarningCategory::NonBareLayout => "git dirs non-bare git tree",
            WarningCategory::StrayFile => "files not in a git tree",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCategory::LayoutViolation => write!(f, "layout-violation"),
            WarningCategory::BadNameSuffix => write!(f, "bad-name-suffix"),
            WarningCategory::NonBareLayout => write!(f, "non-bare-layout"),
            WarningCategory::StrayFile => write!(f, "stray-file"),
        }
    }
}

/// One emitted finding. Records are never retracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    pub category: WarningCategory,
    pub path: PathBuf,
    pub detail: String,
}

impl WarningRecord {
    /// Create a record carrying the category's standard message
    pub fn new(category: WarningCategory, path: impl Into<PathBuf>) -> Self {
        Self {
            category,
            path: path.into(),
            detail: category.message().to_string(),
        }
    }
}

impl fmt::Display for WarningRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WARNING: {} {}", self.path.display(), self.detail)
    }
}
