//! Audit results and per-category counters

use super::config::CheckMode;
use super::repository::RepositoryRoot;
use super::warning::{WarningCategory, WarningRecord};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One counter per warning category. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub layout_violation: usize,
    pub bad_name_suffix: usize,
    pub non_bare_layout: usize,
    pub stray_file: usize,
}

impl Counters {
    pub fn increment(&mut self, category: WarningCategory) {
        *self.slot(category) += 1;
    }

    pub fn get(&self, category: WarningCategory) -> usize {
        match category {
            WarningCategory::LayoutViolation => self.layout_violation,
            WarningCategory::BadNameSuffix => self.bad_name_suffix,
            WarningCategory::NonBareLayout => self.non_bare_layout,
            WarningCategory::StrayFile => self.stray_file,
        }
    }

    pub fn total(&self) -> usize {
        WarningCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn slot(&mut self, category: WarningCategory) -> &mut usize {
        match category {
            WarningCategory::LayoutViolation => &mut self.layout_violation,
            WarningCategory::BadNameSuffix => &mut self.bad_name_suffix,
            WarningCategory::NonBareLayout => &mut self.non_bare_layout,
            WarningCategory::StrayFile => &mut self.stray_file,
        }
    }
}

/// Accumulated result of one walk, owned by the top-level call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub scan_path: PathBuf,
    pub mode: CheckMode,
    pub directories_visited: usize,
    pub repositories: Vec<RepositoryRoot>,
    pub warnings: Vec<WarningRecord>,
    pub counts: Counters,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AuditReport {
    pub fn new(scan_path: impl Into<PathBuf>, mode: CheckMode) -> Self {
        Self {
            scan_path: scan_path.into(),
            mode,
            directories_visited: 0,
            repositories: Vec::new(),
            warnings: Vec::new(),
            counts: Counters::default(),
            completed_at: None,
        }
    }

    /// Append a warning and bump its category counter exactly once
    pub fn record(&mut self, warning: WarningRecord) {
        self.counts.increment(warning.category);
        self.warnings.push(warning);
    }

    pub fn add_repository(&mut self, root: RepositoryRoot) {
        self.repositories.push(root);
    }

    pub fn mark_visited(&mut self) {
        self.directories_visited += 1;
    }

    pub fn mark_completed(&mut self) {
        self.completed_at = Some(chrono::Utc::now());
    }

    pub fn warnings_in(&self, category: WarningCategory) -> impl Iterator<Item = &WarningRecord> {
        self.warnings.iter().filter(move |w| w.category == category)
    }
}
