//! Recursive tree walk
//!
//! Depth-first, single-threaded descent that classifies each directory from
//! its own listing. A directory recognized as a repository root is checked
//! and becomes a boundary: nothing beneath it is listed or walked. Every
//! other directory has its regular files reported as stray before its
//! subdirectories are visited. A `<name>.git` subdirectory of a non-root is
//! treated as a root by name alone, without being walked generically.

use super::detector;
use super::exceptions::{ExceptionRegistry, DEFAULT_EXCEPTIONS};
use super::layout::{layout_violations, MarkerSet, GIT_MARKERS};
use super::listing::{DirectoryLister, FsLister};
use super::naming::{self, SuffixMatch};
use super::stray;
use crate::error::{GitreeError, Result};
use crate::models::{
    AuditReport, CheckMode, Classification, Detection, DirectoryListing, RepositoryRoot, Settings,
    WarningRecord,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Receives walk events as they happen
pub trait AuditObserver {
    /// A directory listing was read successfully
    fn directory_entered(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    /// A warning of an active category was emitted
    fn warning_emitted(&mut self, _warning: &WarningRecord) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct NoopObserver;

impl AuditObserver for NoopObserver {}

/// Main walker for repository layout audits
pub struct Walker<L = FsLister> {
    lister: L,
    mode: CheckMode,
    max_entries: usize,
    markers: &'static MarkerSet,
    exceptions: &'static ExceptionRegistry,
    skipped: Option<PathBuf>,
}

impl Walker<FsLister> {
    /// Create a filesystem walker from resolved settings. A report file
    /// written inside the scanned tree is left out of the audit.
    pub fn new(settings: &Settings) -> Self {
        let walker = Self::with_lister(FsLister, settings.mode, settings.max_entries);

        match settings
            .output_file
            .as_deref()
            .and_then(|output| path_within(&settings.scan_path, output))
        {
            Some(output) => walker.skipping(output),
            None => walker,
        }
    }
}

/// Spell `file` the way a walk from `root` reaches it, when it lies beneath
/// `root`. Both sides are compared after resolving symlinks.
fn path_within(root: &Path, file: &Path) -> Option<PathBuf> {
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let resolved_root = root.canonicalize().ok()?;
    let resolved_parent = parent.canonicalize().ok()?;
    let relative = resolved_parent.strip_prefix(&resolved_root).ok()?;

    Some(root.join(relative).join(file.file_name()?))
}

impl<L: DirectoryLister> Walker<L> {
    /// Create a walker over an arbitrary listing source
    pub fn with_lister(lister: L, mode: CheckMode, max_entries: usize) -> Self {
        Self {
            lister,
            mode,
            max_entries,
            markers: &GIT_MARKERS,
            exceptions: &DEFAULT_EXCEPTIONS,
            skipped: None,
        }
    }

    /// Replace the exception registry
    pub fn with_exceptions(mut self, exceptions: &'static ExceptionRegistry) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Never report `path`, wherever it turns up
    pub fn skipping(mut self, path: PathBuf) -> Self {
        debug!(path = %path.display(), "excluding path from audit");
        self.skipped = Some(path);
        self
    }

    /// Audit the tree rooted at `root`
    pub fn audit(&self, root: &Path) -> Result<AuditReport> {
        self.audit_with_observer(root, &mut NoopObserver)
    }

    /// Audit the tree rooted at `root`, forwarding events to `observer`.
    /// A fatal condition anywhere aborts the whole walk.
    pub fn audit_with_observer(&self, root: &Path, observer: &mut dyn AuditObserver) -> Result<AuditReport> {
        info!(path = %root.display(), mode = %self.mode, "starting audit");

        let mut report = AuditReport::new(root, self.mode);
        self.walk(root, &mut report, observer)?;
        report.mark_completed();

        info!(
            directories = report.directories_visited,
            repositories = report.repositories.len(),
            warnings = report.warnings.len(),
            "audit complete"
        );
        Ok(report)
    }

    fn walk(&self, dir: &Path, report: &mut AuditReport, observer: &mut dyn AuditObserver) -> Result<()> {
        let listing = self.read(dir, report, observer)?;
        let classification = detector::classify(dir, &listing);
        debug!(path = %dir.display(), ?classification, "classified directory");

        if classification.is_root() {
            let root = RepositoryRoot {
                path: dir.to_path_buf(),
                classification,
                detection: Detection::Content,
                has_markers: true,
            };
            return self.check_repository(root, &listing, report, observer);
        }

        for file in listing.regular_files() {
            if let Some(warning) = stray::check_stray_file(dir, &file.name, self.exceptions) {
                self.emit(warning, report, observer)?;
            }
        }

        for child in listing.directories() {
            let path = dir.join(&child.name);

            if naming::suffix_match(&child.name) == SuffixMatch::Extends {
                let child_listing = self.read(&path, report, observer)?;
                let has_markers = detector::is_repository_root(&child_listing);
                debug!(path = %path.display(), has_markers, "repository recognized by name");

                let root = RepositoryRoot {
                    path,
                    classification: Classification::BareRoot,
                    detection: Detection::Name,
                    has_markers,
                };
                self.check_repository(root, &child_listing, report, observer)?;
            } else {
                self.walk(&path, report, observer)?;
            }
        }

        Ok(())
    }

    /// List a directory once and reject entries of unknown type
    fn read(&self, dir: &Path, report: &mut AuditReport, observer: &mut dyn AuditObserver) -> Result<DirectoryListing> {
        let listing = self.lister.list(dir, self.max_entries)?;

        if let Some(entry) = listing.first_indeterminate(dir) {
            return Err(GitreeError::indeterminate_entry(entry));
        }

        report.mark_visited();
        observer.directory_entered(dir)?;
        Ok(listing)
    }

    fn check_repository(
        &self,
        root: RepositoryRoot,
        listing: &DirectoryListing,
        report: &mut AuditReport,
        observer: &mut dyn AuditObserver,
    ) -> Result<()> {
        if let Some(warning) = naming::check_root_name(&root.path, self.exceptions) {
            self.emit(warning, report, observer)?;
        }

        for warning in layout_violations(&root.path, listing, self.markers) {
            self.emit(warning, report, observer)?;
        }

        report.add_repository(root);
        Ok(())
    }

    fn emit(&self, warning: WarningRecord, report: &mut AuditReport, observer: &mut dyn AuditObserver) -> Result<()> {
        if !self.mode.is_active(warning.category) || self.skipped.as_deref() == Some(warning.path.as_path()) {
            return Ok(());
        }

        observer.warning_emitted(&warning)?;
        report.record(warning);
        Ok(())
    }
}
