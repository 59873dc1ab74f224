//! Layout conformance of repository roots

use crate::models::{DirectoryListing, WarningCategory, WarningRecord};
use std::ffi::OsStr;
use std::path::Path;

/// Fixed set of basenames the tooling creates inside a repository root
#[derive(Debug, Clone, Copy)]
pub struct MarkerSet {
    names: &'static [&'static str],
}

impl MarkerSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(name) => self.names.contains(&name),
            None => false,
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

pub static GIT_MARKERS: MarkerSet = MarkerSet::new(&[
    // core metadata files
    "COMMIT_EDITMSG",
    "config",
    "description",
    "FETCH_HEAD",
    "HEAD",
    "index",
    "packed-refs",
    "ORIG_HEAD",
    "MERGE_HEAD",
    "MERGE_MODE",
    "MERGE_MSG",
    "MERGE_RR",
    "RENAMED-REF",
    "gitk.cache",
    // metadata directories
    "hooks",
    "info",
    "logs",
    "objects",
    "rebase-apply",
    "refs",
    "branches",
    "remotes",
    "shallow",
    "rr-cache",
    // gitweb
    "cloneurl",
    // repo tool
    ".repopickle_config",
    "clone.bundle",
    // leftovers seen in the wild
    "config.bak",
    "config_bak",
    "config~",
    "description~",
    "hooks_bk",
    "hooks.bak",
    "hooks-bak",
    "COMMIT_EDITMSG~",
    ".gitignore",
    "pnt",
    "svn",
    "temp.patch",
]);

/// One layout-violation warning per immediate child of `root` that is not a
/// managed name. Managed entries are trusted and never looked into.
pub fn layout_violations<'a>(
    root: &'a Path,
    listing: &'a DirectoryListing,
    markers: &'a MarkerSet,
) -> impl Iterator<Item = WarningRecord> + 'a {
    listing
        .entries()
        .iter()
        .filter(move |entry| !markers.contains(&entry.name))
        .map(move |entry| WarningRecord::new(WarningCategory::LayoutViolation, root.join(&entry.name)))
}
