//! Repository root detection by content signature

use super::naming::{basename, suffix_match, SuffixMatch};
use crate::models::{Classification, DirectoryListing};
use std::path::Path;

/// Object store subdirectory
pub const OBJECT_STORE: &str = "objects";

/// Reference store subdirectory
pub const REFERENCE_STORE: &str = "refs";

/// A directory is a repository root when it holds both marker
/// subdirectories. Symbolic links named like a marker do not count.
pub fn is_repository_root(listing: &DirectoryListing) -> bool {
    listing.has_dir(OBJECT_STORE) && listing.has_dir(REFERENCE_STORE)
}

/// Classify a directory from its own listing only
pub fn classify(path: &Path, listing: &DirectoryListing) -> Classification {
    if !is_repository_root(listing) {
        return Classification::Regular;
    }

    match suffix_match(&basename(path)) {
        SuffixMatch::Exact => Classification::NonBareRoot,
        SuffixMatch::Extends | SuffixMatch::Absent => Classification::BareRoot,
    }
}
