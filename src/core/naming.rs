//! Naming and bareness checks for confirmed repository roots

use super::exceptions::ExceptionRegistry;
use crate::models::{WarningCategory, WarningRecord};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;

/// Reserved repository directory suffix
pub const RESERVED_SUFFIX: &str = ".git";

/// How a basename relates to [`RESERVED_SUFFIX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixMatch {
    /// `<something>.git`
    Extends,
    /// Exactly `.git`
    Exact,
    /// Does not end with `.git`
    Absent,
}

/// Compare a basename against the reserved suffix. Case-sensitive; the three
/// outcomes are exclusive.
pub fn suffix_match(name: &OsStr) -> SuffixMatch {
    let bytes = name.as_encoded_bytes();
    let suffix = RESERVED_SUFFIX.as_bytes();

    if !bytes.ends_with(suffix) {
        SuffixMatch::Absent
    } else if bytes.len() == suffix.len() {
        SuffixMatch::Exact
    } else {
        SuffixMatch::Extends
    }
}

/// Final path component. A path ending in `.` or `..` is resolved on disk
/// first, so `gitree .` inside `mirror.git` sees `mirror.git`. When nothing
/// can be resolved (`/`, a vanished directory) the whole path is returned.
pub fn basename(path: &Path) -> Cow<'_, OsStr> {
    if let Some(name) = path.file_name() {
        return Cow::Borrowed(name);
    }

    match path.canonicalize() {
        Ok(resolved) => match resolved.file_name() {
            Some(name) => Cow::Owned(name.to_os_string()),
            None => Cow::Borrowed(path.as_os_str()),
        },
        Err(_) => Cow::Borrowed(path.as_os_str()),
    }
}

/// Judge a root's name. A root named `.git` uses the non-bare layout, a root
/// without the suffix is badly named, anything else is fine. Warnings are
/// dropped when the registry exempts the root's path.
pub fn check_root_name(root: &Path, exceptions: &ExceptionRegistry) -> Option<WarningRecord> {
    let category = match suffix_match(&basename(root)) {
        SuffixMatch::Extends => return None,
        SuffixMatch::Exact => WarningCategory::NonBareLayout,
        SuffixMatch::Absent => WarningCategory::BadNameSuffix,
    };

    if exceptions.exempts(category, root) {
        return None;
    }

    Some(WarningRecord::new(category, root))
}
