//! Files living outside any repository

use super::exceptions::ExceptionRegistry;
use crate::models::{WarningCategory, WarningRecord};
use std::ffi::OsStr;
use std::path::Path;

/// Report a regular file found directly in `dir`, a directory already known
/// not to be a repository root. Nothing is reported when the registry exempts
/// `dir`.
pub fn check_stray_file(dir: &Path, name: &OsStr, exceptions: &ExceptionRegistry) -> Option<WarningRecord> {
    if exceptions.exempts(WarningCategory::StrayFile, dir) {
        return None;
    }

    Some(WarningRecord::new(WarningCategory::StrayFile, dir.join(name)))
}
