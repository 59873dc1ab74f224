//! Directory entries as reported by a listing

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Entry type, taken at face value from the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    RegularFile,
    /// Symbolic links, sockets, fifos and devices. Never recursed into.
    Other,
    /// The listing could not tell what the entry is
    Indeterminate,
}

/// One immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl ChildEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }

    /// Whether this entry is a directory with exactly the given name
    pub fn is_dir_named(&self, name: &str) -> bool {
        self.is_dir() && self.name.as_os_str() == OsStr::new(name)
    }
}

/// The immediate children of one directory, read once per visit
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    entries: Vec<ChildEntry>,
}

impl DirectoryListing {
    /// Build a listing. Entries are sorted by name so the walk order does not
    /// depend on the order the filesystem happened to return them in.
    pub fn new(mut entries: Vec<ChildEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    pub fn entries(&self) -> &[ChildEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn directories(&self) -> impl Iterator<Item = &ChildEntry> {
        self.entries.iter().filter(|e| e.is_dir())
    }

    pub fn regular_files(&self) -> impl Iterator<Item = &ChildEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.is_dir_named(name))
    }

    /// First entry whose type could not be determined, as a full path
    pub fn first_indeterminate(&self, dir: &Path) -> Option<PathBuf> {
        self.entries
            .iter()
            .find(|e| e.kind == EntryKind::Indeterminate)
            .map(|e| dir.join(&e.name))
    }
}
