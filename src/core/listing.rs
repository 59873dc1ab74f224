//! Directory listing sources
//!
//! The walker never touches the filesystem directly; it asks a
//! [`DirectoryLister`] for the immediate children of one directory at a time.
//! [`FsLister`] reads the real filesystem and [`MemoryLister`] serves a fixed
//! in-memory tree.

use crate::error::{DirResultExt, GitreeError, Result};
use crate::models::{ChildEntry, DirectoryListing, EntryKind};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of immediate-children listings
pub trait DirectoryLister {
    /// List the immediate children of `dir`, excluding `.` and `..`.
    ///
    /// Fails with [`GitreeError::DirectoryOpen`] when the directory cannot be
    /// read and with [`GitreeError::TooManyEntries`] as soon as more than
    /// `limit` children have been seen.
    fn list(&self, dir: &Path, limit: usize) -> Result<DirectoryListing>;
}

/// Accumulates entries while enforcing the per-directory bound
struct ListingBuilder<'a> {
    dir: &'a Path,
    limit: usize,
    entries: Vec<ChildEntry>,
}

impl<'a> ListingBuilder<'a> {
    fn new(dir: &'a Path, limit: usize) -> Self {
        Self {
            dir,
            limit,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: ChildEntry) -> Result<()> {
        if self.entries.len() >= self.limit {
            return Err(GitreeError::too_many_entries(self.dir, self.limit));
        }
        self.entries.push(entry);
        Ok(())
    }

    fn finish(self) -> DirectoryListing {
        DirectoryListing::new(self.entries)
    }
}

/// Lists directories on the real filesystem. Symbolic links are reported as
/// [`EntryKind::Other`], never as the type of their target.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path, limit: usize) -> Result<DirectoryListing> {
        // The handle lives only for this call and is dropped on every return path
        let read_dir = fs::read_dir(dir).with_dir_context(dir)?;
        let mut builder = ListingBuilder::new(dir, limit);

        for entry in read_dir {
            let entry = entry.with_dir_context(dir)?;
            let kind = match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
                Ok(file_type) if file_type.is_file() => EntryKind::RegularFile,
                Ok(_) => EntryKind::Other,
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "could not determine entry type");
                    EntryKind::Indeterminate
                }
            };
            builder.push(ChildEntry::new(entry.file_name(), kind))?;
        }

        Ok(builder.finish())
    }
}

/// In-memory directory tree keyed by full path
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    dirs: BTreeMap<PathBuf, Vec<ChildEntry>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and its children. Child directories still need
    /// their own `dir` call to be listable.
    pub fn dir(mut self, path: impl Into<PathBuf>, children: &[(&str, EntryKind)]) -> Self {
        let entries = children
            .iter()
            .map(|(name, kind)| ChildEntry::new(*name, *kind))
            .collect();
        self.dirs.insert(path.into(), entries);
        self
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &Path, limit: usize) -> Result<DirectoryListing> {
        let children = self.dirs.get(dir).ok_or_else(|| {
            GitreeError::directory_open(dir, io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        })?;

        let mut builder = ListingBuilder::new(dir, limit);
        for child in children {
            builder.push(child.clone())?;
        }
        Ok(builder.finish())
    }
}
