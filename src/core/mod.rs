//! Core functionality for repository layout auditing

pub mod detector;
pub mod exceptions;
pub mod layout;
pub mod listing;
pub mod naming;
pub mod stray;
pub mod walker;

pub use exceptions::{ExceptionEntry, ExceptionRegistry, DEFAULT_EXCEPTIONS};
pub use layout::{MarkerSet, GIT_MARKERS};
pub use listing::{DirectoryLister, FsLister, MemoryLister};
pub use walker::{AuditObserver, NoopObserver, Walker};
