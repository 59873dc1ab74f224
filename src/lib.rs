//! gitree - audit a directory tree of Git repositories
//!
//! The tree is expected to hold only bare repositories. A depth-first walk
//! recognizes repository roots by content or by name, checks each root's
//! immediate children against the set of names Git manages, and reports
//! files that live outside any repository. Findings are warnings, not
//! errors; only an unreadable or ambiguous directory aborts the walk.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;

pub use crate::core::{AuditObserver, DirectoryLister, FsLister, MemoryLister, Walker};
pub use error::{ErrorSeverity, GitreeError, Result, ResultExt};
pub use models::{AuditReport, CheckMode, OutputFormat, Settings, WarningCategory, WarningRecord};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
