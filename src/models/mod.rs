//! Data models and structures for gitree

pub mod config;
pub mod entry;
pub mod report;
pub mod repository;
pub mod warning;

pub use config::{CheckMode, OutputFormat, PartialSettings, Settings};
pub use entry::{ChildEntry, DirectoryListing, EntryKind};
pub use report::{AuditReport, Counters};
pub use repository::{Classification, Detection, RepositoryRoot};
pub use warning::{WarningCategory, WarningRecord};
