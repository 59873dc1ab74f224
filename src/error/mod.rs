//! Error handling for gitree
//!
//! Error types, the result alias, exit statuses and error context utilities.

pub mod context;
pub mod types;

pub use context::{DirResultExt, ResultExt};
pub use types::{
    ErrorSeverity, GitreeError, Result, EXIT_FAILURE, EXIT_INDETERMINATE_ENTRY,
    EXIT_TOO_MANY_ENTRIES, EXIT_UNREADABLE_DIRECTORY,
};
