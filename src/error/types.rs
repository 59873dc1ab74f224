//! Error types and definitions for gitree
//!
//! Fatal walk conditions (unreadable directory, indeterminate entry type,
//! entry bound exceeded) are modelled as distinct variants so the binary can
//! map each one to its own exit status. Audit findings are never errors; they
//! live in [`crate::models::warning`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a directory that could not be opened for listing
pub const EXIT_UNREADABLE_DIRECTORY: i32 = 255;

/// Exit status for a directory entry whose type could not be determined
pub const EXIT_INDETERMINATE_ENTRY: i32 = 254;

/// Exit status for a directory holding more entries than the configured bound
pub const EXIT_TOO_MANY_ENTRIES: i32 = 253;

/// Exit status for every other failure (configuration, output, ...)
pub const EXIT_FAILURE: i32 = 1;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The run could not start or could not deliver its output
    Error,
    /// The walk was aborted part way through
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for gitree operations
#[derive(Debug, Error)]
pub enum GitreeError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be opened or read for listing
    #[error("Cannot open directory {path}: {source}")]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry reported a type the walker refuses to guess
    #[error("Unknown file type for {path}")]
    IndeterminateEntry { path: PathBuf },

    /// A directory exceeded the per-directory entry bound
    #[error("Directory {path} has more than {limit} entries")]
    TooManyEntries { path: PathBuf, limit: usize },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV output was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Error wrapped with a caller-supplied description
    #[error("{message}")]
    Context { message: String },
}

impl GitreeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GitreeError::DirectoryOpen { .. }
            | GitreeError::IndeterminateEntry { .. }
            | GitreeError::TooManyEntries { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this error aborted a walk
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GitreeError::DirectoryOpen { .. } => EXIT_UNREADABLE_DIRECTORY,
            GitreeError::IndeterminateEntry { .. } => EXIT_INDETERMINATE_ENTRY,
            GitreeError::TooManyEntries { .. } => EXIT_TOO_MANY_ENTRIES,
            _ => EXIT_FAILURE,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            GitreeError::DirectoryOpen { path, source } => {
                format!("Cannot open directory '{}' for listing: {}. The audit was aborted.", path.display(), source)
            }
            GitreeError::IndeterminateEntry { path } => {
                format!("Cannot determine the file type of '{}'. The audit was aborted rather than guess.", path.display())
            }
            GitreeError::TooManyEntries { path, limit } => {
                format!("Directory '{}' holds more than {} entries. Raise --max-entries if this is expected.", path.display(), limit)
            }
            GitreeError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide an existing directory.", path.display())
            }
            GitreeError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create it with --init or drop the --config option.", path.display())
            }
            GitreeError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        GitreeError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        GitreeError::Config {
            message: message.into(),
        }
    }

    /// Create a directory open error
    pub fn directory_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitreeError::DirectoryOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an indeterminate entry error
    pub fn indeterminate_entry(path: impl Into<PathBuf>) -> Self {
        GitreeError::IndeterminateEntry { path: path.into() }
    }

    /// Create an entry bound error
    pub fn too_many_entries(path: impl Into<PathBuf>, limit: usize) -> Self {
        GitreeError::TooManyEntries {
            path: path.into(),
            limit,
        }
    }
}

impl From<std::io::Error> for GitreeError {
    fn from(err: std::io::Error) -> Self {
        GitreeError::io_error(err)
    }
}

impl From<csv::Error> for GitreeError {
    fn from(err: csv::Error) -> Self {
        GitreeError::Csv { source: err }
    }
}

impl From<serde_json::Error> for GitreeError {
    fn from(err: serde_json::Error) -> Self {
        GitreeError::JsonSerialize { source: err }
    }
}

/// Result type alias for gitree operations
pub type Result<T> = std::result::Result<T, GitreeError>;
