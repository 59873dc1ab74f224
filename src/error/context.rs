//! Error context utilities for gitree
//!
//! Helpers for attaching context to foreign errors so that every failure
//! surfaces as a [`GitreeError`].

use crate::error::{GitreeError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| GitreeError::Context {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for IO results produced while listing a directory
pub trait DirResultExt<T> {
    /// Attribute an IO failure to the directory being listed
    fn with_dir_context<P: AsRef<Path>>(self, dir: P) -> Result<T>;
}

impl<T> DirResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_dir_context<P: AsRef<Path>>(self, dir: P) -> Result<T> {
        self.map_err(|err| GitreeError::directory_open(dir.as_ref(), err))
    }
}
