//! Output writing functionality
//!
//! This module provides writers for different output destinations. Text
//! reports are streamed line by line while the walk runs, so writers are
//! buffered and flushed once at the end.

use crate::error::{GitreeError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write_str(&mut self, content: &str) -> Result<()>;

    /// Push buffered content to the destination
    fn flush(&mut self) -> Result<()>;

    /// Write content followed by a newline
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_str(line)?;
        self.write_str("\n")
    }
}

/// Writer for stdout output
pub struct StdoutWriter {
    out: BufWriter<io::Stdout>,
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write_str(&mut self, content: &str) -> Result<()> {
        self.out
            .write_all(content.as_bytes())
            .map_err(|source| GitreeError::StdoutWrite { source })
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|source| GitreeError::StdoutWrite { source })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: BufWriter<File>,
}

impl FileWriter {
    /// Create (or truncate) the output file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| GitreeError::OutputWrite {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            file: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write_str(&mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .map_err(|source| GitreeError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(|source| GitreeError::OutputWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory sink, handy for capturing a report
impl OutputWriter for String {
    fn write_str(&mut self, content: &str) -> Result<()> {
        self.push_str(content);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    match output_file {
        Some(path) => Ok(Box::new(FileWriter::create(path)?)),
        None => Ok(Box::new(StdoutWriter::new())),
    }
}
