//! Configuration file and environment sources

use std::path::{Path, PathBuf};
use tracing::warn;

use super::{parser, ConfigSource};
use crate::error::{GitreeError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".gitree.toml";

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "GITREE";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 10,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(GitreeError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source.
///
/// Reads `<PREFIX>_MODE`, `<PREFIX>_OUTPUT_FORMAT` and `<PREFIX>_MAX_ENTRIES`.
/// Unparseable values are logged and ignored.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20,
        }
    }

    fn var(&self, key: &str) -> Option<(String, String)> {
        let name = format!("{}_{}", self.prefix, key);
        std::env::var(&name).ok().map(|value| (name, value))
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some((name, value)) = self.var("MODE") {
            match value.parse() {
                Ok(mode) => settings.mode = Some(mode),
                Err(e) => warn!(variable = %name, "ignoring environment value: {}", e),
            }
        }

        if let Some((name, value)) = self.var("OUTPUT_FORMAT") {
            match value.parse() {
                Ok(format) => settings.output_format = Some(format),
                Err(e) => warn!(variable = %name, "ignoring environment value: {}", e),
            }
        }

        if let Some((name, value)) = self.var("MAX_ENTRIES") {
            match value.parse::<usize>() {
                Ok(limit) if limit > 0 => settings.max_entries = Some(limit),
                _ => warn!(variable = %name, value = %value, "ignoring environment value: expected a positive integer"),
            }
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ["MODE", "OUTPUT_FORMAT", "MAX_ENTRIES"]
            .iter()
            .any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
