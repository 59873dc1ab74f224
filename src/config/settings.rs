//! Settings validation

use std::io::IsTerminal;
use std::path::Path;

use crate::error::{GitreeError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.is_dir() {
            return Err(GitreeError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        if settings.max_entries == 0 {
            return Err(GitreeError::config_error("max_entries must be at least 1"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(GitreeError::InvalidPath {
                path: parent.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }
}

/// Colour escapes are only written to an interactive stdout
pub fn colors_supported(output_file: Option<&Path>) -> bool {
    output_file.is_none() && std::io::stdout().is_terminal()
}
