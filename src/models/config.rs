//! Configuration-related data structures

use super::warning::WarningCategory;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default per-directory entry bound
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

/// Main configuration settings for gitree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory tree to audit
    pub scan_path: PathBuf,

    /// Which warning categories are active
    pub mode: CheckMode,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Maximum number of entries a single directory may hold
    pub max_entries: usize,

    /// Whether to suppress directory announcements and the summary
    pub quiet: bool,

    /// Whether to emit debug diagnostics
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress spinner on stderr
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            mode: CheckMode::All,
            output_format: OutputFormat::Text,
            output_file: None,
            max_entries: DEFAULT_MAX_ENTRIES,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: false,
        }
    }
}

/// Selects which warning categories a run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// Every category, with directory announcements
    All,
    /// Layout violations and badly named roots
    Layout,
    /// Only roots using the non-bare layout
    NonBare,
    /// Only files outside any repository
    Stray,
}

impl CheckMode {
    /// Warning categories reported in this mode
    pub fn active_categories(self) -> &'static [WarningCategory] {
        match self {
            CheckMode::All => &WarningCategory::ALL,
            CheckMode::Layout => &[WarningCategory::LayoutViolation, WarningCategory::BadNameSuffix],
            CheckMode::NonBare => &[WarningCategory::NonBareLayout],
            CheckMode::Stray => &[WarningCategory::StrayFile],
        }
    }

    /// Whether a category is reported in this mode
    pub fn is_active(self, category: WarningCategory) -> bool {
        self.active_categories().contains(&category)
    }

    /// Whether matches are printed as bare paths instead of WARNING lines
    pub fn enumerates_paths(self) -> bool {
        matches!(self, CheckMode::NonBare | CheckMode::Stray)
    }
}

impl std::str::FromStr for CheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CheckMode::All),
            "layout" => Ok(CheckMode::Layout),
            "non-bare" | "nonbare" => Ok(CheckMode::NonBare),
            "stray" => Ok(CheckMode::Stray),
            _ => Err(format!("Invalid check mode: {}", s)),
        }
    }
}

impl std::fmt::Display for CheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMode::All => write!(f, "all"),
            CheckMode::Layout => write!(f, "layout"),
            CheckMode::NonBare => write!(f, "non-bare"),
            CheckMode::Stray => write!(f, "stray"),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-oriented text, streamed during the walk
    Text,
    /// JSON report for programmatic consumption
    Json,
    /// CSV rows, one per warning
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub mode: Option<CheckMode>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.max_entries.is_some() {
            self.max_entries = other.max_entries;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            scan_path: self.scan_path.clone().unwrap_or(defaults.scan_path),
            mode: self.mode.unwrap_or(defaults.mode),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
            max_entries: self.max_entries.unwrap_or(defaults.max_entries),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
