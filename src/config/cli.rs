//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, Mode, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{CheckMode, OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line options relevant to settings. Flags that were not given
/// leave lower-precedence sources untouched.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub mode: Option<CheckMode>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub progress: bool,
    pub config: Option<PathBuf>,
}

impl From<Mode> for CheckMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::All => CheckMode::All,
            Mode::Layout => CheckMode::Layout,
            Mode::NonBare => CheckMode::NonBare,
            Mode::Stray => CheckMode::Stray,
        }
    }
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            mode: args.mode.map(Into::into),
            output_format: args.output.map(Into::into),
            output_file: args.output_file.clone(),
            max_entries: args.max_entries.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            progress: args.progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            scan_path: self.args.path.clone(),
            mode: self.args.mode,
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            max_entries: self.args.max_entries,
            ..Default::default()
        };

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.progress {
            settings.show_progress = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
