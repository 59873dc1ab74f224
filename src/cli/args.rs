//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gitree - audit a directory tree of Git repositories
#[derive(Parser, Debug)]
#[command(name = "gitree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit a tree of Git repositories for layout and naming problems")]
#[command(long_about = "gitree walks a directory tree that is supposed to hold only bare Git repositories. \
It reports files inside repository roots that Git never creates, repositories whose name does not end in .git, \
repositories using the working-copy (.git) layout, and files that live outside any repository.")]
#[command(after_help = "EXAMPLES:

    # Audit the current directory
    gitree

    # Audit a mirror root
    gitree /git

    # Only list working-copy style repositories
    gitree --mode non-bare /git

    # Only list files outside any repository
    gitree --mode stray /git

    # Layout and naming warnings, no progress lines
    gitree --mode layout /git

    # Machine-readable report
    gitree --output json --output-file report.json /git

    # Create a default configuration file
    gitree --init

EXIT STATUS:
    0    the walk completed (warnings do not change the status)
    1    configuration or output error
    253  a directory holds more entries than --max-entries
    254  the type of a directory entry could not be determined
    255  a directory could not be opened
")]
pub struct Args {
    /// Directory tree to audit
    #[arg(value_name = "PATH", help = "Directory tree to audit (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Which findings to report
    #[arg(short, long, value_enum, help = "Which findings to report: 'all' announces every directory and prints a summary, 'layout' reports layout and naming problems, 'non-bare' lists working-copy repositories, 'stray' lists files outside any repository")]
    pub mode: Option<Mode>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' streams lines during the walk, 'json' and 'csv' are written once the walk completes")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .gitree.toml in the current directory, then the home directory)")]
    pub config: Option<PathBuf>,

    /// Per-directory entry bound
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u64).range(1..), help = "Abort when a single directory holds more than this many entries (default: 4096)")]
    pub max_entries: Option<u64>,

    /// Suppress directory announcements and the summary
    #[arg(short, long, help = "Suppress 'Checking' lines and the summary; only findings are printed")]
    pub quiet: bool,

    /// Show debug diagnostics
    #[arg(short, long, help = "Show debug diagnostics on stderr (RUST_LOG takes precedence)")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for piping output)")]
    pub no_colors: bool,

    /// Show a progress spinner
    #[arg(long, help = "Show a spinner on stderr naming the directory being read")]
    pub progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.gitree.toml) in the current directory")]
    pub init: bool,
}

/// Check mode options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every finding, with directory announcements and a summary
    All,
    /// Layout violations and badly named repositories
    Layout,
    /// Repositories using the working-copy layout
    NonBare,
    /// Files outside any repository
    Stray,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
