//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Walker;
use crate::error::Result;
use crate::models::{AuditReport, OutputFormat, Settings};
use crate::output::{create_formatter, create_writer, OutputWriter, ProgressReporter, StreamObserver};
use std::path::PathBuf;
use tracing::error;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Audit the tree named by the arguments
    Audit(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Audit(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Audit(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                let mut writer = create_writer(settings.output_file.as_deref())?;
                audit(&settings, writer.as_mut()).map(|_| ())
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                Ok(())
            }
        }
    }

    /// Run the command and map failures to an exit status
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                error!(error = %err, "command failed");
                eprintln!("{}: {}", err.severity(), err.user_message());
                err.exit_code()
            }
        }
    }
}

/// Walk `settings.scan_path` and write the report to `writer`.
///
/// Text output is streamed while the walk runs, so on a fatal error the
/// lines produced so far have already been written. Whole-report formats
/// write nothing unless the walk completes.
pub fn audit(settings: &Settings, writer: &mut dyn OutputWriter) -> Result<AuditReport> {
    let walker = Walker::new(settings);
    let progress = ProgressReporter::new(settings.show_progress);
    progress.start(&settings.scan_path);

    let streamed = settings.output_format == OutputFormat::Text;
    let outcome = if streamed {
        let mut observer =
            StreamObserver::new(&mut *writer, &progress, settings.mode, settings.quiet, settings.use_colors);
        walker.audit_with_observer(&settings.scan_path, &mut observer)
    } else {
        let mut observer = StreamObserver::progress_only(&progress, settings.mode);
        walker.audit_with_observer(&settings.scan_path, &mut observer)
    };

    let report = match outcome {
        Ok(report) => {
            progress.finish();
            report
        }
        Err(err) => {
            progress.abandon();
            if let Err(flush_err) = writer.flush() {
                error!(error = %flush_err, "failed to flush partial report");
            }
            return Err(err);
        }
    };

    let formatter = create_formatter(settings, streamed);
    writer.write_str(&formatter.format(&report)?)?;
    writer.flush()?;

    Ok(report)
}
