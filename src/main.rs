use gitree::cli::{Args, Command};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "gitree=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = Command::from_args(args).run();
    process::exit(exit_code);
}
