//! `timecard` binary entrypoint.

use clap::Parser;
use timecard_engine::cli::parser::Cli;
use timecard_engine::run;
use timecard_engine::ui::messages::error;

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TIMECARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
