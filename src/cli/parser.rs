use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for the timecard engine
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split clock-in/out entries into regular/overtime timecard rows and draw day timelines",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Reference time for open entries (YYYY-MM-DDTHH:MM[:SS]); defaults to the local clock
    #[arg(global = true, long = "now")]
    pub now: Option<String>,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration as YAML")]
        print_config: bool,
    },

    /// Build the timecard rows (regular/overtime split) for a pay period
    Timecard {
        /// JSON input bundle (entries, schedules, policy, allocations, ...)
        #[arg(long = "input", short = 'i')]
        input: String,

        /// Period: YYYY | YYYY-MM | YYYY-MM-DD | <start>:<end>
        #[arg(long = "period")]
        period: Option<String>,

        /// Export format; rows are printed as a table when omitted
        #[arg(long = "format", value_enum, requires = "out")]
        format: Option<ExportFormat>,

        /// Output file for --format
        #[arg(long = "out", requires = "format")]
        out: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long = "force")]
        force: bool,
    },

    /// Draw one person's classified timeline for a day
    Timeline {
        /// JSON input bundle
        #[arg(long = "input", short = 'i')]
        input: String,

        /// Employee id
        #[arg(long = "employee", short = 'e')]
        employee: String,

        /// Day to draw (YYYY-MM-DD)
        #[arg(long = "date", short = 'd')]
        date: String,

        /// Scheduled start (HH:MM), overrides the schedule rows
        #[arg(long = "start")]
        start: Option<String>,

        /// Scheduled end (HH:MM), overrides the schedule rows
        #[arg(long = "end")]
        end: Option<String>,
    },
}
