//! Time accounting engine library root.
//!
//! `core` holds the pure engine (segment classification, schedule
//! resolution, overtime allocation, row assembly); the other modules are the
//! command-line shell around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::date::parse_datetime;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Timecard { .. } => cli::commands::timecard::handle(&cli.command, cfg, now),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, cfg, now),
    }
}

/// Entry point used by main.rs, after argument parsing.
pub fn run(cli: &Cli) -> AppResult<()> {
    // load config once
    let cfg = Config::load(cli.config.as_ref())?;

    // one reference instant for the whole run
    let now = match &cli.now {
        Some(raw) => parse_datetime(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
        None => utils::date::now(),
    };

    dispatch(cli, &cfg, now)
}
