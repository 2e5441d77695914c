use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.config.as_ref())?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
