//! Config subcommands handler

use anyhow::{Context, Result};

use scrubber::cli::ConfigCommands;
use scrubber::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(),
        ConfigCommands::Path => handle_path(),
        ConfigCommands::Default => handle_default(),
    }
}

/// Print the effective configuration (file merged over defaults).
fn handle_show() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn handle_default() -> Result<()> {
    print!("{}", Config::default().to_toml()?);
    Ok(())
}
