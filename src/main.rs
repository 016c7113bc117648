//! scrubber - timeline scrubbing with hover preview in the terminal

mod commands;

use anyhow::Result;
use clap::Parser;

use scrubber::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Config(command) => commands::config::handle(command),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
