//! CLI definitions for scrubber
//!
//! Kept in the library so xtask can generate man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string: `0.1.0 (abc1234 2026-01-01)` for dev builds,
/// `0.1.0 (2026-01-01)` for release builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SCRUBBER_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SCRUBBER_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "scrubber")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play media in the terminal with a scrubbable timeline
    #[command(long_about = "Play media in the terminal with a scrubbable timeline.

Hover the timeline to preview a position without seeking. Press and drag to
scrub; playback pauses while dragging and resumes on release if it was
playing before.

Keys: space play/pause, m mute, ←/→ or ,/. seek, Home/End jump,
+/- speed, Esc cancel a scrub, q quit.")]
    Play(PlayArgs),

    /// Inspect the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Media length in seconds (defaults to 5 minutes)
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// Initial playback rate (0.1 to 16)
    #[arg(short, long, value_name = "RATE")]
    pub rate: Option<f64>,

    /// Start muted regardless of the config
    #[arg(long)]
    pub muted: bool,

    /// Do not start playing once ready
    #[arg(long)]
    pub no_autoplay: bool,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Print the default configuration as TOML
    Default,
}
