//! Subcommand handlers for the scrubber binary

pub mod completions;
pub mod config;
pub mod play;
