//! Timeline scrubbing with hover preview for continuous media playback.
//!
//! - [`scrub`]: the host-independent engine (mapping, tracking, preview,
//!   the scrub state machine and its controller)
//! - [`host`]: a terminal host built on ratatui and crossterm
//! - [`config`]: TOML user configuration
//! - [`cli`]: command-line definitions

pub mod cli;
pub mod config;
pub mod host;
pub mod logging;
pub mod scrub;

pub use config::Config;
