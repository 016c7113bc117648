//! Integration tests for scrubber
//!
//! Single test target; each file covers one area.

mod helpers;

mod cli_test;
mod config_test;
mod scrub_scenarios_test;
