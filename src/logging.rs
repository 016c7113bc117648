//! Diagnostic logging setup.
//!
//! The player draws on the alternate screen, so log output never goes to
//! the terminal. Logging is off unless a log file is requested.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "scrubber=debug";

/// Build the filter from `RUST_LOG`, or [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send `tracing` output to a file, appending to it.
///
/// A second call in the same process is ignored.
///
/// # Errors
/// Returns the I/O error if the file cannot be opened.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scrubber.log");

        init_file_logging(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(init_file_logging(&dir.path().join("no/such/dir.log")).is_err());
    }
}
