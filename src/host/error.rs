//! Terminal host errors.

/// Errors that can occur while setting up or running the terminal host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("No supported media source among {candidates} candidate(s)")]
    NoSupportedSource { candidates: usize },

    #[error("Media duration must be positive, got {0} seconds")]
    InvalidDuration(f64),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
