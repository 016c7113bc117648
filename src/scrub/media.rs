//! Media capability consumed from the host.
//!
//! The engine never owns decoding or output; it reads and writes the
//! primary source only through this narrow interface.

use serde::{Deserialize, Serialize};

use super::mapper::MILLIS_PER_SECOND;

/// A playable, seekable media source.
///
/// Times are in milliseconds. `duration_ms` reports `0.0` until the
/// source knows its duration.
pub trait Media {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_playing(&self) -> bool;

    fn current_time_ms(&self) -> f64;
    fn seek_ms(&mut self, time_ms: f64);
    fn duration_ms(&self) -> f64;

    fn is_muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn set_autoplay(&mut self, autoplay: bool);

    /// Create a second, independent instance of the same source.
    ///
    /// The clone shares the source but not the playback position.
    fn detached_clone(&self) -> Self
    where
        Self: Sized;

    /// Current time in seconds.
    fn current_time_secs(&self) -> f64 {
        self.current_time_ms() / MILLIS_PER_SECOND
    }

    /// Seek to a time given in seconds.
    fn seek_secs(&mut self, time_secs: f64) {
        self.seek_ms(time_secs * MILLIS_PER_SECOND);
    }
}

/// Notifications the host forwards from its media source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Enough is known to play; the duration is now available
    ReadyToPlay,
    /// Playback started
    Play,
    /// Playback paused (including reaching the end)
    Pause,
}

/// A candidate source for the primary media.
///
/// The host picks the first candidate it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    pub source: String,
    pub mime_type: String,
}

impl MediaSource {
    pub fn new(source: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mime_type: mime_type.into(),
        }
    }
}
