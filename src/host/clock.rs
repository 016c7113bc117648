//! Wall-clock media source for the terminal host.
//!
//! Plays back nothing; it advances a position with real time while playing,
//! which is all the scrub engine needs from a media source.

use std::time::Instant;

use crate::host::error::HostError;
use crate::scrub::{Media, MediaSource};

/// MIME types the terminal host accepts as a primary source.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/webm",
    "video/ogg",
    "audio/mpeg",
    "audio/ogg",
];

/// Pick the first candidate source the host supports.
///
/// # Errors
/// `HostError::NoSupportedSource` if no candidate matches.
pub fn pick_source(candidates: &[MediaSource]) -> Result<&MediaSource, HostError> {
    candidates
        .iter()
        .find(|candidate| SUPPORTED_MIME_TYPES.contains(&candidate.mime_type.as_str()))
        .ok_or(HostError::NoSupportedSource {
            candidates: candidates.len(),
        })
}

/// Media whose position follows the wall clock while playing.
#[derive(Debug, Clone)]
pub struct ClockMedia {
    source: Option<MediaSource>,
    duration_ms: f64,
    /// Position at `anchor` (or the frozen position while paused)
    position_ms: f64,
    /// Wall clock time playback last started; `None` while paused
    anchor: Option<Instant>,
    muted: bool,
    autoplay: bool,
}

impl ClockMedia {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            source: None,
            duration_ms: duration_ms.max(0.0),
            position_ms: 0.0,
            anchor: None,
            muted: false,
            autoplay: false,
        }
    }

    pub fn with_source(source: MediaSource, duration_ms: f64) -> Self {
        Self {
            source: Some(source),
            ..Self::new(duration_ms)
        }
    }

    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Whether playback has reached the end of the media.
    pub fn has_ended(&self) -> bool {
        self.duration_ms > 0.0 && self.current_time_ms() >= self.duration_ms
    }
}

impl Media for ClockMedia {
    fn play(&mut self) {
        if self.anchor.is_some() {
            return;
        }
        // Playing from the end restarts from the beginning
        if self.has_ended() {
            self.position_ms = 0.0;
        }
        self.anchor = Some(Instant::now());
    }

    fn pause(&mut self) {
        self.position_ms = self.current_time_ms();
        self.anchor = None;
    }

    fn is_playing(&self) -> bool {
        self.anchor.is_some()
    }

    fn current_time_ms(&self) -> f64 {
        let elapsed_ms = self
            .anchor
            .map(|anchor| anchor.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        (self.position_ms + elapsed_ms).min(self.duration_ms)
    }

    fn seek_ms(&mut self, time_ms: f64) {
        self.position_ms = if time_ms.is_nan() {
            0.0
        } else {
            time_ms.clamp(0.0, self.duration_ms)
        };
        if self.anchor.is_some() {
            self.anchor = Some(Instant::now());
        }
    }

    fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    fn detached_clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            muted: self.muted,
            autoplay: self.autoplay,
            ..Self::new(self.duration_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_source_takes_first_supported() {
        let candidates = vec![
            MediaSource::new("clip.mkv", "video/x-matroska"),
            MediaSource::new("clip.webm", "video/webm"),
            MediaSource::new("clip.mp4", "video/mp4"),
        ];
        assert_eq!(pick_source(&candidates).unwrap().source, "clip.webm");
    }

    #[test]
    fn pick_source_errors_when_nothing_matches() {
        let candidates = vec![MediaSource::new("clip.mkv", "video/x-matroska")];
        let err = pick_source(&candidates).unwrap_err();
        assert!(err.to_string().contains("1 candidate"));
    }

    #[test]
    fn paused_media_holds_position() {
        let mut media = ClockMedia::new(10_000.0);
        media.seek_ms(2_500.0);
        assert_eq!(media.current_time_ms(), 2_500.0);
        assert!(!media.is_playing());
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut media = ClockMedia::new(10_000.0);
        media.seek_ms(99_000.0);
        assert_eq!(media.current_time_ms(), 10_000.0);
        assert!(media.has_ended());
        media.seek_ms(-1.0);
        assert_eq!(media.current_time_ms(), 0.0);
    }

    #[test]
    fn playing_advances_and_pause_freezes() {
        let mut media = ClockMedia::new(10_000.0);
        media.play();
        std::thread::sleep(std::time::Duration::from_millis(20));
        media.pause();

        let frozen = media.current_time_ms();
        assert!(frozen >= 20.0);
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(media.current_time_ms(), frozen);
    }

    #[test]
    fn play_at_end_restarts() {
        let mut media = ClockMedia::new(1_000.0);
        media.seek_ms(1_000.0);
        media.play();
        assert!(media.current_time_ms() < 1_000.0);
    }

    #[test]
    fn detached_clone_is_paused_at_start() {
        let mut media = ClockMedia::with_source(MediaSource::new("a.mp4", "video/mp4"), 10_000.0);
        media.seek_ms(4_000.0);
        media.play();

        let clone = media.detached_clone();

        assert!(!clone.is_playing());
        assert_eq!(clone.current_time_ms(), 0.0);
        assert_eq!(clone.duration_ms(), 10_000.0);
        assert_eq!(clone.source().unwrap().source, "a.mp4");
    }
}
