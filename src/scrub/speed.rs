//! Playback rate multiplier.
//!
//! The rate only scales how often progress indicators refresh; it does not
//! change how fast the media itself plays.

/// Minimum rate (0.1x).
pub const MIN_PLAYBACK_RATE: f64 = 0.1;

/// Maximum rate (16x).
pub const MAX_PLAYBACK_RATE: f64 = 16.0;

/// Factor applied by one speed-up/speed-down step.
const RATE_STEP: f64 = 1.5;

/// Playback rate, guaranteed to be within `[0.1, 16.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a rate, clamping to the valid range. NaN falls back to 1x.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self::default();
        }
        Self(rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Next faster rate (x1.5, max 16x).
    #[must_use]
    pub fn faster(self) -> Self {
        Self::new(self.0 * RATE_STEP)
    }

    /// Next slower rate (/1.5, min 0.1x).
    #[must_use]
    pub fn slower(self) -> Self {
        Self::new(self.0 / RATE_STEP)
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(1.0)
    }
}
