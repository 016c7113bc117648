//! Progress sampling while the primary media plays.
//!
//! The tracker is a single deadline polled by the host's event loop rather
//! than a free-running timer. `start` and `stop` only ever create or clear
//! that one deadline, so repeated play/pause notifications can never leave
//! two schedules running.

use std::time::{Duration, Instant};

use tracing::trace;

use super::geometry::TimelineGeometry;
use super::mapper::offset_from_time;
use super::media::Media;
use super::speed::PlaybackRate;

/// How the sampling interval scales with playback rate.
///
/// `interval = base / rate`, clamped to `[min, max]`. The lower bound keeps a
/// very high rate from busy-looping the host, the upper bound keeps a rate
/// near zero from freezing the indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub base: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl Cadence {
    pub fn interval_for(&self, rate: PlaybackRate) -> Duration {
        let secs = self.base.as_secs_f64() / rate.value();
        let min = self.min.as_secs_f64();
        let max = self.max.as_secs_f64().max(min);
        Duration::from_secs_f64(secs.clamp(min, max))
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(33),
            min: Duration::from_millis(8),
            max: Duration::from_millis(250),
        }
    }
}

/// One sampled position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Sampled media time in seconds
    pub time_secs: f64,
    /// Covered fraction of the timeline, in `[0, 1]`
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    next_due: Instant,
    interval: Duration,
}

/// Polls the primary media on a fixed cadence and reports its position.
#[derive(Debug)]
pub struct ProgressTracker {
    cadence: Cadence,
    rate: PlaybackRate,
    schedule: Option<Schedule>,
    suppressed: bool,
    ticks_emitted: u64,
}

impl ProgressTracker {
    pub fn new(cadence: Cadence, rate: PlaybackRate) -> Self {
        Self {
            cadence,
            rate,
            schedule: None,
            suppressed: false,
            ticks_emitted: 0,
        }
    }

    /// Sampling interval at the current rate.
    pub fn interval(&self) -> Duration {
        self.cadence.interval_for(self.rate)
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Change the rate; a running schedule is rescaled in place.
    pub fn set_rate(&mut self, rate: PlaybackRate, now: Instant) {
        self.rate = rate;
        let interval = self.interval();
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.interval = interval;
            schedule.next_due = schedule.next_due.min(now + interval);
        }
    }

    /// Begin sampling. Returns `false` if a schedule was already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.schedule.is_some() {
            return false;
        }
        let interval = self.interval();
        self.schedule = Some(Schedule {
            next_due: now + interval,
            interval,
        });
        trace!(?interval, "progress tracker started");
        true
    }

    /// Cancel the outstanding tick. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.schedule.take().is_some();
        if was_running {
            trace!("progress tracker stopped");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Silence ticks at the source, e.g. for the duration of a drag.
    ///
    /// The schedule keeps running; a suppressed tracker just never samples.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// When the host should poll next, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.map(|schedule| schedule.next_due)
    }

    /// Total ticks emitted since creation.
    pub fn ticks_emitted(&self) -> u64 {
        self.ticks_emitted
    }

    /// Sample the media if a tick is due.
    ///
    /// Missed deadlines are coalesced into one tick rather than replayed.
    ///
    /// # Returns
    /// `None` when not running, not due, suppressed, or when the duration or
    /// geometry is not yet known.
    pub fn poll<M: Media + ?Sized>(
        &mut self,
        now: Instant,
        media: &M,
        geometry: Option<&TimelineGeometry>,
    ) -> Option<Tick> {
        let schedule = self.schedule.as_mut()?;
        if now < schedule.next_due {
            return None;
        }
        schedule.next_due = now + schedule.interval;

        if self.suppressed {
            return None;
        }

        let time_secs = media.current_time_secs();
        let fraction = offset_from_time(geometry?, media.duration_ms(), time_secs)?;
        self.ticks_emitted += 1;
        Some(Tick {
            time_secs,
            fraction,
        })
    }
}
