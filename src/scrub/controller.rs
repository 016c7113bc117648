//! Composition root for the scrub engine.
//!
//! The controller owns the primary media, the tracker, the preview sampler,
//! the scrub session and the listener subscriptions. The host forwards its
//! events here and supplies its surface for each call; nothing keeps a
//! reference to the surface between calls.

use std::time::Instant;

use tracing::{debug, info, trace};

use super::geometry::{BoundingBox, TimelineGeometry};
use super::listeners::{InputRegistry, ListenerScope, ListenerSet};
use super::mapper::{known_duration_ms, offset_from_time, MILLIS_PER_SECOND};
use super::media::{Media, MediaEvent};
use super::preview::{PreviewPlacement, PreviewSampler, PreviewStyle};
use super::session::{PointerEvent, ScrubCommand, ScrubContext, ScrubSession, ScrubState};
use super::speed::PlaybackRate;
use super::surface::{Element, StyleProperty, StyleSink, StyleValue, Surface};
use super::tracker::{Cadence, ProgressTracker, Tick};

/// Tunables for a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub cadence: Cadence,
    pub playback_rate: PlaybackRate,
    pub preview: PreviewStyle,
    /// Start playing the first time the media becomes ready
    pub autoplay: bool,
    pub start_muted: bool,
    /// Step used by keyboard seeking
    pub seek_step_secs: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            cadence: Cadence::default(),
            playback_rate: PlaybackRate::default(),
            preview: PreviewStyle::default(),
            autoplay: true,
            start_muted: true,
            seek_step_secs: 5.0,
        }
    }
}

/// Read-only view of the controller for rendering and status display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSnapshot {
    pub state: ScrubState,
    pub ready: bool,
    pub playing: bool,
    pub muted: bool,
    pub current_secs: f64,
    pub duration_secs: Option<f64>,
    /// Covered fraction of the timeline, if it can be computed
    pub fraction: Option<f64>,
    /// Preview placement while the preview is visible
    pub preview: Option<PreviewPlacement>,
    pub rate: PlaybackRate,
    pub tracker_running: bool,
}

/// Wires the scrub engine to a host.
#[derive(Debug)]
pub struct Controller<M> {
    media: M,
    settings: ControllerSettings,
    tracker: ProgressTracker,
    preview: PreviewSampler<M>,
    session: ScrubSession,
    listeners: ListenerSet,
    timeline_bounds: Option<BoundingBox>,
    geometry: Option<TimelineGeometry>,
    /// Duration the current initialization was performed for
    ready_duration_ms: Option<f64>,
}

impl<M: Media> Controller<M> {
    pub fn new(mut media: M, settings: ControllerSettings) -> Self {
        media.set_muted(settings.start_muted);
        Self {
            media,
            tracker: ProgressTracker::new(settings.cadence, settings.playback_rate),
            preview: PreviewSampler::new(settings.preview),
            session: ScrubSession::new(),
            listeners: ListenerSet::default(),
            timeline_bounds: None,
            geometry: None,
            ready_duration_ms: None,
            settings,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn preview(&self) -> &PreviewSampler<M> {
        &self.preview
    }

    pub fn session(&self) -> &ScrubSession {
        &self.session
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn geometry(&self) -> Option<TimelineGeometry> {
        self.geometry
    }

    pub fn timeline_bounds(&self) -> Option<BoundingBox> {
        self.timeline_bounds
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn is_ready(&self) -> bool {
        self.ready_duration_ms.is_some()
    }

    /// Initialize once the media knows its duration.
    ///
    /// Attaches the preview, installs listeners and measures the layout.
    /// Repeated readiness for the same duration is a no-op. A different
    /// duration (a new source) re-runs initialization from scratch.
    ///
    /// # Returns
    /// `true` if initialization ran.
    pub fn on_ready<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        input: &mut dyn InputRegistry,
    ) -> bool {
        let Some(duration_ms) = known_duration_ms(self.media.duration_ms()) else {
            debug!("ready reported before duration is known");
            return false;
        };

        let first_load = match self.ready_duration_ms {
            Some(previous) if previous == duration_ms => {
                trace!("already initialized for this duration");
                return false;
            }
            Some(previous) => {
                info!(previous, duration_ms, "duration changed; reinitializing");
                let commands = self.session.cancel();
                self.apply(commands, surface);
                self.preview.detach();
                false
            }
            None => true,
        };

        self.preview.attach(&self.media);
        self.listeners.install(input, &ListenerScope::ALL);
        self.ready_duration_ms = Some(duration_ms);
        self.measure(surface);

        if first_load && self.settings.autoplay {
            self.set_playing(true);
        } else if self.media.is_playing() {
            self.tracker.start(Instant::now());
        }
        self.refresh_indicators(surface);

        info!(duration_ms, "scrub controller ready");
        true
    }

    /// Re-measure after a layout change.
    ///
    /// Recomputes the timeline geometry and re-lays out the preview box.
    /// The preview instance itself is never re-created here.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.measure(surface);
        self.refresh_indicators(surface);
    }

    /// Forward a notification from the media source.
    pub fn on_media_event<S: Surface + ?Sized>(
        &mut self,
        event: MediaEvent,
        surface: &mut S,
        input: &mut dyn InputRegistry,
    ) {
        match event {
            MediaEvent::ReadyToPlay => {
                self.on_ready(surface, input);
            }
            MediaEvent::Play => {
                self.tracker.start(Instant::now());
            }
            MediaEvent::Pause => {
                self.tracker.stop();
            }
        }
    }

    /// Forward a pointer event to the scrub session and execute the result.
    pub fn on_pointer<S: Surface + ?Sized>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
    ) -> ScrubState {
        let ctx = ScrubContext {
            geometry: self.geometry,
            duration_ms: self.media.duration_ms(),
            playing: self.media.is_playing(),
            current_time_secs: self.media.current_time_secs(),
        };
        let commands = self.session.handle(event, &ctx);
        self.apply(commands, surface);
        self.session.state()
    }

    /// Abandon a hover or drag (e.g. Escape). Returns `false` if idle.
    pub fn cancel_scrub<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let commands = self.session.cancel();
        let cancelled = !commands.is_empty();
        self.apply(commands, surface);
        cancelled
    }

    /// Toggle or set playback.
    ///
    /// During a drag this only changes whether playback resumes once the
    /// drag ends; the media stays paused under the pointer.
    ///
    /// # Returns
    /// The resulting play intent.
    pub fn toggle_play(&mut self, explicit: Option<bool>) -> bool {
        if self.session.is_dragging() {
            let intent = explicit.unwrap_or(!self.session.resume_intent());
            self.session.set_resume_intent(intent);
            debug!(intent, "play intent changed mid-drag");
            return intent;
        }

        let play = explicit.unwrap_or(!self.media.is_playing());
        self.set_playing(play);
        play
    }

    /// Toggle the primary media's mute state. Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        debug!(muted, "mute toggled");
        muted
    }

    /// Sample progress if a tick is due and write it to the indicators.
    pub fn poll<S: StyleSink + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Option<Tick> {
        let tick = self.tracker.poll(now, &self.media, self.geometry.as_ref())?;
        write_indicators(surface, tick.fraction);
        Some(tick)
    }

    /// When the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracker.next_deadline()
    }

    /// Seek relative to the current position (keyboard seeking).
    ///
    /// Ignored while dragging or before the duration is known.
    ///
    /// # Returns
    /// The new time in seconds.
    pub fn seek_by<S: StyleSink + ?Sized>(
        &mut self,
        delta_secs: f64,
        surface: &mut S,
    ) -> Option<f64> {
        let target = self.media.current_time_secs() + delta_secs;
        self.seek_to(target, surface)
    }

    pub fn seek_to_start<S: StyleSink + ?Sized>(&mut self, surface: &mut S) -> Option<f64> {
        self.seek_to_fraction(0.0, surface)
    }

    pub fn seek_to_end<S: StyleSink + ?Sized>(&mut self, surface: &mut S) -> Option<f64> {
        self.seek_to_fraction(1.0, surface)
    }

    /// Seek to a fraction of the duration.
    pub fn seek_to_fraction<S: StyleSink + ?Sized>(
        &mut self,
        fraction: f64,
        surface: &mut S,
    ) -> Option<f64> {
        let duration_secs = known_duration_ms(self.media.duration_ms())? / MILLIS_PER_SECOND;
        self.seek_to(fraction.clamp(0.0, 1.0) * duration_secs, surface)
    }

    /// Raise the playback rate (faster indicator refresh).
    pub fn speed_up(&mut self) -> PlaybackRate {
        let rate = self.tracker.rate().faster();
        self.tracker.set_rate(rate, Instant::now());
        rate
    }

    /// Lower the playback rate (slower indicator refresh).
    pub fn speed_down(&mut self) -> PlaybackRate {
        let rate = self.tracker.rate().slower();
        self.tracker.set_rate(rate, Instant::now());
        rate
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let raw_duration_ms = self.media.duration_ms();
        let current_secs = self.media.current_time_secs();
        let fraction = self
            .geometry
            .as_ref()
            .and_then(|geometry| offset_from_time(geometry, raw_duration_ms, current_secs));

        ControllerSnapshot {
            state: self.session.state(),
            ready: self.is_ready(),
            playing: self.media.is_playing(),
            muted: self.media.is_muted(),
            current_secs,
            duration_secs: known_duration_ms(raw_duration_ms).map(|ms| ms / MILLIS_PER_SECOND),
            fraction,
            preview: self
                .preview
                .placement()
                .filter(|_| self.preview.is_visible()),
            rate: self.tracker.rate(),
            tracker_running: self.tracker.is_running(),
        }
    }

    fn seek_to<S: StyleSink + ?Sized>(&mut self, target_secs: f64, surface: &mut S) -> Option<f64> {
        if self.session.is_dragging() {
            return None;
        }
        let duration_secs = known_duration_ms(self.media.duration_ms())? / MILLIS_PER_SECOND;
        let time_secs = target_secs.clamp(0.0, duration_secs);
        self.media.seek_secs(time_secs);
        self.refresh_indicators(surface);
        Some(time_secs)
    }

    fn set_playing(&mut self, play: bool) {
        if play {
            self.media.play();
            self.tracker.start(Instant::now());
        } else {
            self.media.pause();
            self.tracker.stop();
        }
        debug!(play, "playback toggled");
    }

    fn measure<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.timeline_bounds = surface.bounding_box(Element::Timeline);
        self.geometry = self
            .timeline_bounds
            .as_ref()
            .and_then(TimelineGeometry::from_bounds);

        match self.timeline_bounds {
            Some(bounds) if self.geometry.is_some() => {
                self.preview.layout(surface, &bounds);
                debug!(x = bounds.x, width = bounds.width, "timeline measured");
            }
            _ => debug!("timeline not measured yet; positioning suppressed"),
        }
    }

    fn refresh_indicators<S: StyleSink + ?Sized>(&self, surface: &mut S) {
        if self.session.is_dragging() {
            return;
        }
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        let current_secs = self.media.current_time_secs();
        if let Some(fraction) = offset_from_time(geometry, self.media.duration_ms(), current_secs) {
            write_indicators(surface, fraction);
        }
    }

    fn apply<S: Surface + ?Sized>(&mut self, commands: Vec<ScrubCommand>, surface: &mut S) {
        for command in commands {
            trace!(?command, "apply");
            match command {
                ScrubCommand::ShowPreview { x } => {
                    if let Some(geometry) = self.geometry {
                        self.preview
                            .show_at(surface, x, &geometry, self.media.duration_ms());
                    }
                }
                ScrubCommand::HidePreview => self.preview.hide(surface),
                ScrubCommand::Seek { time_secs } => self.media.seek_secs(time_secs),
                ScrubCommand::UpdateIndicators { fraction } => write_indicators(surface, fraction),
                ScrubCommand::Pause => self.set_playing(false),
                ScrubCommand::Resume => self.set_playing(true),
                ScrubCommand::SuspendTracker => self.tracker.set_suppressed(true),
                ScrubCommand::ResumeTracker => self.tracker.set_suppressed(false),
            }
        }
    }
}

/// Write the filled-progress width and thumb offset for a fraction.
fn write_indicators<S: StyleSink + ?Sized>(surface: &mut S, fraction: f64) {
    let percent = StyleValue::Percent(fraction.clamp(0.0, 1.0) * 100.0);
    surface.set_style(Element::FilledProgress, StyleProperty::Width, percent);
    surface.set_style(Element::Thumb, StyleProperty::Left, percent);
}
