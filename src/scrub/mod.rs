//! Scrub and preview interaction engine
//!
//! Maps playback time to timeline positions and back, arbitrates between
//! hover-preview and drag-to-seek, and keeps a silent preview instance in
//! sync with the pointer.
//!
//! # Architecture
//!
//! The engine is organized into submodules, leaves first:
//! - `geometry`: Bounding boxes and the timeline/preview geometry snapshots
//! - `mapper`: Pure pointer-coordinate <-> time conversions
//! - `media`: The `Media` capability the host implements
//! - `surface`: Layout and style capabilities (`Layout`, `StyleSink`)
//! - `listeners`: Idempotent input subscription ownership
//! - `tracker`: Cadence-driven progress sampling while playing
//! - `preview`: The detached preview instance and its floating box
//! - `session`: The Idle/Hovering/Dragging state machine
//! - `controller`: Composition root wiring everything to a host
//!
//! # Usage
//!
//! ```no_run
//! use scrubber::host::{ClockMedia, InputRouter, TerminalSurface};
//! use scrubber::scrub::{Controller, ControllerSettings, MediaEvent};
//!
//! let media = ClockMedia::new(200_000.0);
//! let mut controller = Controller::new(media, ControllerSettings::default());
//! let mut surface = TerminalSurface::new(80, 24);
//! let mut router = InputRouter::default();
//!
//! controller.on_media_event(MediaEvent::ReadyToPlay, &mut surface, &mut router);
//! controller.toggle_play(Some(true));
//! ```

mod controller;
pub mod geometry;
pub mod listeners;
pub mod mapper;
pub mod media;
pub mod preview;
pub mod session;
pub mod speed;
pub mod surface;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{Controller, ControllerSettings, ControllerSnapshot};
pub use geometry::{BoundingBox, PreviewGeometry, TimelineGeometry};
pub use listeners::{InputRegistry, ListenerScope, ListenerSet, SubscriptionId};
pub use media::{Media, MediaEvent, MediaSource};
pub use preview::{PreviewPlacement, PreviewSampler, PreviewStyle};
pub use session::{
    PointerEvent, PointerPhase, PointerTarget, ScrubCommand, ScrubContext, ScrubSession, ScrubState,
};
pub use speed::PlaybackRate;
pub use surface::{Element, Layout, StyleProperty, StyleSink, StyleValue, Surface};
pub use tracker::{Cadence, ProgressTracker, Tick};
