//! Recording fakes for the host capabilities, shared by unit tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use super::geometry::BoundingBox;
use super::listeners::{InputRegistry, ListenerScope, SubscriptionId};
use super::media::Media;
use super::surface::{Element, Layout, StyleProperty, StyleSink, StyleValue};

/// In-memory media whose time only moves when seeked.
#[derive(Debug)]
pub struct FakeMedia {
    duration_ms: f64,
    time_ms: f64,
    playing: bool,
    muted: bool,
    autoplay: bool,
    play_calls: u32,
    pause_calls: u32,
    clones: Rc<Cell<usize>>,
}

impl FakeMedia {
    pub fn with_duration(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            time_ms: 0.0,
            playing: false,
            muted: false,
            autoplay: true,
            play_calls: 0,
            pause_calls: 0,
            clones: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn play_calls(&self) -> u32 {
        self.play_calls
    }

    pub fn pause_calls(&self) -> u32 {
        self.pause_calls
    }

    /// Number of detached clones made from this instance.
    pub fn clone_count(&self) -> usize {
        self.clones.get()
    }
}

impl Media for FakeMedia {
    fn play(&mut self) {
        self.play_calls += 1;
        self.playing = true;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn current_time_ms(&self) -> f64 {
        self.time_ms
    }

    fn seek_ms(&mut self, time_ms: f64) {
        self.time_ms = if self.duration_ms > 0.0 {
            time_ms.clamp(0.0, self.duration_ms)
        } else {
            time_ms.max(0.0)
        };
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
        self.clones.set(self.clones.get() + 1);
        let mut clone = Self::with_duration(self.duration_ms);
        clone.muted = self.muted;
        clone
    }
}

/// Surface with fixed element boxes that records every style write.
///
/// The preview's natural box is derived from its width and aspect-ratio
/// styles, the way a layout engine would.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    boxes: HashMap<Element, BoundingBox>,
    pub writes: Vec<(Element, StyleProperty, StyleValue)>,
}

impl RecordingSurface {
    pub fn with_timeline(bounds: BoundingBox) -> Self {
        let mut surface = Self::default();
        surface.boxes.insert(Element::Timeline, bounds);
        surface
    }

    pub fn set_box(&mut self, element: Element, bounds: BoundingBox) {
        self.boxes.insert(element, bounds);
    }

    pub fn last_style(&self, element: Element, property: StyleProperty) -> Option<StyleValue> {
        self.writes
            .iter()
            .rev()
            .find(|(e, p, _)| *e == element && *p == property)
            .map(|(_, _, v)| *v)
    }

    /// Number of writes to the progress indicators.
    pub fn indicator_writes(&self) -> usize {
        self.writes
            .iter()
            .filter(|(e, _, _)| matches!(e, Element::FilledProgress | Element::Thumb))
            .count()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Layout for RecordingSurface {
    fn bounding_box(&self, element: Element) -> Option<BoundingBox> {
        if element == Element::Preview {
            let width = match self.last_style(Element::Preview, StyleProperty::Width)? {
                StyleValue::Pixels(width) => width,
                _ => return None,
            };
            let ratio = match self.last_style(Element::Preview, StyleProperty::AspectRatio) {
                Some(StyleValue::Ratio(ratio)) if ratio > 0.0 => ratio,
                _ => 1.0,
            };
            return Some(BoundingBox::new(0.0, 0.0, width, width / ratio));
        }
        self.boxes.get(&element).copied()
    }
}

impl StyleSink for RecordingSurface {
    fn set_style(&mut self, element: Element, property: StyleProperty, value: StyleValue) {
        self.writes.push((element, property, value));
    }
}

/// Registry that tracks live subscriptions per scope.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    next_id: u64,
    active: HashMap<SubscriptionId, ListenerScope>,
    pub subscribe_calls: usize,
}

impl FakeRegistry {
    pub fn active_count(&self, scope: ListenerScope) -> usize {
        self.active.values().filter(|s| **s == scope).count()
    }

    pub fn total_active(&self) -> usize {
        self.active.len()
    }
}

impl InputRegistry for FakeRegistry {
    fn subscribe(&mut self, scope: ListenerScope) -> SubscriptionId {
        self.next_id += 1;
        self.subscribe_calls += 1;
        let id = SubscriptionId(self.next_id);
        self.active.insert(id, scope);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id);
    }
}
