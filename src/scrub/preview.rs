//! Hover preview: a detached, muted, paused clone of the primary media.
//!
//! The clone only ever changes time and screen position. Its play and mute
//! state are fixed when it is created.

use tracing::{debug, trace};

use super::geometry::{BoundingBox, PreviewGeometry, TimelineGeometry};
use super::mapper::{preview_left, time_from_offset};
use super::media::Media;
use super::surface::{Element, StyleProperty, StyleValue, Surface};

/// Requested size of the preview box.
///
/// The host turns this into a natural box; the sampler measures that box
/// back rather than trusting these numbers directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewStyle {
    pub width: f64,
    pub aspect_ratio: f64,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            width: 160.0,
            aspect_ratio: 2.0,
        }
    }
}

/// Where the preview was shown and which time it displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPlacement {
    /// Left edge relative to the timeline origin
    pub left: f64,
    /// Candidate time shown in the preview, in seconds
    pub time_secs: f64,
}

/// Owns the secondary media instance and positions its floating box.
#[derive(Debug)]
pub struct PreviewSampler<M> {
    media: Option<M>,
    style: PreviewStyle,
    geometry: Option<PreviewGeometry>,
    placement: Option<PreviewPlacement>,
    visible: bool,
}

impl<M: Media> PreviewSampler<M> {
    pub fn new(style: PreviewStyle) -> Self {
        Self {
            media: None,
            style,
            geometry: None,
            placement: None,
            visible: false,
        }
    }

    /// Create the secondary instance from the primary.
    ///
    /// Only the first call has an effect; readiness can be reported more than
    /// once per load.
    ///
    /// # Returns
    /// `true` if a new instance was created.
    pub fn attach(&mut self, primary: &M) -> bool {
        if self.media.is_some() {
            trace!("preview already attached");
            return false;
        }

        let mut clone = primary.detached_clone();
        clone.pause();
        clone.set_autoplay(false);
        clone.set_muted(true);
        self.media = Some(clone);
        debug!("preview instance attached");
        true
    }

    /// Drop the secondary instance so the next `attach` re-clones the source.
    pub fn detach(&mut self) {
        if self.media.take().is_some() {
            debug!("preview instance detached");
        }
        self.placement = None;
        self.visible = false;
    }

    pub fn is_attached(&self) -> bool {
        self.media.is_some()
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn geometry(&self) -> Option<PreviewGeometry> {
        self.geometry
    }

    pub fn placement(&self) -> Option<PreviewPlacement> {
        self.placement
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Size the preview box and place it above the timeline.
    ///
    /// Must be re-run after every resize. Leaves the box hidden.
    ///
    /// # Arguments
    /// * `surface` - Host surface used to style and then measure the box
    /// * `timeline_bounds` - Current bounding box of the timeline
    pub fn layout<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        timeline_bounds: &BoundingBox,
    ) -> Option<PreviewGeometry> {
        surface.set_style(
            Element::Preview,
            StyleProperty::Position,
            StyleValue::Absolute,
        );
        surface.set_style(
            Element::Preview,
            StyleProperty::Width,
            StyleValue::Pixels(self.style.width),
        );
        surface.set_style(
            Element::Preview,
            StyleProperty::AspectRatio,
            StyleValue::Ratio(self.style.aspect_ratio),
        );
        self.hide(surface);

        let natural = surface.bounding_box(Element::Preview);
        self.geometry = natural.and_then(|b| PreviewGeometry::compute(&b, timeline_bounds));

        if let Some(geometry) = self.geometry {
            surface.set_style(
                Element::Preview,
                StyleProperty::Top,
                StyleValue::Pixels(geometry.vertical_offset),
            );
            debug!(
                width = geometry.width,
                height = geometry.height,
                top = geometry.vertical_offset,
                "preview laid out"
            );
        }
        self.geometry
    }

    /// Show the preview under the pointer, displaying the time it points at.
    ///
    /// # Returns
    /// The placement, or `None` (and nothing shown) if the sampler is not
    /// attached or laid out, or the duration/geometry is unknown.
    pub fn show_at<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        pointer_x: f64,
        timeline: &TimelineGeometry,
        duration_ms: f64,
    ) -> Option<PreviewPlacement> {
        let geometry = self.geometry?;
        let media = self.media.as_mut()?;

        let left = preview_left(timeline, geometry.width, pointer_x)?;
        let time_secs = time_from_offset(timeline, duration_ms, pointer_x)?;
        media.seek_secs(time_secs);

        surface.set_style(
            Element::Preview,
            StyleProperty::Left,
            StyleValue::Pixels(left),
        );
        surface.set_style(
            Element::Preview,
            StyleProperty::Visibility,
            StyleValue::Visible,
        );

        let placement = PreviewPlacement { left, time_secs };
        self.placement = Some(placement);
        self.visible = true;
        Some(placement)
    }

    /// Hide the preview. The last position is kept until the next `show_at`.
    pub fn hide<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.set_style(
            Element::Preview,
            StyleProperty::Visibility,
            StyleValue::Hidden,
        );
        self.visible = false;
    }
}
