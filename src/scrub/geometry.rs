//! Geometry snapshots for the timeline and the floating preview box.
//!
//! All values are stale snapshots taken from the host's layout capability.
//! They are recomputed wholesale whenever layout may have changed and never
//! patched incrementally.

/// Axis-aligned box in host screen units (pixels, or cells for a terminal).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the box (right and bottom edges exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Horizontal extent of the interactive timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    /// Left edge of the timeline in screen coordinates
    pub origin_x: f64,
    /// Width of the timeline; must be positive to be usable
    pub width: f64,
}

impl TimelineGeometry {
    pub fn new(origin_x: f64, width: f64) -> Self {
        Self { origin_x, width }
    }

    /// Measure the timeline from its bounding box.
    ///
    /// Returns `None` when the box has not been laid out yet (zero or
    /// non-finite width), so callers treat the geometry as unknown.
    pub fn from_bounds(bounds: &BoundingBox) -> Option<Self> {
        let geometry = Self::new(bounds.x, bounds.width);
        geometry.is_valid().then_some(geometry)
    }

    /// A geometry is only usable once the timeline has a positive width.
    pub fn is_valid(&self) -> bool {
        self.origin_x.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Size and vertical placement of the preview box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGeometry {
    pub width: f64,
    pub height: f64,
    /// Top edge of the preview; always above the timeline's top edge
    pub vertical_offset: f64,
}

impl PreviewGeometry {
    /// Derive the preview geometry from its natural box and the timeline bounds.
    ///
    /// The preview sits one timeline-height above the timeline so that it
    /// never covers the strip the pointer is interacting with.
    ///
    /// # Returns
    /// `None` if the preview box has no usable size yet.
    pub fn compute(natural: &BoundingBox, timeline: &BoundingBox) -> Option<Self> {
        if !(natural.width.is_finite() && natural.height.is_finite())
            || natural.width <= 0.0
            || natural.height <= 0.0
        {
            return None;
        }

        let gap = timeline.height.max(0.0);
        Some(Self {
            width: natural.width,
            height: natural.height,
            vertical_offset: timeline.y - natural.height - gap,
        })
    }

    /// Bottom edge of the preview box.
    pub fn bottom(&self) -> f64 {
        self.vertical_offset + self.height
    }
}
