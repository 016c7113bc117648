//! Pointer-coordinate <-> playback-time conversions.
//!
//! Every function here is pure. Unknown durations and unmeasured timelines
//! come back as `None` so that a zero denominator never reaches a style value.

use super::geometry::TimelineGeometry;

/// Milliseconds per second as f64 for calculations.
pub const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Returns the duration if it is usable as a denominator.
///
/// Media sources report `0` (or NaN) until their duration is known.
#[inline]
pub fn known_duration_ms(duration_ms: f64) -> Option<f64> {
    (duration_ms.is_finite() && duration_ms > 0.0).then_some(duration_ms)
}

/// Convert a pointer x coordinate into a playback time in seconds.
///
/// The pointer offset is clamped to the timeline *before* dividing, so the
/// result always lies within `[0, duration_ms / 1000]` no matter where the
/// pointer is.
///
/// # Arguments
/// * `geometry` - Current timeline geometry
/// * `duration_ms` - Media duration in milliseconds
/// * `pointer_x` - Pointer position in screen coordinates
///
/// # Returns
/// `None` if the duration or geometry is unknown, or the pointer is NaN.
pub fn time_from_offset(
    geometry: &TimelineGeometry,
    duration_ms: f64,
    pointer_x: f64,
) -> Option<f64> {
    let duration_ms = known_duration_ms(duration_ms)?;
    if !geometry.is_valid() || pointer_x.is_nan() {
        return None;
    }

    let offset = (pointer_x - geometry.origin_x).clamp(0.0, geometry.width);
    Some(offset / geometry.width * duration_ms / MILLIS_PER_SECOND)
}

/// Convert a playback time into the covered fraction of the timeline.
///
/// Used for the filled-progress width, the thumb offset, and (after
/// centering) the preview box position.
///
/// # Returns
/// A fraction in `[0, 1]`, or `None` if the duration or geometry is unknown.
pub fn offset_from_time(
    geometry: &TimelineGeometry,
    duration_ms: f64,
    time_secs: f64,
) -> Option<f64> {
    let duration_ms = known_duration_ms(duration_ms)?;
    if !geometry.is_valid() || time_secs.is_nan() {
        return None;
    }

    Some((time_secs * MILLIS_PER_SECOND / duration_ms).clamp(0.0, 1.0))
}

/// Screen x coordinate of a timeline fraction.
///
/// Inverse of the pointer side of [`time_from_offset`]: feeding the result
/// back in yields the same fraction of the duration.
pub fn fraction_to_x(geometry: &TimelineGeometry, fraction: f64) -> f64 {
    geometry.origin_x + fraction.clamp(0.0, 1.0) * geometry.width
}

/// Left edge of the preview box, relative to the timeline origin.
///
/// Centers the box under the pointer, then clamps it to
/// `[0, width - preview_width]` so it never leaves the timeline's extent.
/// A preview wider than the timeline is pinned to the left edge.
pub fn preview_left(
    geometry: &TimelineGeometry,
    preview_width: f64,
    pointer_x: f64,
) -> Option<f64> {
    if !geometry.is_valid() || pointer_x.is_nan() || !preview_width.is_finite() {
        return None;
    }

    let max_left = (geometry.width - preview_width).max(0.0);
    let centered = pointer_x - geometry.origin_x - preview_width / 2.0;
    Some(centered.clamp(0.0, max_left))
}
