//! Layout and style capabilities consumed from the host.

use std::fmt;

use super::geometry::BoundingBox;

/// Elements the engine measures or styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The interactive timeline strip
    Timeline,
    /// Filled part of the timeline up to the current position
    FilledProgress,
    /// Draggable position indicator
    Thumb,
    /// Floating preview box
    Preview,
}

/// Style properties the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Width,
    AspectRatio,
    Left,
    Top,
    Visibility,
}

/// Value written for a style property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// Percentage of the containing element (0-100)
    Percent(f64),
    /// Absolute length in host units
    Pixels(f64),
    /// Unitless ratio
    Ratio(f64),
    /// Out-of-flow positioning
    Absolute,
    Visible,
    Hidden,
}

impl StyleValue {
    pub fn visibility(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(value) => write!(f, "{}%", value),
            Self::Pixels(value) => write!(f, "{}px", value),
            Self::Ratio(value) => write!(f, "{}", value),
            Self::Absolute => f.write_str("absolute"),
            Self::Visible => f.write_str("visible"),
            Self::Hidden => f.write_str("hidden"),
        }
    }
}

/// Measures elements on demand.
///
/// Results are only valid for the computation pass that requested them.
pub trait Layout {
    fn bounding_box(&self, element: Element) -> Option<BoundingBox>;
}

/// Applies style values to elements. Side-effect only.
pub trait StyleSink {
    fn set_style(&mut self, element: Element, property: StyleProperty, value: StyleValue);
}

/// A host surface that can both be measured and styled.
pub trait Surface: Layout + StyleSink {}

impl<T: Layout + StyleSink> Surface for T {}
