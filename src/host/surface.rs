//! Terminal implementation of the layout and style capabilities.
//!
//! Units are terminal cells. The screen is split into a video area, the
//! timeline row and a status row; the preview box floats over the bottom of
//! the video area. Style writes land in a table the renderer reads back.

use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::scrub::mapper::fraction_to_x;
use crate::scrub::{
    BoundingBox, Element, Layout, PointerTarget, StyleProperty, StyleSink, StyleValue,
    TimelineGeometry,
};

/// Columns reserved to the right of the timeline for the time display.
pub const TIME_DISPLAY_WIDTH: u16 = 13;

/// Column where the timeline starts.
pub const TIMELINE_START_COL: u16 = 1;

/// Rows below the video area (timeline + status bar).
pub const CHROME_ROWS: u16 = 2;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Screen model and style table for the terminal host.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    styles: HashMap<(Element, StyleProperty), StyleValue>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            styles: HashMap::new(),
        }
    }

    /// Record a new terminal size. Styles are kept; the controller re-lays out.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Area above the timeline where frames would be drawn.
    pub fn video_rect(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows.saturating_sub(CHROME_ROWS))
    }

    pub fn status_row(&self) -> Option<u16> {
        self.rows.checked_sub(1)
    }

    /// The timeline strip, or `None` if the terminal is too small for one.
    pub fn timeline_rect(&self) -> Option<Rect> {
        let reserved = TIMELINE_START_COL + TIME_DISPLAY_WIDTH;
        let width = self.cols.saturating_sub(reserved);
        if width == 0 || self.rows < CHROME_ROWS + 1 {
            return None;
        }
        Some(Rect::new(TIMELINE_START_COL, self.rows - CHROME_ROWS, width, 1))
    }

    pub fn style(&self, element: Element, property: StyleProperty) -> Option<StyleValue> {
        self.styles.get(&(element, property)).copied()
    }

    fn percent(&self, element: Element, property: StyleProperty) -> Option<f64> {
        match self.style(element, property)? {
            StyleValue::Percent(percent) if percent.is_finite() => Some(percent.clamp(0.0, 100.0)),
            _ => None,
        }
    }

    fn pixels(&self, element: Element, property: StyleProperty) -> Option<f64> {
        match self.style(element, property)? {
            StyleValue::Pixels(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }

    /// Number of timeline cells covered by the filled-progress bar.
    pub fn filled_cells(&self) -> usize {
        let Some(timeline) = self.timeline_rect() else {
            return 0;
        };
        let percent = self
            .percent(Element::FilledProgress, StyleProperty::Width)
            .unwrap_or(0.0);
        (timeline.width as f64 * percent / 100.0) as usize
    }

    /// Column of the thumb, kept on the last timeline cell at 100%.
    pub fn thumb_column(&self) -> Option<u16> {
        let timeline = self.timeline_rect()?;
        let percent = self.percent(Element::Thumb, StyleProperty::Left)?;
        let geometry = TimelineGeometry::new(timeline.x as f64, timeline.width as f64);
        let column = fraction_to_x(&geometry, percent / 100.0) as u16;
        Some(column.min(timeline.x + timeline.width - 1))
    }

    /// Natural size of the preview box, from its width and aspect-ratio styles.
    fn preview_natural_size(&self) -> Option<(f64, f64)> {
        let width = self.pixels(Element::Preview, StyleProperty::Width)?.round();
        let ratio = match self.style(Element::Preview, StyleProperty::AspectRatio) {
            Some(StyleValue::Ratio(ratio)) if ratio > 0.0 => ratio,
            _ => 1.0,
        };
        if width < 1.0 {
            return None;
        }
        let height = (width / ratio / CELL_ASPECT).round().max(3.0);
        Some((width, height))
    }

    /// Where to draw the preview, if it is visible and fits on screen.
    pub fn preview_rect(&self) -> Option<Rect> {
        if self.style(Element::Preview, StyleProperty::Visibility) != Some(StyleValue::Visible) {
            return None;
        }
        let timeline = self.timeline_rect()?;
        let (width, height) = self.preview_natural_size()?;
        let left = self.pixels(Element::Preview, StyleProperty::Left)?;
        let top = self.pixels(Element::Preview, StyleProperty::Top)?;
        if top < 0.0 {
            return None;
        }

        let rect = Rect::new(
            timeline.x + left.max(0.0) as u16,
            top as u16,
            width as u16,
            height as u16,
        );
        Some(rect.intersection(self.video_rect())).filter(|r| !r.is_empty())
    }

    /// Most specific pointer target under a cell.
    pub fn hit_test(&self, column: u16, row: u16) -> PointerTarget {
        let Some(timeline) = self.timeline_rect() else {
            return PointerTarget::Document;
        };
        if row != timeline.y || column < timeline.x || column >= timeline.x + timeline.width {
            return PointerTarget::Document;
        }
        if self.thumb_column() == Some(column) {
            PointerTarget::Thumb
        } else {
            PointerTarget::Timeline
        }
    }
}

fn to_bounds(rect: Rect) -> BoundingBox {
    BoundingBox::new(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

impl Layout for TerminalSurface {
    fn bounding_box(&self, element: Element) -> Option<BoundingBox> {
        match element {
            Element::Timeline => self.timeline_rect().map(to_bounds),
            Element::FilledProgress => self
                .timeline_rect()
                .map(|t| to_bounds(Rect::new(t.x, t.y, self.filled_cells() as u16, 1))),
            Element::Thumb => {
                let row = self.timeline_rect()?.y;
                let column = self.thumb_column()?;
                Some(to_bounds(Rect::new(column, row, 1, 1)))
            }
            Element::Preview => {
                let (width, height) = self.preview_natural_size()?;
                let left = self.pixels(Element::Preview, StyleProperty::Left);
                let top = self.pixels(Element::Preview, StyleProperty::Top);
                Some(BoundingBox::new(left.unwrap_or(0.0), top.unwrap_or(0.0), width, height))
            }
        }
    }
}

impl StyleSink for TerminalSurface {
    fn set_style(&mut self, element: Element, property: StyleProperty, value: StyleValue) {
        self.styles.insert((element, property), value);
    }
}
