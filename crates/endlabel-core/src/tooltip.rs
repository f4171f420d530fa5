// File: crates/endlabel-core/src/tooltip.rs
// Summary: Tooltip collaborator trait and hover hit-testing over rendered series.

use crate::geometry::{polyline_distance, Point, Rect, Segment};

/// Whatever the host uses to display a tooltip. The chart never owns its state.
pub trait Tooltip {
    fn show(&mut self, content: &str, x: f64, y: f64);
    fn hide(&mut self);
}

/// Hoverable geometry of one series: its line, connector and label box.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub series_index: usize,
    pub category: String,
    pub line: Vec<Point>,
    pub connector: Vec<Segment>,
    pub label_box: Rect,
}

impl HoverTarget {
    /// Whether `p` is within `tolerance` pixels of the line or connector, or
    /// inside the label box.
    pub fn hit(&self, p: Point, tolerance: f64) -> bool {
        if self.label_box.contains(p) {
            return true;
        }
        if polyline_distance(&self.line, p).is_some_and(|d| d <= tolerance) {
            return true;
        }
        self.connector.iter().any(|s| s.distance_to(p) <= tolerance)
    }
}

/// Rough bounding box of a label starting at `anchor` (left, baseline).
pub fn estimate_label_box(anchor: Point, text: &str, font_size: f64) -> Rect {
    let width = text.chars().count() as f64 * font_size * 0.6;
    Rect::from_ltrb(anchor.x, anchor.y - font_size, anchor.x + width, anchor.y + font_size * 0.25)
}

/// Turns pointer events into tooltip show/hide requests.
///
/// Holds only which series is hovered; feeding the same event twice gives the
/// same tooltip calls.
#[derive(Clone, Debug)]
pub struct HoverController {
    active: Option<usize>,
    pub offset: (f64, f64),
    pub tolerance: f64,
}

impl Default for HoverController {
    fn default() -> Self {
        Self { active: None, offset: (10.0, -10.0), tolerance: 4.0 }
    }
}

impl HoverController {
    pub fn new() -> Self { Self::default() }

    pub fn active(&self) -> Option<usize> { self.active }

    /// Pointer moved to `(x, y)`. Later targets win on overlap since they are
    /// drawn on top.
    pub fn pointer_moved<T: Tooltip + ?Sized>(
        &mut self,
        targets: &[HoverTarget],
        x: f64,
        y: f64,
        tooltip: &mut T,
    ) -> Option<usize> {
        let p = Point::new(x, y);
        let hit = targets.iter().rev().find(|t| t.hit(p, self.tolerance));
        match hit {
            Some(target) => {
                if self.active.is_some_and(|i| i != target.series_index) {
                    tooltip.hide();
                }
                tooltip.show(&target.category, x + self.offset.0, y + self.offset.1);
                self.active = Some(target.series_index);
            }
            None => self.pointer_left(tooltip),
        }
        self.active
    }

    /// Pointer left the chart surface.
    pub fn pointer_left<T: Tooltip + ?Sized>(&mut self, tooltip: &mut T) {
        if self.active.take().is_some() {
            tooltip.hide();
        }
    }
}
