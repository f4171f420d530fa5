// File: crates/endlabel-core/src/connector.rs
// Summary: Routes the dashed connector from a line's endpoint to its label row.

use crate::geometry::{Point, Segment};

/// Horizontal offsets (from the plot's right edge) that shape a connector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorLayout {
    /// X offset of the vertical leg of a bent connector.
    pub elbow: f64,
    /// X offset where every connector ends.
    pub reach: f64,
    /// X offset of the label text.
    pub label_gap: f64,
    /// Added to the label row to get the text baseline.
    pub baseline_shift: f64,
}

impl Default for ConnectorLayout {
    fn default() -> Self {
        Self { elbow: 15.0, reach: 30.0, label_gap: 35.0, baseline_shift: 5.0 }
    }
}

/// Segments of one connector, in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    pub segments: Vec<Segment>,
}

impl Connector {
    pub fn is_bent(&self) -> bool { self.segments.len() > 1 }
}

impl ConnectorLayout {
    /// Straight connector when the label kept its natural row, otherwise a
    /// horizontal-vertical-horizontal dogleg. No collision checks happen here.
    pub fn route(&self, endpoint: Point, plot_right: f64, assigned_y: f64) -> Connector {
        let ey = endpoint.y;
        let segments = if ey == assigned_y {
            vec![Segment::new(plot_right, ey, plot_right + self.reach, ey)]
        } else {
            let elbow_x = plot_right + self.elbow;
            vec![
                Segment::new(plot_right, ey, elbow_x, ey),
                Segment::new(elbow_x, ey, elbow_x, assigned_y),
                Segment::new(elbow_x, assigned_y, plot_right + self.reach, assigned_y),
            ]
        };
        Connector { segments }
    }

    /// Where the label text starts (left edge, baseline).
    pub fn label_anchor(&self, plot_right: f64, assigned_y: f64) -> Point {
        Point::new(plot_right + self.label_gap, assigned_y + self.baseline_shift)
    }
}

/// Route with the default layout.
pub fn route(endpoint: Point, plot_right: f64, assigned_y: f64) -> Connector {
    ConnectorLayout::default().route(endpoint, plot_right, assigned_y)
}
