// File: crates/endlabel-core/src/axis.rs
// Summary: Bottom/left axis model that expands into tick and label draw commands.

use crate::draw::{DrawCommand, Layer, Stroke, TextAnchor};
use crate::geometry::{Point, Segment};
use crate::scale::{format_tick, LinearScale};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Ticks point down, labels below.
    Bottom,
    /// Ticks point left, labels to the left.
    Left,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    /// Offset applied to the whole axis (x, y).
    pub translate: (f64, f64),
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orient: AxisOrient, scale: LinearScale) -> Self {
        Self { orient, scale, translate: (0.0, 0.0), tick_count: 10, tick_size: 6.0, tick_padding: 3.0 }
    }

    pub fn bottom(scale: LinearScale) -> Self { Self::new(AxisOrient::Bottom, scale) }

    pub fn left(scale: LinearScale) -> Self { Self::new(AxisOrient::Left, scale) }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate = (x, y);
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Domain line, one tick mark per tick value and its label.
    pub fn commands(&self, theme: &Theme, font_size: f64) -> Vec<DrawCommand> {
        let (tx, ty) = self.translate;
        let stroke = Stroke::solid(theme.axis_line, 1.0);
        let (r0, r1) = self.scale.range;
        let ticks = self.scale.ticks(self.tick_count);
        let mut out = Vec::with_capacity(1 + ticks.len() * 2);

        let domain = match self.orient {
            AxisOrient::Bottom => Segment::new(tx + r0, ty, tx + r1, ty),
            AxisOrient::Left => Segment::new(tx, ty + r0, tx, ty + r1),
        };
        out.push(DrawCommand::Line { layer: Layer::Axis, segment: domain, stroke: stroke.clone() });

        let reach = self.tick_size + self.tick_padding;
        for v in ticks {
            let p = self.scale.to_px(v);
            let (mark, position, anchor) = match self.orient {
                AxisOrient::Bottom => (
                    Segment::new(tx + p, ty, tx + p, ty + self.tick_size),
                    // 0.71em drops the text below the tick
                    Point::new(tx + p, ty + reach + font_size * 0.71),
                    TextAnchor::Middle,
                ),
                AxisOrient::Left => (
                    Segment::new(tx - self.tick_size, ty + p, tx, ty + p),
                    // 0.32em centers the text on the tick
                    Point::new(tx - reach, ty + p + font_size * 0.32),
                    TextAnchor::End,
                ),
            };
            out.push(DrawCommand::Line { layer: Layer::Axis, segment: mark, stroke: stroke.clone() });
            out.push(DrawCommand::Text {
                layer: Layer::Axis,
                position,
                text: format_tick(v),
                color: theme.axis_label,
                size: font_size,
                anchor,
            });
        }
        out
    }
}
