// File: crates/endlabel-core/src/draw.rs
// Summary: Backend-agnostic draw commands emitted by a render pass.

use crate::geometry::{Point, Segment};
use crate::theme::Color;

/// Dash pattern used for connectors: 5 on, 5 off.
pub const CONNECTOR_DASH: [f64; 2] = [5.0, 5.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self { color, width, dash: Some(CONNECTOR_DASH) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// What a group of commands belongs to. Backends may use it for grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Axis,
    Series(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Open polyline, never filled.
    Path { layer: Layer, points: Vec<Point>, stroke: Stroke },
    Line { layer: Layer, segment: Segment, stroke: Stroke },
    /// `position` is the baseline point the anchor refers to.
    Text {
        layer: Layer,
        position: Point,
        text: String,
        color: Color,
        size: f64,
        anchor: TextAnchor,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::Path { layer, .. }
            | DrawCommand::Line { layer, .. }
            | DrawCommand::Text { layer, .. } => *layer,
        }
    }
}
