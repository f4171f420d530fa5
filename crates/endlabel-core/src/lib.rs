// File: crates/endlabel-core/src/lib.rs
// Summary: Core library entry point; end-of-line label placement, connector routing
// and backend-agnostic chart frames.

pub mod axis;
pub mod chart;
pub mod connector;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use chart::{Chart, Frame, RenderOptions};
pub use connector::{Connector, ConnectorLayout};
pub use draw::{DrawCommand, Layer, Stroke, TextAnchor};
pub use error::ChartError;
pub use geometry::{Point, Rect, Segment};
pub use placement::{Displacement, LabelPlacer, Occupied, PlacedLabel, MIN_SEPARATION};
pub use scale::LinearScale;
pub use series::{parse_csv, Series};
pub use svg::render_svg;
pub use theme::{Color, Palette, Theme};
pub use tooltip::{HoverController, HoverTarget, Tooltip};
