// File: crates/endlabel-core/src/chart.rs
// Summary: Chart struct and the single render pass that turns series into a Frame.

use tracing::debug;

use crate::axis::Axis;
use crate::connector::ConnectorLayout;
use crate::draw::{DrawCommand, Layer, Stroke, TextAnchor};
use crate::placement::{LabelPlacer, PlacedLabel};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::theme::{Color, Palette, Theme};
use crate::tooltip::{estimate_label_box, HoverTarget};
use crate::types::{HEIGHT, PLOT_HEIGHT, PLOT_WIDTH, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// The plot occupies `[0, plot_width] x [0, plot_height]`; labels live to its right.
    pub plot_width: f64,
    pub plot_height: f64,
    pub placer: LabelPlacer,
    pub connector: ConnectorLayout,
    pub palette: Palette,
    pub theme: Theme,
    pub font_size: f64,
    pub line_width: f64,
    pub tick_count: usize,
    pub draw_axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            plot_width: PLOT_WIDTH,
            plot_height: PLOT_HEIGHT,
            placer: LabelPlacer::default(),
            connector: ConnectorLayout::default(),
            palette: Palette::Alternating,
            theme: Theme::light(),
            font_size: 12.0,
            line_width: 1.0,
            tick_count: 10,
            draw_axes: true,
        }
    }
}

impl RenderOptions {
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new((0.0, self.plot_width), (0.0, self.plot_width))
    }

    /// Inverted: domain 0 sits on the bottom edge.
    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new((0.0, self.plot_height), (self.plot_height, 0.0))
    }
}

/// Output of one render pass. Backends only ever read it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
    pub labels: Vec<PlacedLabel>,
    pub hover_targets: Vec<HoverTarget>,
}

impl Frame {
    pub fn series_commands(&self, index: usize) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.layer() == Layer::Series(index))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    pub fn with_series(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Lay out axes, lines, connectors and labels. Pure: the same chart and
    /// options always produce the same frame.
    pub fn render(&self, opts: &RenderOptions) -> Frame {
        debug!(series = self.series.len(), width = opts.width, height = opts.height, "render pass");

        let mut commands = Vec::new();
        if opts.draw_axes {
            let x_axis = Axis::bottom(opts.x_scale())
                .translated(0.0, opts.plot_height)
                .with_tick_count(opts.tick_count);
            let y_axis = Axis::left(opts.y_scale()).with_tick_count(opts.tick_count);
            commands.extend(x_axis.commands(&opts.theme, opts.font_size));
            commands.extend(y_axis.commands(&opts.theme, opts.font_size));
        }

        let plot_right = opts.plot_width;
        let labels = opts.placer.place_all(self.series.iter().map(|s| s.endpoint().y));
        let mut hover_targets = Vec::with_capacity(self.series.len());

        for (series, label) in self.series.iter().zip(&labels) {
            let index = label.series_index;
            let layer = Layer::Series(index);
            let color = opts.palette.color(index);

            if series.points().len() >= 2 {
                commands.push(DrawCommand::Path {
                    layer,
                    points: series.points().to_vec(),
                    stroke: Stroke::solid(color, opts.line_width),
                });
            }

            let connector = opts.connector.route(series.endpoint(), plot_right, label.y);
            for segment in &connector.segments {
                commands.push(DrawCommand::Line {
                    layer,
                    segment: *segment,
                    stroke: Stroke::dashed(color, opts.line_width),
                });
            }

            let anchor = opts.connector.label_anchor(plot_right, label.y);
            commands.push(DrawCommand::Text {
                layer,
                position: anchor,
                text: series.category().to_string(),
                color,
                size: opts.font_size,
                anchor: TextAnchor::Start,
            });

            hover_targets.push(HoverTarget {
                series_index: index,
                category: series.category().to_string(),
                line: series.points().to_vec(),
                connector: connector.segments,
                label_box: estimate_label_box(anchor, series.category(), opts.font_size),
            });
        }

        Frame {
            width: opts.width,
            height: opts.height,
            background: opts.theme.background,
            commands,
            labels,
            hover_targets,
        }
    }
}
