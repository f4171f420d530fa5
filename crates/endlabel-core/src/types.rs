// File: crates/endlabel-core/src/types.rs
// Summary: Shared constants (canvas and plot sizes).

/// Default canvas width in pixels; the strip right of the plot holds the labels.
pub const WIDTH: u32 = 900;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Default plot width; also the X axis pixel range `[0, PLOT_WIDTH]`.
pub const PLOT_WIDTH: f64 = 800.0;
/// Default plot height; also the Y axis pixel range `[0, PLOT_HEIGHT]`.
pub const PLOT_HEIGHT: f64 = 400.0;
