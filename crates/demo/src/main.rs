// File: crates/demo/src/main.rs
// Summary: Demo renders the end-labelled line chart (built-in sample or CSV) to PNG and SVG.

mod sample;

use anyhow::{Context, Result};
use endlabel_core::{parse_csv, render_svg, theme, Chart, Frame, HoverController, Palette, RenderOptions, Tooltip};
use endlabel_skia::SkiaRenderer;
use std::path::{Path, PathBuf};

/// Prints tooltip requests; stands in for a host UI.
struct ConsoleTooltip;

impl Tooltip for ConsoleTooltip {
    fn show(&mut self, content: &str, x: f64, y: f64) {
        println!("  tooltip: show '{content}' at ({x:.0}, {y:.0})");
    }

    fn hide(&mut self) {
        println!("  tooltip: hide");
    }
}

fn main() -> Result<()> {
    // Args: [csv path | -] [theme name] [palette name]
    let input = std::env::args().nth(1).filter(|a| a != "-");
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "light".to_string());
    let palette = match std::env::args().nth(3) {
        Some(name) => Palette::from_name(&name).unwrap_or_else(|| {
            println!("Unknown palette '{name}', using alternating");
            Palette::Alternating
        }),
        None => Palette::Alternating,
    };

    let series = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            parse_csv(&text).with_context(|| format!("failed to parse '{}'", path.display()))?
        }
        None => sample::sample_series().context("built-in sample is invalid")?,
    };
    println!("Loaded {} series", series.len());

    let opts = RenderOptions { theme: theme::find(&theme_name), palette, ..RenderOptions::default() };
    let chart = Chart::with_series(series);
    let frame = chart.render(&opts);

    for label in &frame.labels {
        let s = &chart.series[label.series_index];
        let natural = s.endpoint().y;
        let mut note = if label.y == natural { "natural".to_string() } else { format!("moved from {natural}") };
        if label.is_above_canvas() {
            note.push_str(", above the canvas");
        }
        println!("  [{}] {:<10} label y={} ({note})", label.series_index, s.category(), label.y);
    }

    let stem = input
        .as_deref()
        .and_then(|p| Path::new(p).file_stem().and_then(|s| s.to_str()))
        .unwrap_or("sample");
    let out_png = out_name(stem, opts.theme.name, "png");
    SkiaRenderer::new()
        .render_to_png(&frame, &out_png)
        .with_context(|| format!("failed to write {}", out_png.display()))?;
    println!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    std::fs::write(&out_svg, render_svg(&frame))
        .with_context(|| format!("failed to write {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    simulate_hover(&frame);
    Ok(())
}

/// Sweep the pointer over every label, then off the chart.
fn simulate_hover(frame: &Frame) {
    println!("Hover sweep:");
    let mut hover = HoverController::new();
    let mut tooltip = ConsoleTooltip;
    for target in &frame.hover_targets {
        let b = target.label_box;
        hover.pointer_moved(&frame.hover_targets, b.left + 1.0, (b.top + b.bottom) * 0.5, &mut tooltip);
    }
    hover.pointer_left(&mut tooltip);
}

/// target/out/endlabel_<stem>_<theme>.<ext>
fn out_name(stem: &str, theme: &str, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("endlabel_{stem}_{theme}.{ext}"));
    out
}
