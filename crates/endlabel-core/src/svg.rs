// File: crates/endlabel-core/src/svg.rs
// Summary: Serializes a Frame into a standalone SVG document.

use std::fmt::{self, Write};

use crate::chart::Frame;
use crate::draw::{DrawCommand, Layer, Stroke};
use crate::theme::Color;

/// Render `frame` to an SVG string.
pub fn render_svg(frame: &Frame) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_svg(&mut out, frame);
    out
}

/// Stream `frame` as SVG. Consecutive commands of the same layer share one
/// `<g>`; series groups carry a `<title>` with the category for native hover.
pub fn write_svg<W: Write>(out: &mut W, frame: &Frame) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.width,
        h = frame.height
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, frame.background.to_hex())?;

    let mut open: Option<Layer> = None;
    for cmd in &frame.commands {
        let layer = cmd.layer();
        if open != Some(layer) {
            if open.is_some() {
                writeln!(out, "</g>")?;
            }
            open_group(out, frame, layer)?;
            open = Some(layer);
        }
        write_command(out, cmd)?;
    }
    if open.is_some() {
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</svg>")
}

fn open_group<W: Write>(out: &mut W, frame: &Frame, layer: Layer) -> fmt::Result {
    match layer {
        Layer::Axis => writeln!(out, r#"<g class="axis">"#),
        Layer::Series(i) => {
            writeln!(out, r#"<g class="series" data-series="{i}">"#)?;
            if let Some(t) = frame.hover_targets.iter().find(|t| t.series_index == i) {
                writeln!(out, "<title>{}</title>", escape_xml(&t.category))?;
            }
            Ok(())
        }
    }
}

fn write_command<W: Write>(out: &mut W, cmd: &DrawCommand) -> fmt::Result {
    match cmd {
        DrawCommand::Path { points, stroke, .. } => {
            let mut d = String::new();
            for (i, p) in points.iter().enumerate() {
                let op = if i == 0 { 'M' } else { 'L' };
                write!(d, "{op}{},{}", fmt_num(p.x), fmt_num(p.y))?;
            }
            writeln!(out, r#"<path d="{d}" fill="none"{}/>"#, stroke_attrs(stroke))
        }
        DrawCommand::Line { segment, stroke, .. } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            fmt_num(segment.x1),
            fmt_num(segment.y1),
            fmt_num(segment.x2),
            fmt_num(segment.y2),
            stroke_attrs(stroke)
        ),
        DrawCommand::Text { position, text, color, size, anchor, .. } => writeln!(
            out,
            r#"<text x="{}" y="{}" fill="{}"{} font-size="{}" text-anchor="{}">{}</text>"#,
            fmt_num(position.x),
            fmt_num(position.y),
            color.to_hex(),
            opacity_attr("fill-opacity", *color),
            fmt_num(*size),
            anchor.as_svg(),
            escape_xml(text)
        ),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(
        r#" stroke="{}"{} stroke-width="{}""#,
        stroke.color.to_hex(),
        opacity_attr("stroke-opacity", stroke.color),
        fmt_num(stroke.width)
    );
    if let Some([on, off]) = stroke.dash {
        s.push_str(&format!(r#" stroke-dasharray="{},{}""#, fmt_num(on), fmt_num(off)));
    }
    s
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, fmt_num(color.a as f64 / 255.0))
    }
}

/// Shortest decimal form with at most three fractional digits.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// XML 1.0 valid char ranges:
/// - 0x09, 0x0A, 0x0D
/// - 0x20..=0xD7FF
/// - 0xE000..=0xFFFD
/// - 0x10000..=0x10FFFF
fn is_valid_xml_char(c: char) -> bool {
    matches!(
        c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| is_valid_xml_char(c)) {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
