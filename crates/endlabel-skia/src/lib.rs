// File: crates/endlabel-skia/src/lib.rs
// Summary: Paints an endlabel-core Frame onto a Skia CPU raster surface and encodes PNG.

use anyhow::Result;
use endlabel_core::{Color, DrawCommand, Frame, Stroke, TextAnchor};
use skia_safe as skia;

pub mod text;

pub use text::TextShaper;

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    /// Labels are shaped with the system font collection, falling back per
    /// character to whatever installed family covers it.
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render the frame to PNG bytes.
    pub fn render_to_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((frame.width as i32, frame.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", frame.width, frame.height))?;
        tracing::debug!(commands = frame.commands.len(), width = frame.width, height = frame.height, "painting frame");
        self.paint(surface.canvas(), frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG file at `output_png_path`.
    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Replay every draw command onto `canvas`, in order.
    pub fn paint(&self, canvas: &skia::Canvas, frame: &Frame) {
        canvas.clear(to_skia(frame.background));
        for cmd in &frame.commands {
            match cmd {
                DrawCommand::Path { points, stroke, .. } => {
                    let Some((first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to((first.x as f32, first.y as f32));
                    for p in rest {
                        path.line_to((p.x as f32, p.y as f32));
                    }
                    canvas.draw_path(&path, &stroke_paint(stroke));
                }
                DrawCommand::Line { segment, stroke, .. } => {
                    canvas.draw_line(
                        (segment.x1 as f32, segment.y1 as f32),
                        (segment.x2 as f32, segment.y2 as f32),
                        &stroke_paint(stroke),
                    );
                }
                DrawCommand::Text { position, text, color, size, anchor, .. } => {
                    let size = *size as f32;
                    let x = match anchor {
                        TextAnchor::Start => position.x as f32,
                        TextAnchor::Middle => position.x as f32 - self.shaper.measure_width(text, size) * 0.5,
                        TextAnchor::End => position.x as f32 - self.shaper.measure_width(text, size),
                    };
                    self.shaper.draw_left(canvas, text, x, position.y as f32, size, to_skia(*color));
                }
            }
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia(stroke.color));
    if let Some([on, off]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}
