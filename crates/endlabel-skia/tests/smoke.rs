// File: crates/endlabel-skia/tests/smoke.rs
// Purpose: End-to-end raster render: PNG header, canvas size, painted connectors and labels.

use endlabel_core::{Chart, RenderOptions, Series};
use endlabel_skia::SkiaRenderer;

fn frame() -> endlabel_core::Frame {
    let chart = Chart::with_series(vec![
        Series::from_xy("a", &[(50.0, 300.0), (750.0, 230.0)]).expect("valid"),
        Series::from_xy("b", &[(50.0, 100.0), (750.0, 230.0)]).expect("valid"),
    ]);
    chart.render(&RenderOptions::default())
}

#[test]
fn render_png_bytes() {
    let bytes = SkiaRenderer::new().render_to_png_bytes(&frame()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (900, 400));

    // white background well away from any drawing
    assert_eq!(img.get_pixel(880, 380).0, [255, 255, 255, 255]);
    // first dash of the vertical leg of the bent connector (x = 815, y 230 -> 210)
    let painted = (225..=229).any(|y| img.get_pixel(815, y).0 != [255, 255, 255, 255]);
    assert!(painted, "connector leg should be painted");

    // label text starts at x = 835 with its baseline at assigned y + 5;
    // connectors end at x = 830, so anything here is glyph ink
    for (assigned_y, name) in [(230u32, "a"), (210u32, "b")] {
        let baseline = assigned_y + 5;
        let inked = (835..=845)
            .flat_map(|x| (baseline - 10..=baseline).map(move |y| (x, y)))
            .any(|(x, y)| img.get_pixel(x, y).0 != [255, 255, 255, 255]);
        assert!(inked, "label '{name}' should be painted at its anchor");
    }
}

#[test]
fn render_png_file() {
    let out = std::path::PathBuf::from("target/test_out/endlabel_smoke.png");
    SkiaRenderer::new().render_to_png(&frame(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
