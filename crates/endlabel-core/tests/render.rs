// File: crates/endlabel-core/tests/render.rs
// Purpose: End-to-end render pass: commands per series, axes, colors, degenerate inputs.

use endlabel_core::{
    Chart, Color, DrawCommand, Layer, Palette, Point, RenderOptions, Segment, Series,
};

fn line(category: &str, end_y: f64) -> Series {
    Series::from_xy(category, &[(100.0, 300.0), (400.0, 200.0), (750.0, end_y)]).expect("valid series")
}

fn connector_segments(cmds: &[&DrawCommand]) -> Vec<Segment> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Line { segment, stroke, .. } => {
                assert!(stroke.dash.is_some(), "connectors are dashed");
                Some(*segment)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn two_series_sharing_an_endpoint() {
    let chart = Chart::with_series(vec![line("a", 230.0), line("b", 230.0)]);
    let frame = chart.render(&RenderOptions::default());

    assert_eq!(frame.labels.len(), 2);
    assert_eq!(frame.labels[0].y, 230.0);
    assert_eq!(frame.labels[1].y, 210.0);

    let first: Vec<_> = frame.series_commands(0).collect();
    let second: Vec<_> = frame.series_commands(1).collect();
    assert_eq!(connector_segments(&first).len(), 1);
    let bent = connector_segments(&second);
    assert_eq!(bent.len(), 3);
    assert_eq!((bent[1].y1, bent[1].y2), (230.0, 210.0));
}

#[test]
fn series_draw_path_connector_then_label() {
    let chart = Chart::with_series(vec![line("only", 120.0)]);
    let frame = chart.render(&RenderOptions::default());
    let cmds: Vec<_> = frame.series_commands(0).collect();
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[0], DrawCommand::Path { points, .. } if points.len() == 3));
    assert!(matches!(cmds[1], DrawCommand::Line { .. }));
    match cmds[2] {
        DrawCommand::Text { position, text, .. } => {
            assert_eq!(*position, Point::new(835.0, 125.0));
            assert_eq!(text, "only");
        }
        other => panic!("expected label text, got {other:?}"),
    }
}

#[test]
fn colors_alternate_by_index() {
    let chart = Chart::with_series(vec![line("a", 50.0), line("b", 150.0), line("c", 250.0)]);
    let frame = chart.render(&RenderOptions::default());
    let color_of = |i: usize| {
        frame
            .series_commands(i)
            .find_map(|c| match c {
                DrawCommand::Text { color, .. } => Some(*color),
                _ => None,
            })
            .expect("label present")
    };
    assert_eq!(color_of(0), Color::BLUE);
    assert_eq!(color_of(1), Color::RED);
    assert_eq!(color_of(2), Color::BLUE);
}

#[test]
fn categorical_palette_is_a_function_of_index() {
    let p = Palette::Category10;
    assert_eq!(p.color(0), p.color(10));
    assert_ne!(p.color(0), p.color(1));
}

#[test]
fn palettes_resolve_by_name() {
    assert_eq!(Palette::from_name("Category10"), Some(Palette::Category10));
    assert_eq!(Palette::from_name("categorical"), Some(Palette::Category10));
    assert_eq!(Palette::from_name("two-tone"), Some(Palette::Alternating));
    assert_eq!(Palette::from_name("viridis"), None);
}

#[test]
fn single_point_series_still_gets_connector_and_label() {
    let chart = Chart::with_series(vec![Series::from_xy("dot", &[(790.0, 60.0)]).expect("valid")]);
    let frame = chart.render(&RenderOptions::default());
    let cmds: Vec<_> = frame.series_commands(0).collect();
    assert!(!cmds.iter().any(|c| matches!(c, DrawCommand::Path { .. })));
    assert_eq!(connector_segments(&cmds), vec![Segment::new(800.0, 60.0, 830.0, 60.0)]);
    assert!(cmds.iter().any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "dot")));
}

#[test]
fn empty_chart_renders_only_axes() {
    let frame = Chart::new().render(&RenderOptions::default());
    assert!(frame.labels.is_empty());
    assert!(frame.hover_targets.is_empty());
    assert!(!frame.commands.is_empty());
    assert!(frame.commands.iter().all(|c| c.layer() == Layer::Axis));
    assert_eq!((frame.width, frame.height), (900, 400));
}

#[test]
fn axes_cover_plot_ranges() {
    let frame = Chart::new().render(&RenderOptions::default());
    let texts: Vec<(&str, Point)> = frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
        .collect();
    // X axis: 0..800 every 100, on the bottom edge
    let x800 = texts.iter().find(|(t, p)| *t == "800" && p.x == 800.0);
    assert!(x800.is_some_and(|(_, p)| p.y > 400.0));
    // Y axis is inverted: value 400 at the top, 0 at the bottom
    let y400 = texts.iter().find(|(t, p)| *t == "400" && p.x < 0.0).expect("y tick 400");
    let y0 = texts.iter().find(|(t, p)| *t == "0" && p.x < 0.0).expect("y tick 0");
    assert!(y400.1.y < y0.1.y);
}

#[test]
fn axes_can_be_disabled() {
    let opts = RenderOptions { draw_axes: false, ..RenderOptions::default() };
    assert!(Chart::new().render(&opts).commands.is_empty());
}

#[test]
fn rendering_is_idempotent() {
    let chart = Chart::with_series(vec![line("a", 100.0), line("b", 105.0), line("c", 110.0)]);
    let opts = RenderOptions::default();
    assert_eq!(chart.render(&opts), chart.render(&opts));
}

#[test]
fn invalid_series_are_rejected() {
    assert!(Series::try_new("empty", Vec::new()).is_err());
    let err = Series::from_xy("nan", &[(0.0, 1.0), (f64::NAN, 2.0)]).unwrap_err();
    assert!(err.to_string().contains("point 1"));
}
