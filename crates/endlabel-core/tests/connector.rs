// File: crates/endlabel-core/tests/connector.rs
// Purpose: Connector geometry for straight and bent (dogleg) cases.

use endlabel_core::connector::{self, ConnectorLayout};
use endlabel_core::{Point, Segment};
use proptest::prelude::*;

#[test]
fn natural_row_gives_single_straight_segment() {
    let c = connector::route(Point::new(731.0, 239.0), 800.0, 239.0);
    assert!(!c.is_bent());
    assert_eq!(c.segments, vec![Segment::new(800.0, 239.0, 830.0, 239.0)]);
}

#[test]
fn moved_row_gives_dogleg() {
    let c = connector::route(Point::new(700.0, 230.0), 800.0, 210.0);
    assert!(c.is_bent());
    assert_eq!(
        c.segments,
        vec![
            Segment::new(800.0, 230.0, 815.0, 230.0),
            Segment::new(815.0, 230.0, 815.0, 210.0),
            Segment::new(815.0, 210.0, 830.0, 210.0),
        ]
    );
    assert!(c.segments[0].is_horizontal());
    assert!(c.segments[1].is_vertical());
    assert!(c.segments[2].is_horizontal());
}

#[test]
fn connector_starts_at_plot_edge_not_endpoint_x() {
    let c = connector::route(Point::new(12.0, 50.0), 800.0, 50.0);
    assert_eq!(c.segments[0].start(), Point::new(800.0, 50.0));
}

#[test]
fn label_anchor_sits_right_of_connector() {
    let layout = ConnectorLayout::default();
    assert_eq!(layout.label_anchor(800.0, 210.0), Point::new(835.0, 215.0));
}

#[test]
fn custom_layout_keeps_reach_consistent() {
    let layout = ConnectorLayout { reach: 27.0, ..ConnectorLayout::default() };
    let straight = layout.route(Point::new(0.0, 10.0), 100.0, 10.0);
    let bent = layout.route(Point::new(0.0, 10.0), 100.0, -10.0);
    assert_eq!(straight.segments[0].x2, 127.0);
    assert_eq!(bent.segments[2].x2, 127.0);
}

proptest! {
    #[test]
    fn segment_count_tracks_bend(ey in -500.0f64..500.0, ay in -500.0f64..500.0, same in any::<bool>()) {
        let ay = if same { ey } else { ay };
        let c = connector::route(Point::new(700.0, ey), 800.0, ay);
        if ay == ey {
            prop_assert_eq!(c.segments.len(), 1);
        } else {
            prop_assert_eq!(c.segments.len(), 3);
            prop_assert_eq!(c.segments[1].y1, ey);
            prop_assert_eq!(c.segments[1].y2, ay);
        }
        // chained: each segment starts where the previous one ended
        for w in c.segments.windows(2) {
            prop_assert_eq!(w[0].end(), w[1].start());
        }
    }
}
