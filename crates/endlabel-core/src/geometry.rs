// File: crates/endlabel-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, segments, rects).

/// A point in pixel space. Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Straight line segment `(x1, y1) -> (x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        let len2 = dx * dx + dy * dy;
        if len2 <= f64::EPSILON {
            return (p.x - self.x1).hypot(p.y - self.y1);
        }
        let t = clamp(((p.x - self.x1) * dx + (p.y - self.y1) * dy) / len2, 0.0, 1.0);
        let cx = self.x1 + t * dx;
        let cy = self.y1 + t * dy;
        (p.x - cx).hypot(p.y - cy)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Minimum distance from `p` to an open polyline. `None` for fewer than two points.
pub fn polyline_distance(points: &[Point], p: Point) -> Option<f64> {
    points
        .windows(2)
        .map(|w| Segment::new(w[0].x, w[0].y, w[1].x, w[1].y).distance_to(p))
        .reduce(f64::min)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
