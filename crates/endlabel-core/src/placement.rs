// File: crates/endlabel-core/src/placement.rs
// Summary: Vertical collision avoidance for end-of-line labels.
//
// Labels are placed one series at a time, in index order. Each label starts at
// its line's endpoint Y and moves up (toward smaller Y) until it is at least
// `min_separation` away from every label placed earlier in the same pass.
// Displacement is unbounded: a dense cluster can push labels above the canvas.

use tracing::{trace, warn};

/// Default vertical gap between two label rows, in pixels.
pub const MIN_SEPARATION: f64 = 20.0;

/// How a colliding candidate row moves up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Displacement {
    /// Subtract `min_separation` from the candidate itself.
    #[default]
    Step,
    /// Jump to `min_separation` above the row that blocked the candidate.
    Snap,
}

/// Label row assigned to one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedLabel {
    pub series_index: usize,
    pub y: f64,
}

impl PlacedLabel {
    /// Row sits above the top edge of the canvas (negative Y).
    pub fn is_above_canvas(&self) -> bool {
        self.y < 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacer {
    pub min_separation: f64,
    pub displacement: Displacement,
}

impl Default for LabelPlacer {
    fn default() -> Self {
        Self { min_separation: MIN_SEPARATION, displacement: Displacement::Step }
    }
}

impl LabelPlacer {
    pub fn new(min_separation: f64) -> Self {
        Self { min_separation, ..Self::default() }
    }

    pub fn with_displacement(mut self, displacement: Displacement) -> Self {
        self.displacement = displacement;
        self
    }

    /// First row at or above `endpoint_y` that keeps `min_separation` from every
    /// row in `occupied`. The scan restarts after every move.
    pub fn place(&self, endpoint_y: f64, occupied: &[f64]) -> f64 {
        let sep = self.min_separation;
        let mut candidate = endpoint_y;
        loop {
            let Some(&blocker) = occupied.iter().find(|&&y| (y - candidate).abs() < sep) else {
                break;
            };
            let next = match self.displacement {
                Displacement::Step => candidate - sep,
                // `blocker - sep` can round back to within `sep` of the blocker;
                // fall back to a full step so the candidate always moves up.
                Displacement::Snap => {
                    let snapped = blocker - sep;
                    if snapped < candidate { snapped } else { candidate - sep }
                }
            };
            trace!(candidate, blocker, next, "label row taken, moving up");
            candidate = next;
        }
        candidate
    }

    /// Start an empty pass.
    pub fn begin(&self) -> Occupied {
        Occupied { placer: *self, rows: Vec::new() }
    }

    /// Place a full pass of endpoints, in order. Index `i` of the result
    /// belongs to the `i`-th endpoint.
    pub fn place_all<I>(&self, endpoints: I) -> Vec<PlacedLabel>
    where
        I: IntoIterator<Item = f64>,
    {
        let (labels, _) = endpoints.into_iter().enumerate().fold(
            (Vec::new(), self.begin()),
            |(mut labels, occupied), (series_index, endpoint_y)| {
                let (y, occupied) = occupied.place(endpoint_y);
                labels.push(PlacedLabel { series_index, y });
                (labels, occupied)
            },
        );
        labels
    }
}

/// Rows taken so far in one render pass. Threaded by value through the pass so
/// that no state outlives it.
#[derive(Clone, Debug, PartialEq)]
pub struct Occupied {
    placer: LabelPlacer,
    rows: Vec<f64>,
}

impl Occupied {
    pub fn rows(&self) -> &[f64] { &self.rows }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Rows assigned above the canvas top so far in this pass.
    pub fn above_canvas(&self) -> usize {
        self.rows.iter().filter(|&&y| y < 0.0).count()
    }

    /// Assign a row for `endpoint_y` and return it with the grown set.
    pub fn place(mut self, endpoint_y: f64) -> (f64, Occupied) {
        let y = self.placer.place(endpoint_y, &self.rows);
        // Library-side report only; a host sees it once it installs a subscriber.
        if y < 0.0 {
            warn!(endpoint_y, assigned_y = y, "label pushed above the canvas top");
        }
        self.rows.push(y);
        (y, self)
    }
}

/// Free-function form using the default separation and step displacement.
pub fn place(endpoint_y: f64, occupied: &[f64]) -> f64 {
    LabelPlacer::default().place(endpoint_y, occupied)
}
