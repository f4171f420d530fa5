// File: crates/endlabel-core/src/series.rs
// Summary: Series model (ordered pixel-space points + category) and CSV loading.
// Notes:
// - A series' index is its position in the list handed to the chart; it is not
//   stored here so that reordering the list is the only way to change it.

use crate::error::{ChartError, Result};
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    category: String,
    points: Vec<Point>,
}

impl Series {
    /// Build a series, rejecting empty point lists and non-finite coordinates.
    pub fn try_new(category: impl Into<String>, points: Vec<Point>) -> Result<Self> {
        let category = category.into();
        if points.is_empty() {
            return Err(ChartError::EmptySeries { category });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ChartError::NonFiniteCoordinate { category, index });
        }
        Ok(Self { category, points })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(category: impl Into<String>, data: &[(f64, f64)]) -> Result<Self> {
        Self::try_new(category, data.iter().copied().map(Point::from).collect())
    }

    pub fn category(&self) -> &str { &self.category }

    pub fn points(&self) -> &[Point] { &self.points }

    /// Last point of the series; this is where the connector starts.
    pub fn endpoint(&self) -> Point {
        // try_new guarantees at least one point
        self.points[self.points.len() - 1]
    }
}

/// Parse `category,x,y` records into series, grouped by category in
/// first-appearance order. Header names are matched case-insensitively.
pub fn parse_csv(input: &str) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(&e))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let (i_cat, i_x, i_y) = match (idx(&["category", "series", "name"]), idx(&["x"]), idx(&["y"])) {
        (Some(c), Some(x), Some(y)) => (c, x, y),
        _ => {
            return Err(ChartError::Csv {
                line: 1,
                message: format!("expected category,x,y columns, found {headers:?}"),
            })
        }
    };

    let mut groups: Vec<(String, Vec<Point>)> = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_error(&e))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| rec.get(i).unwrap_or("");
        let num = |i: usize, name: &str| -> Result<f64> {
            field(i).parse::<f64>().map_err(|_| ChartError::Csv {
                line,
                message: format!("invalid {name} value '{}'", field(i)),
            })
        };

        let category = field(i_cat);
        let point = Point::new(num(i_x, "x")?, num(i_y, "y")?);
        match groups.iter_mut().find(|(c, _)| c == category) {
            Some((_, pts)) => pts.push(point),
            None => groups.push((category.to_string(), vec![point])),
        }
    }

    tracing::debug!(series = groups.len(), "parsed csv series");
    groups
        .into_iter()
        .map(|(category, points)| Series::try_new(category, points))
        .collect()
}

fn csv_error(e: &csv::Error) -> ChartError {
    ChartError::Csv {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    }
}
