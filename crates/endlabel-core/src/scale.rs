// File: crates/endlabel-core/src/scale.rs
// Summary: Linear domain -> pixel scale with "nice" tick generation.

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how the Y axis
/// places domain 0 at the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut s = Self { domain, range };
        if (s.domain.1 - s.domain.0).abs() < 1e-12 { s.domain.1 = s.domain.0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let t = (v - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span.abs() < 1e-12 {
            return self.domain.0;
        }
        let t = (px - self.range.0) / span;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Roughly `count` evenly spaced, human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            (self.domain.0, self.domain.1)
        } else {
            (self.domain.1, self.domain.0)
        };
        let step = tick_step(lo, hi, count);
        if !(step > 0.0) || !step.is_finite() {
            return vec![lo];
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Step between ticks: a power of ten times 1, 2 or 5.
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let raw = (hi - lo).abs() / count;
    if raw <= 0.0 {
        return 0.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Format a tick value without a trailing `.0` for integral values.
pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
