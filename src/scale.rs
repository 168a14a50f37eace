//! Coordinate mappings for the chart builders.
//!
//! A band scale maps each category to a contiguous `[start, start+width)`
//! interval with proportional padding; a point scale maps categories to
//! evenly spaced positions; a linear scale maps reals onto pixels and is
//! usually inverted for the y axis (domain max at the top of the canvas).

/// Categories -> padded contiguous intervals along an axis.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is the fraction of each step left empty, split between
    /// the outer edges and the gaps between bands.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        // equal inner and outer padding:
        // span = step * (n - padding + 2 * padding) = step * (n + padding)
        let step = if domain.is_empty() { 0.0 } else { span / (n + padding) };
        let bandwidth = step * (1.0 - padding);
        let start = range.0 + step * padding;
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the category's band, if the category is in the domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|c| c == category)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Categories -> evenly spaced positions spanning the range.
#[derive(Debug, Clone)]
pub struct PointScale {
    domain: Vec<String>,
    range: (f64, f64),
}

impl PointScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn position(&self, category: &str) -> Option<f64> {
        let i = self.domain.iter().position(|c| c == category)?;
        if self.domain.len() == 1 {
            return Some(self.range.0);
        }
        let step = (self.range.1 - self.range.0) / (self.domain.len() - 1) as f64;
        Some(self.range.0 + step * i as f64)
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Reals -> pixels. The range may be inverted (start > end) so larger
/// values land closer to the top of the canvas.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    /// Steps are 1/2/5 multiples of a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if lo == hi || count == 0 {
            return vec![lo];
        }
        let raw_step = (hi - lo) / count as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let residual = raw_step / magnitude;
        let step = if residual >= 5.0 {
            magnitude * 10.0
        } else if residual >= 2.0 {
            magnitude * 5.0
        } else if residual >= 1.0 {
            magnitude * 2.0
        } else {
            magnitude
        };

        let mut ticks = Vec::new();
        let mut t = (lo / step).ceil() * step;
        while t <= hi + step * 1e-9 {
            ticks.push(t);
            t += step;
        }
        ticks
    }
}
