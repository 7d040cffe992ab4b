//! Axis scales mapping domain values to pixel coordinates.
//!
//! All scales are immutable once built. Rounding follows JavaScript's
//! `Math.round` (half toward +∞) so coordinates match the browser charts the
//! layouts were designed against.

use std::collections::HashSet;
use std::hash::Hash;

/// `Math.round` semantics: halves round toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Discrete domain mapped to equal-width, pixel-rounded bands.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    start: f64,
    step: f64,
}

impl<T: Copy + Eq + Hash> BandScale<T> {
    /// `align` in `[0, 1]` places the leftover (from flooring the step) before
    /// the first band (`1`) or after the last one (`0`).
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64), align: f64) -> Self {
        let mut seen = HashSet::new();
        let domain: Vec<T> = domain.into_iter().filter(|v| seen.insert(*v)).collect();

        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = ((r1 - r0) / n.max(1.0)).floor();
        let start = round_half_up(r0 + (r1 - r0 - step * n) * align.clamp(0.0, 1.0));

        Self {
            domain,
            range,
            start,
            step,
        }
    }

    pub fn position(&self, value: T) -> Option<f64> {
        self.domain
            .iter()
            .position(|v| *v == value)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Range length shared equally by every domain value (unrounded).
    pub fn even_share(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    /// Pixel span actually covered by bands: `[start, start + step * n]`.
    pub fn extent(&self) -> (f64, f64) {
        (self.start, self.start + self.step * self.domain.len() as f64)
    }
}

/// Continuous domain mapped by linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps everything to the middle of the range.
    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Roughly `count` human-friendly tick values inside the domain, stepping
    /// by 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let raw_step = (stop - start) / count as f64;
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let mut ticks = Vec::new();
        if power < 0.0 {
            // invert to keep tick values exact for fractional steps
            let inc = 10f64.powf(-power) / factor;
            let mut i1 = (start * inc).round();
            let mut i2 = (stop * inc).round();
            if i1 / inc < start {
                i1 += 1.0;
            }
            if i2 / inc > stop {
                i2 -= 1.0;
            }
            let mut i = i1;
            while i <= i2 {
                ticks.push(i / inc);
                i += 1.0;
            }
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut i1 = (start / inc).round();
            let mut i2 = (stop / inc).round();
            if i1 * inc < start {
                i1 += 1.0;
            }
            if i2 * inc > stop {
                i2 -= 1.0;
            }
            let mut i = i1;
            while i <= i2 {
                ticks.push(i * inc);
                i += 1.0;
            }
        }

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Explicit pairing of discrete domain values with pixel positions.
#[derive(Debug, Clone)]
pub struct OrdinalScale<T> {
    domain: Vec<T>,
    range: Vec<f64>,
}

impl<T: Copy + PartialEq> OrdinalScale<T> {
    /// Pairs are formed positionally; the longer side is truncated.
    pub fn new(domain: Vec<T>, range: Vec<f64>) -> Self {
        let len = domain.len().min(range.len());
        let mut domain = domain;
        let mut range = range;
        domain.truncate(len);
        range.truncate(len);
        Self { domain, range }
    }

    pub fn position(&self, value: T) -> Option<f64> {
        self.domain
            .iter()
            .position(|v| *v == value)
            .map(|i| self.range[i])
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> &[f64] {
        &self.range
    }
}
