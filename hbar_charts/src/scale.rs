// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value → pixel scales.
//!
//! Both chart layouts map percent values onto the horizontal extent of the plot with a
//! [`ScaleLinear`]. The bar chart derives its domain from the data (rounded outward to a
//! multiple of a rounding factor, always containing zero); the interval chart uses the
//! fixed [`INTERVAL_DOMAIN`] so small estimates stay comparable across renders.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::data::{Dataset, Record};

/// The fixed domain of the interval chart, in percent units.
pub const INTERVAL_DOMAIN: (f64, f64) = (0.0, 1.5);

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice” tick values (1, 2 or 5 × 10ⁿ steps) that lie inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let (ticks, step) = nice_ticks(lo, hi, count);
        let eps = step.abs() * 1e-9;
        ticks
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .collect()
    }
}

/// Builds the data-driven scale of the bar chart.
///
/// The domain is `[floor(min / f) * f, ceil(max / f) * f]` for rounding factor `f`,
/// widened to contain zero so bars can grow in either direction from a zero baseline.
/// The range is `[0, chart_width]`.
pub fn build_scale(
    data: &Dataset,
    value: impl Fn(&Record) -> f64,
    chart_width: f64,
    rounding_factor: f64,
) -> ScaleLinear {
    let domain = rounded_domain(data.iter().map(value), rounding_factor);
    ScaleLinear::new(domain, (0.0, chart_width))
}

/// Computes the rounded, zero-including domain of `values`.
///
/// Non-finite values are ignored; with no finite values the domain is `[0, 0]`. A
/// rounding factor that is not a positive finite number leaves the extremes unrounded.
pub fn rounded_domain(values: impl IntoIterator<Item = f64>, rounding_factor: f64) -> (f64, f64) {
    let round = rounding_factor.is_finite() && rounding_factor > 0.0;
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        let (lo, hi) = if round {
            (
                (v / rounding_factor).floor() * rounding_factor,
                (v / rounding_factor).ceil() * rounding_factor,
            )
        } else {
            (v, v)
        };
        min = min.min(lo);
        max = max.max(hi);
    }
    (min, max)
}

/// Returns ticks covering `[min, max]` (possibly extending one step past either end) and
/// the step between them.
fn nice_ticks(min: f64, max: f64, count: usize) -> (Vec<f64>, f64) {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return (Vec::new(), 0.0);
    }
    if min == max {
        return (alloc::vec![min], 0.0);
    }
    let span = max - min;
    let step = nice_step(span / count as f64);
    if step == 0.0 {
        return (alloc::vec![min, max], 0.0);
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    // Multiplying the index avoids accumulating error; snap tiny residues like 1e-17 to 0.
    let ticks = (0..=n)
        .map(|i| {
            let t = start + step * i as f64;
            if t.abs() < step * 1e-9 { 0.0 } else { t }
        })
        .collect();
    (ticks, step)
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    // Same cut-offs as d3's linear ticks, so gridlines match the published graphics.
    let error = step / base;
    let nice = if error >= 20.0 / 3.0 {
        10.0
    } else if error >= 20.0 / 7.0 {
        5.0
    } else if error >= 4.0 / 3.0 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    use alloc::vec;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rounds_outward_and_keeps_zero() {
        let data = Dataset::new(vec![Record::new("A", -5.0), Record::new("B", 10.0)]);
        let s = build_scale(&data, |r| r.value, 300.0, 5.0);
        assert_eq!(s.domain_min(), -5.0);
        assert_eq!(s.domain_max(), 10.0);
        assert!(close(s.map(-5.0), 0.0));
        assert!(close(s.map(0.0), 100.0));
        assert!(close(s.map(10.0), 300.0));
    }

    #[test]
    fn positive_data_forces_zero_minimum() {
        let data = Dataset::new(vec![Record::new("A", 12.0), Record::new("B", 31.0)]);
        let s = build_scale(&data, |r| r.value, 100.0, 5.0);
        assert_eq!(s.domain_min(), 0.0);
        assert_eq!(s.domain_max(), 35.0);
    }

    #[test]
    fn negative_data_keeps_zero_maximum() {
        let data = Dataset::new(vec![Record::new("A", -12.0), Record::new("B", -3.0)]);
        let s = build_scale(&data, |r| r.value, 100.0, 5.0);
        assert_eq!(s.domain_min(), -15.0);
        assert_eq!(s.domain_max(), 0.0);
        assert!(close(s.map(0.0), 100.0));
    }

    #[test]
    fn empty_and_all_zero_data_give_degenerate_domain() {
        let s = build_scale(&Dataset::default(), |r| r.value, 100.0, 5.0);
        assert_eq!((s.domain_min(), s.domain_max()), (0.0, 0.0));
        assert_eq!(s.map(0.0), 0.0);

        let zeros = Dataset::new(vec![Record::new("A", 0.0)]);
        let s = build_scale(&zeros, |r| r.value, 100.0, 5.0);
        assert_eq!((s.domain_min(), s.domain_max()), (0.0, 0.0));
    }

    #[test]
    fn invalid_rounding_factor_uses_raw_extremes() {
        assert_eq!(rounded_domain([-3.2, 7.9], 0.0), (-3.2, 7.9));
        assert_eq!(rounded_domain([-3.2, 7.9], f64::NAN), (-3.2, 7.9));
        assert_eq!(rounded_domain([1.0, f64::NAN, 4.0], 2.0), (0.0, 4.0));
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let s = ScaleLinear::new((-5.0, 10.0), (0.0, 300.0));
        assert_eq!(s.ticks(4), vec![-5.0, 0.0, 5.0, 10.0]);

        let s = ScaleLinear::new(INTERVAL_DOMAIN, (0.0, 300.0));
        assert_eq!(s.ticks(4), vec![0.0, 0.5, 1.0, 1.5]);

        let s = ScaleLinear::new((0.0, 35.0), (0.0, 300.0));
        assert_eq!(s.ticks(4), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn tick_steps_widen_like_d3() {
        // 55 / 4 = 13.75 per tick: ratio 1.375 rounds up to a step of 20.
        let s = ScaleLinear::new((0.0, 55.0), (0.0, 600.0));
        assert_eq!(s.ticks(4), vec![0.0, 20.0, 40.0]);

        // 28 / 4 = 7 per tick: ratio 7 rounds up to a step of 10.
        let s = ScaleLinear::new((0.0, 28.0), (0.0, 600.0));
        assert_eq!(s.ticks(4), vec![0.0, 10.0, 20.0]);

        // 12 / 4 = 3 per tick: ratio 3 rounds up to a step of 5.
        let s = ScaleLinear::new((-5.0, 7.0), (0.0, 600.0));
        assert_eq!(s.ticks(4), vec![-5.0, 0.0, 5.0]);
    }

    #[test]
    fn degenerate_domain_has_single_tick() {
        let s = ScaleLinear::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(s.ticks(4), vec![0.0]);
        assert!(s.ticks(0).is_empty());
    }
}
