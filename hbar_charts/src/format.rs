// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels and ticks.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a percent-unit value with a fixed number of decimals: `format_percent(12.34, 0)`
/// is `"12%"`.
///
/// Halves round away from zero, and a value that rounds to zero never prints as `-0`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    let factor = (0..decimals).fold(1.0_f64, |f, _| f * 10.0);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{rounded:.decimals$}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_percent(2.5, 0), "3%");
        assert_eq!(format_percent(-2.5, 0), "-3%");
        assert_eq!(format_percent(0.25, 1), "0.3%");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_percent(-0.4, 0), "0%");
        assert_eq!(format_percent(-0.0, 1), "0.0%");
    }

    #[test]
    fn pads_to_requested_decimals() {
        assert_eq!(format_percent(1.0, 1), "1.0%");
        assert_eq!(format_percent(42.0, 0), "42%");
    }
}
