// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label placement.
//!
//! Value labels are flipped inside their bar when they would overflow the plot, which
//! needs the rendered width of the label. Shaping is kept downstream, so layout depends
//! on this tiny interface instead of a font stack.

/// A minimal text measurement interface used by chart layout.
///
/// Implementations can be heuristic ([`HeuristicTextMeasurer`]), backed by a shaping
/// engine, or backed by a live rendering surface.
pub trait TextMeasurer {
    /// Returns `(width, height)` of a single line of text in chart coordinates.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer.
///
/// It assumes an average glyph width of ~0.6em and a height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        (**self).measure(text, font_size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for alloc::boxed::Box<T> {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        (**self).measure(text, font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let m = HeuristicTextMeasurer;
        let (w, h) = m.measure("12%", 10.0);
        assert!((w - 18.0).abs() < 1e-9);
        assert!((h - 10.0).abs() < 1e-9);
    }
}
