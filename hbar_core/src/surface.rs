// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface capability charts render into.

use crate::frame::Frame;
use crate::measure::TextMeasurer;

/// A render target.
///
/// Every render is a full redraw: the renderer calls [`Surface::clear`] and then presents
/// exactly one frame (or a fallback). Surfaces never diff against earlier output.
///
/// The [`TextMeasurer`] supertrait is how layout measures label text with the metrics
/// the surface will actually draw with.
pub trait Surface: TextMeasurer {
    /// Removes all previously presented content.
    fn clear(&mut self);

    /// Draws a frame.
    fn present(&mut self, frame: &Frame);

    /// Draws a visible placeholder instead of a chart (e.g. when data failed to load).
    fn present_fallback(&mut self, message: &str);

    /// Height of the currently presented content, reported to the hosting page.
    fn rendered_height(&self) -> f64;
}
