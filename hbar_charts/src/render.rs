// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-redraw rendering into a [`Surface`].

use hbar_core::{Frame, Surface, TextMeasurer};

use crate::bar_chart::BarChartSpec;
use crate::data::Dataset;
use crate::interval_chart::IntervalChartSpec;
use crate::layout::RenderContext;

/// One of the two supported chart layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    /// Diverging horizontal bars with collision-avoiding value labels.
    Bar(BarChartSpec),
    /// Confidence-interval whiskers with an annotated reference row.
    Interval(IntervalChartSpec),
}

impl Chart {
    /// The bar chart with default settings.
    pub fn bar() -> Self {
        Self::Bar(BarChartSpec::default())
    }

    /// The interval chart with default settings.
    pub fn interval() -> Self {
        Self::Interval(IntervalChartSpec::default())
    }

    /// Builds the frame for one render without touching any surface.
    pub fn frame(&self, ctx: &RenderContext, data: &Dataset, measurer: &dyn TextMeasurer) -> Frame {
        match self {
            Self::Bar(spec) => spec.frame(ctx, data, measurer),
            Self::Interval(spec) => spec.frame(ctx, data),
        }
    }
}

impl From<BarChartSpec> for Chart {
    fn from(value: BarChartSpec) -> Self {
        Self::Bar(value)
    }
}

impl From<IntervalChartSpec> for Chart {
    fn from(value: IntervalChartSpec) -> Self {
        Self::Interval(value)
    }
}

/// Clears `surface` and draws `chart` for `data` into it.
///
/// Text is measured with the surface's own metrics. Every call replaces the surface's
/// previous content entirely.
pub fn render<S: Surface>(surface: &mut S, chart: &Chart, ctx: &RenderContext, data: &Dataset) {
    surface.clear();
    let frame = chart.frame(ctx, data, &*surface);
    surface.present(&frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;
    use alloc::vec::Vec;

    use hbar_core::HeuristicTextMeasurer;

    use crate::data::Record;

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<Frame>,
        clears: usize,
    }

    impl TextMeasurer for Recorder {
        fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
            HeuristicTextMeasurer.measure(text, font_size)
        }
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.frames.clear();
        }

        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }

        fn present_fallback(&mut self, _message: &str) {}

        fn rendered_height(&self) -> f64 {
            self.frames.last().map_or(0.0, |f| f.height)
        }
    }

    #[test]
    fn rerender_replaces_previous_frame() {
        let data = Dataset::new(vec![Record::new("A", -5.0), Record::new("B", 10.0)]);
        let chart = Chart::bar();
        let mut surface = Recorder::default();

        render(&mut surface, &chart, &RenderContext::new(940.0, false), &data);
        let first = surface.frames.clone();
        render(&mut surface, &chart, &RenderContext::new(480.0, true), &data);
        assert_eq!(surface.frames.len(), 1);
        assert_ne!(surface.frames, first);
        render(&mut surface, &chart, &RenderContext::new(940.0, false), &data);
        assert_eq!(surface.frames, first);
        assert_eq!(surface.clears, 3);
        assert_eq!(surface.rendered_height(), 110.0);
    }
}
