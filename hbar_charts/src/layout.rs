// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart dimensions.
//!
//! Both chart layouts share the same frame shape: an HTML label column on the left, a
//! plot area to its right, and fixed margins around the plot. Everything here is a pure
//! function of the container width, the mobile flag and the number of rows.

use kurbo::Vec2;

/// Per-render inputs that used to live in page-level globals.
///
/// A render is fully determined by a `RenderContext` plus the dataset, which makes it
/// reproducible in tests without simulating a page lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    /// Container width in pixels.
    pub width: f64,
    /// Whether the narrow (mobile) presets apply.
    pub mobile: bool,
}

impl RenderContext {
    /// Creates a context with an explicit mobile flag.
    pub fn new(width: f64, mobile: bool) -> Self {
        Self { width, mobile }
    }

    /// Creates a context, switching to mobile presets at or below `breakpoint`.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        Self::new(width, width <= breakpoint)
    }
}

/// Space reserved around the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot (axis labels).
    pub bottom: f64,
    /// Space left of the plot (label column plus its gap).
    pub left: f64,
}

/// A desktop/mobile pair of lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Responsive {
    /// Value used above the breakpoint.
    pub desktop: f64,
    /// Value used at or below the breakpoint.
    pub mobile: f64,
}

impl Responsive {
    /// Creates a responsive pair.
    pub const fn new(desktop: f64, mobile: f64) -> Self {
        Self { desktop, mobile }
    }

    /// Picks the value for `ctx`.
    pub fn resolve(&self, ctx: &RenderContext) -> f64 {
        if ctx.mobile { self.mobile } else { self.desktop }
    }
}

/// Vertical slotting of rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rows {
    /// Height of one bar (or interval band).
    pub bar_height: f64,
    /// Gap between consecutive rows.
    pub bar_gap: f64,
    /// Number of rows.
    pub count: usize,
}

impl Rows {
    /// Top edge of row `row`.
    pub fn y(&self, row: usize) -> f64 {
        row as f64 * (self.bar_height + self.bar_gap)
    }

    /// Vertical centre of row `row`.
    pub fn center(&self, row: usize) -> f64 {
        self.y(row) + self.bar_height / 2.0
    }

    /// Total height of all rows, trailing gap included.
    pub fn height(&self) -> f64 {
        self.y(self.count)
    }
}

/// Resolved dimensions of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDims {
    /// Margins around the plot area.
    pub margins: Margins,
    /// Width of the HTML label column.
    pub label_width: f64,
    /// Plot width (the scale's range).
    pub chart_width: f64,
    /// Plot height (all rows).
    pub chart_height: f64,
    /// Row slotting.
    pub rows: Rows,
}

impl ChartDims {
    /// Resolves dimensions for a container.
    ///
    /// `margins.left` is derived as `label_width + label_margin`. The plot width never
    /// goes negative, even for containers narrower than the margins.
    pub fn new(
        container_width: f64,
        label_width: f64,
        label_margin: f64,
        top: f64,
        right: f64,
        bottom: f64,
        rows: Rows,
    ) -> Self {
        let margins = Margins {
            top,
            right,
            bottom,
            left: label_width + label_margin,
        };
        Self {
            margins,
            label_width,
            chart_width: (container_width - margins.left - margins.right).max(0.0),
            chart_height: rows.height(),
            rows,
        }
    }

    /// Width of the outer viewport.
    pub fn outer_width(&self) -> f64 {
        self.chart_width + self.margins.left + self.margins.right
    }

    /// Height of the outer viewport.
    pub fn outer_height(&self) -> f64 {
        self.chart_height + self.margins.top + self.margins.bottom
    }

    /// Translation from viewport coordinates to chart coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.margins.left, self.margins.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Rows {
        Rows {
            bar_height: 30.0,
            bar_gap: 5.0,
            count,
        }
    }

    #[test]
    fn rows_stack_with_gaps() {
        let r = rows(3);
        assert_eq!(r.y(0), 0.0);
        assert_eq!(r.y(2), 70.0);
        assert_eq!(r.center(1), 50.0);
        assert_eq!(r.height(), 105.0);
    }

    #[test]
    fn dims_subtract_margins_from_container() {
        let d = ChartDims::new(940.0, 250.0, 6.0, 10.0, 15.0, 30.0, rows(2));
        assert_eq!(d.margins.left, 256.0);
        assert_eq!(d.chart_width, 940.0 - 256.0 - 15.0);
        assert_eq!(d.outer_width(), 940.0);
        assert_eq!(d.outer_height(), 70.0 + 10.0 + 30.0);
    }

    #[test]
    fn empty_chart_collapses_to_margins() {
        let d = ChartDims::new(500.0, 120.0, 6.0, 10.0, 15.0, 30.0, rows(0));
        assert_eq!(d.chart_height, 0.0);
        assert_eq!(d.outer_height(), 40.0);
    }

    #[test]
    fn narrow_container_clamps_plot_width() {
        let d = ChartDims::new(100.0, 250.0, 6.0, 10.0, 15.0, 30.0, rows(1));
        assert_eq!(d.chart_width, 0.0);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(RenderContext::for_width(600.0, 600.0).mobile);
        assert!(!RenderContext::for_width(601.0, 600.0).mobile);
        let preset = Responsive::new(250.0, 120.0);
        assert_eq!(preset.resolve(&RenderContext::new(320.0, true)), 120.0);
        assert_eq!(preset.resolve(&RenderContext::new(940.0, false)), 250.0);
    }
}
