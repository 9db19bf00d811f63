// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bottom value axis.
//!
//! Both charts draw a single horizontal axis below the plot. Its tick lines span the full
//! plot height, so they double as vertical gridlines.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use hbar_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::format::format_percent;
use crate::scale::ScaleLinear;
use crate::z_order;

/// A paint + width pair for stroked lines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in chart coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Bottom axis configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Stable-id base; ticks and labels use deterministic offsets from it.
    pub id_base: u64,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Decimals shown in tick labels.
    pub decimals: usize,
    /// Distance from the axis line to the top of tick labels.
    pub tick_padding: f64,
    /// Tick label font size.
    pub font_size: f64,
    /// Style of the domain line.
    pub domain: StrokeStyle,
    /// Style of the tick gridlines.
    pub grid: StrokeStyle,
    /// Tick label paint.
    pub label_fill: Brush,
}

impl AxisSpec {
    /// Creates an axis spec with `tick_count` ticks and whole-percent labels.
    pub fn new(id_base: u64, tick_count: usize) -> Self {
        Self {
            id_base,
            tick_count,
            decimals: 0,
            tick_padding: 9.0,
            font_size: 12.0,
            domain: StrokeStyle::solid(Color::from_rgb8(0xcc, 0xcc, 0xcc), 1.0),
            grid: StrokeStyle::solid(Color::from_rgb8(0xee, 0xee, 0xee), 1.0),
            label_fill: Brush::Solid(Color::from_rgb8(0x66, 0x66, 0x66)),
        }
    }

    /// Sets the number of decimals in tick labels.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Places ticks for `scale` along the bottom of a `chart_height`-tall plot.
    pub fn layout(&self, scale: &ScaleLinear, chart_height: f64) -> AxisLayout {
        let ticks = scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                x: scale.map(value),
                label: format_percent(value, self.decimals),
            })
            .collect();
        AxisLayout {
            y: chart_height,
            range: scale.range(),
            ticks,
        }
    }

    /// Generates the axis marks: domain line, then per tick a gridline and a label.
    pub fn marks(&self, layout: &AxisLayout) -> Vec<Mark> {
        let mut out = Vec::with_capacity(1 + 2 * layout.ticks.len());
        let (x0, x1) = layout.range;
        out.push(
            Mark::line(
                MarkId::from_raw(self.id_base),
                Line::new((x0, layout.y), (x1, layout.y)),
                self.domain.brush.clone(),
                self.domain.stroke_width,
            )
            .with_z_index(z_order::AXIS)
            .with_class("x axis domain"),
        );
        for (i, tick) in layout.ticks.iter().enumerate() {
            out.push(
                Mark::line(
                    MarkId::for_row(self.id_base + 0x100, i),
                    Line::new((tick.x, layout.y), (tick.x, 0.0)),
                    self.grid.brush.clone(),
                    self.grid.stroke_width,
                )
                .with_z_index(z_order::AXIS)
                .with_class("x axis tick"),
            );
            out.push(
                Mark::text(
                    MarkId::for_row(self.id_base + 0x200, i),
                    TextMark::new(
                        Point::new(tick.x, layout.y + self.tick_padding),
                        tick.label.clone(),
                    )
                    .with_font_size(self.font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging)
                    .with_fill(self.label_fill.clone()),
                )
                .with_z_index(z_order::AXIS)
                .with_class("x axis tick-label"),
            );
        }
        out
    }
}

/// One placed tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value in domain units.
    pub value: f64,
    /// Tick position in chart coordinates.
    pub x: f64,
    /// Formatted label.
    pub label: String,
}

/// Placed axis geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// Y of the axis line (the bottom of the plot).
    pub y: f64,
    /// Horizontal extent of the axis line.
    pub range: (f64, f64),
    /// Ticks in ascending order.
    pub ticks: Vec<AxisTick>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_labelled_and_mapped() {
        let scale = ScaleLinear::new((-5.0, 10.0), (0.0, 300.0));
        let axis = AxisSpec::new(0x10_000, 4);
        let layout = axis.layout(&scale, 70.0);
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["-5%", "0%", "5%", "10%"]);
        assert_eq!(layout.ticks[1].x, 100.0);
        assert_eq!(layout.y, 70.0);
    }

    #[test]
    fn gridlines_span_plot_height() {
        let scale = ScaleLinear::new((0.0, 1.5), (0.0, 300.0));
        let axis = AxisSpec::new(0x10_000, 4).with_decimals(1);
        let layout = axis.layout(&scale, 105.0);
        let marks = axis.marks(&layout);
        assert_eq!(marks.len(), 1 + 2 * 4);
        let tick = marks
            .iter()
            .find(|m| m.has_class("tick"))
            .expect("a tick gridline");
        let bounds = tick.payload.bounds().expect("line bounds");
        assert_eq!(bounds.y0, 0.0);
        assert_eq!(bounds.y1, 105.0);
        let last = marks.last().and_then(Mark::as_text).expect("tick label");
        assert_eq!(last.text, "1.5%");
    }
}
