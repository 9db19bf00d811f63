// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diverging horizontal bar chart.
//!
//! One bar per record, growing right from the zero line for positive values and left for
//! negative ones. Each bar gets a value label just past its end; when that would overflow
//! the plot, the label is tucked inside the bar instead.
//!
//! Layout ([`BarChartSpec::layout`]) is pure geometry. [`BarChartSpec::marks`] turns that
//! geometry into drawing primitives.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use hbar_core::{Frame, LabelList, Mark, MarkId, TextMark, TextMeasurer};

use crate::axis::{AxisLayout, AxisSpec, StrokeStyle};
use crate::classify::classify;
use crate::data::Dataset;
use crate::format::format_percent;
use crate::label_list::label_list;
use crate::layout::{ChartDims, RenderContext, Responsive, Rows};
use crate::scale::{ScaleLinear, build_scale};
use crate::z_order;

/// Configuration of the bar chart.
///
/// [`Default`] gives the standard graphic: 30px bars with 5px gaps, a 250px label column
/// (120px on mobile), four ticks and a domain rounded to multiples of 5.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Stable-id base for generated marks.
    pub id_base: u64,
    /// Height of each bar.
    pub bar_height: f64,
    /// Gap between bars.
    pub bar_gap: f64,
    /// Width of the label column.
    pub label_width: Responsive,
    /// Gap between the label column and the plot.
    pub label_margin: f64,
    /// Gap between a bar end and its value label.
    pub value_gap: f64,
    /// Space above the plot.
    pub margin_top: f64,
    /// Space right of the plot.
    pub margin_right: f64,
    /// Space below the plot.
    pub margin_bottom: f64,
    /// Bottom axis.
    pub axis: AxisSpec,
    /// Domain extremes are rounded outward to multiples of this.
    pub round_ticks_factor: f64,
    /// Font size of value labels.
    pub value_font_size: f64,
    /// Bar paint.
    pub bar_fill: Brush,
    /// Paint of value labels drawn outside bars.
    pub value_fill: Brush,
    /// Paint of value labels drawn inside bars.
    pub value_inside_fill: Brush,
    /// Style of the zero-reference line.
    pub zero_line: StrokeStyle,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            id_base: 0x100_000,
            bar_height: 30.0,
            bar_gap: 5.0,
            label_width: Responsive::new(250.0, 120.0),
            label_margin: 6.0,
            value_gap: 6.0,
            margin_top: 10.0,
            margin_right: 15.0,
            margin_bottom: 30.0,
            axis: AxisSpec::new(0x1f0_000, 4),
            round_ticks_factor: 5.0,
            value_font_size: 12.0,
            bar_fill: Brush::Solid(Color::from_rgb8(0x17, 0x80, 0x7e)),
            value_fill: Brush::Solid(Color::from_rgb8(0x66, 0x66, 0x66)),
            value_inside_fill: Brush::Solid(css::WHITE),
            zero_line: StrokeStyle::solid(Color::from_rgb8(0x33, 0x33, 0x33), 1.0),
        }
    }
}

/// Where a value label ended up relative to its bar end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelPlacement {
    /// Past the bar end, in the empty plot area.
    Outside,
    /// Flipped back over the bar because the outside spot would overflow the plot.
    Inside,
}

impl LabelPlacement {
    /// The CSS marker class for this placement (`out` / `in`).
    pub fn class(self) -> &'static str {
        match self {
            Self::Outside => "out",
            Self::Inside => "in",
        }
    }
}

/// Placed geometry of one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    /// Row index.
    pub row: usize,
    /// Bar rectangle in chart coordinates.
    pub rect: Rect,
    /// CSS classes (`bar-{row} {slug}`).
    pub class: String,
}

/// Placed geometry of one value label.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    /// Row index.
    pub row: usize,
    /// Label text.
    pub text: String,
    /// The bar end the label hangs off (`map(value)`).
    pub x: f64,
    /// Top of the row.
    pub y: f64,
    /// Horizontal offset from `x` to the text start.
    pub dx: f64,
    /// Vertical offset from `y` to the text baseline.
    pub dy: f64,
    /// Measured text width.
    pub width: f64,
    /// Inside/outside outcome.
    pub placement: LabelPlacement,
}

impl ValueLabel {
    /// Where the text starts, in chart coordinates.
    pub fn anchor(&self) -> Point {
        Point::new(self.x + self.dx, self.y + self.dy)
    }
}

/// Pure geometry of a bar chart render.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
    /// Resolved dimensions.
    pub dims: ChartDims,
    /// Value scale.
    pub scale: ScaleLinear,
    /// One bar per record.
    pub bars: Vec<BarGeometry>,
    /// One value label per record.
    pub value_labels: Vec<ValueLabel>,
    /// Zero line, present only when the domain extends below zero.
    pub zero_line: Option<Line>,
    /// Bottom axis.
    pub axis: AxisLayout,
    /// Label column.
    pub labels: LabelList,
}

/// Horizontal extent `(x, width)` of the bar for `value`.
///
/// Positive (and zero) bars start at the zero line; negative bars end there.
pub fn bar_extent(scale: &ScaleLinear, value: f64) -> (f64, f64) {
    let zero = scale.map(0.0);
    let end = scale.map(value);
    let x = if value >= 0.0 { zero } else { end };
    (x, (zero - end).abs())
}

/// Decides where a value label goes and returns its `dx` offset from the bar end `x`.
///
/// Positive labels go right of the bar end unless `x + gap + text_width` passes
/// `chart_width`; negative labels go left unless `x - gap - text_width` passes `0`. In
/// the overflow case the offset is mirrored so the label sits inside the bar.
pub fn place_value_label(
    value: f64,
    x: f64,
    text_width: f64,
    gap: f64,
    chart_width: f64,
) -> (f64, LabelPlacement) {
    let outside = gap + text_width;
    if value < 0.0 {
        if x - outside < 0.0 {
            (gap, LabelPlacement::Inside)
        } else {
            (-outside, LabelPlacement::Outside)
        }
    } else if x + outside > chart_width {
        (-outside, LabelPlacement::Inside)
    } else {
        (gap, LabelPlacement::Outside)
    }
}

impl BarChartSpec {
    /// Resolves dimensions for `rows` records.
    pub fn dims(&self, ctx: &RenderContext, rows: usize) -> ChartDims {
        ChartDims::new(
            ctx.width,
            self.label_width.resolve(ctx),
            self.label_margin,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            Rows {
                bar_height: self.bar_height,
                bar_gap: self.bar_gap,
                count: rows,
            },
        )
    }

    /// Computes the full geometry of a render.
    ///
    /// `measurer` supplies value label widths for collision avoidance.
    pub fn layout(
        &self,
        ctx: &RenderContext,
        data: &Dataset,
        measurer: &dyn TextMeasurer,
    ) -> BarChartLayout {
        let dims = self.dims(ctx, data.len());
        let scale = build_scale(data, |r| r.value, dims.chart_width, self.round_ticks_factor);
        let rows = dims.rows;

        let mut bars = Vec::with_capacity(data.len());
        let mut value_labels = Vec::with_capacity(data.len());
        for (row, record) in data.iter().enumerate() {
            let y = rows.y(row);
            let (x, width) = bar_extent(&scale, record.value);
            let slug = classify(&record.label);
            let class = if slug.is_empty() {
                format!("bar-{row}")
            } else {
                format!("bar-{row} {slug}")
            };
            bars.push(BarGeometry {
                row,
                rect: Rect::new(x, y, x + width, y + self.bar_height),
                class,
            });

            let text = format_percent(record.value, 0);
            let (text_width, _) = measurer.measure(&text, self.value_font_size);
            let end = scale.map(record.value);
            let (dx, placement) = place_value_label(
                record.value,
                end,
                text_width,
                self.value_gap,
                dims.chart_width,
            );
            value_labels.push(ValueLabel {
                row,
                text,
                x: end,
                y,
                dx,
                dy: self.bar_height / 2.0 + 3.0,
                width: text_width,
                placement,
            });
        }

        let zero_line = (scale.domain_min() < 0.0).then(|| {
            let x = scale.map(0.0);
            Line::new((x, 0.0), (x, dims.chart_height))
        });

        BarChartLayout {
            axis: self.axis.layout(&scale, dims.chart_height),
            labels: label_list(data, &dims),
            dims,
            scale,
            bars,
            value_labels,
            zero_line,
        }
    }

    /// Converts geometry into marks.
    pub fn marks(&self, layout: &BarChartLayout) -> Vec<Mark> {
        let mut out = self.axis.marks(&layout.axis);

        out.extend(layout.bars.iter().map(|bar| {
            Mark::rect(
                MarkId::for_row(self.id_base, bar.row),
                bar.rect,
                self.bar_fill.clone(),
            )
            .with_z_index(z_order::SERIES)
            .with_class(bar.class.clone())
        }));

        if let Some(line) = layout.zero_line {
            out.push(
                Mark::line(
                    MarkId::from_raw(self.id_base + 0x2_0000),
                    line,
                    self.zero_line.brush.clone(),
                    self.zero_line.stroke_width,
                )
                .with_z_index(z_order::ZERO_LINE)
                .with_class("zero"),
            );
        }

        out.extend(layout.value_labels.iter().map(|label| {
            let fill = match label.placement {
                LabelPlacement::Outside => self.value_fill.clone(),
                LabelPlacement::Inside => self.value_inside_fill.clone(),
            };
            Mark::text(
                MarkId::for_row(self.id_base + 0x1_0000, label.row),
                TextMark::new(label.anchor(), label.text.clone())
                    .with_font_size(self.value_font_size)
                    .with_fill(fill),
            )
            .with_z_index(z_order::VALUE_LABELS)
            .with_class(format!("value {}", label.placement.class()))
        }));

        out
    }

    /// Lays out and converts a render into a [`Frame`].
    pub fn frame(&self, ctx: &RenderContext, data: &Dataset, measurer: &dyn TextMeasurer) -> Frame {
        let layout = self.layout(ctx, data, measurer);
        Frame {
            width: layout.dims.outer_width(),
            height: layout.dims.outer_height(),
            origin: layout.dims.origin(),
            marks: self.marks(&layout),
            labels: Some(layout.labels),
        }
    }
}
