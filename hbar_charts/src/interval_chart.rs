// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The confidence-interval chart.
//!
//! Each record is drawn as a whisker from its lower to its upper bound with end ticks, a
//! point at the estimate and the estimate's value above it. Row 0 is the reference record:
//! it also gets its bound values printed beside the whisker, and the captions
//! "At least" / "Estimate" / "At most" above the plot line up with its three x positions.
//!
//! The value domain is fixed (see [`INTERVAL_DOMAIN`]) rather than derived from data.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Line, Point};
use peniko::{Brush, Color};

use hbar_core::{Frame, LabelList, Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::axis::{AxisLayout, AxisSpec, StrokeStyle};
use crate::classify::classify;
use crate::data::Dataset;
use crate::format::format_percent;
use crate::label_list::label_list;
use crate::layout::{ChartDims, RenderContext, Responsive, Rows};
use crate::scale::{INTERVAL_DOMAIN, ScaleLinear};
use crate::z_order;

/// Configuration of the interval chart.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalChartSpec {
    /// Stable-id base for generated marks.
    pub id_base: u64,
    /// Height of each row band.
    pub bar_height: f64,
    /// Gap between rows.
    pub bar_gap: f64,
    /// Width of the label column.
    pub label_width: Responsive,
    /// Gap between the label column and the plot.
    pub label_margin: f64,
    /// Space above the plot; holds the reference captions.
    pub margin_top: f64,
    /// Space right of the plot.
    pub margin_right: f64,
    /// Space below the plot.
    pub margin_bottom: f64,
    /// Bottom axis.
    pub axis: AxisSpec,
    /// Half the height of the end ticks.
    pub interval_height: f64,
    /// Radius of the estimate point.
    pub point_radius: f64,
    /// Decimals in value labels.
    pub value_decimals: usize,
    /// Font size of value labels.
    pub value_font_size: f64,
    /// Horizontal gap between a reference bound tick and its label.
    pub label_gap: f64,
    /// Baseline of the captions, above the plot (negative is up).
    pub caption_y: f64,
    /// Font size of the captions.
    pub caption_font_size: f64,
    /// Caption text for the lower bound, the estimate and the upper bound.
    pub captions: [&'static str; 3],
    /// Whisker and end tick stroke.
    pub whisker: StrokeStyle,
    /// Point paint.
    pub point_fill: Brush,
    /// Value label paint.
    pub value_fill: Brush,
    /// Caption paint.
    pub caption_fill: Brush,
}

impl Default for IntervalChartSpec {
    fn default() -> Self {
        Self {
            id_base: 0x200_000,
            bar_height: 30.0,
            bar_gap: 5.0,
            label_width: Responsive::new(140.0, 90.0),
            label_margin: 6.0,
            margin_top: 40.0,
            margin_right: 20.0,
            margin_bottom: 30.0,
            axis: AxisSpec::new(0x2f0_000, 4).with_decimals(1),
            interval_height: 5.0,
            point_radius: 4.0,
            value_decimals: 1,
            value_font_size: 12.0,
            label_gap: 6.0,
            caption_y: -14.0,
            caption_font_size: 11.0,
            captions: ["At least", "Estimate", "At most"],
            whisker: StrokeStyle::solid(Color::from_rgb8(0x99, 0x99, 0x99), 2.0),
            point_fill: Brush::Solid(Color::from_rgb8(0x17, 0x80, 0x7e)),
            value_fill: Brush::Solid(Color::from_rgb8(0x33, 0x33, 0x33)),
            caption_fill: Brush::Solid(Color::from_rgb8(0x99, 0x99, 0x99)),
        }
    }
}

/// A positioned, unstyled text run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    /// Anchor position in chart coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

/// Placed geometry of one record.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalGeometry {
    /// Row index.
    pub row: usize,
    /// Vertical centre of the row.
    pub cy: f64,
    /// Lower → upper whisker; `None` when the record has no bounds.
    pub whisker: Option<Line>,
    /// End tick at the lower bound.
    pub lower_tick: Option<Line>,
    /// End tick at the upper bound.
    pub upper_tick: Option<Line>,
    /// The estimate.
    pub point: Point,
    /// The estimate's value, centred above the point.
    pub value_label: PlacedText,
    /// CSS class slug of the record label.
    pub class: String,
}

/// Extra labels of the reference record.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceAnnotations {
    /// Lower bound value, left of the lower tick.
    pub lower: Option<PlacedText>,
    /// Upper bound value, right of the upper tick.
    pub upper: Option<PlacedText>,
    /// Captions above the plot, left to right.
    pub captions: Vec<PlacedText>,
}

/// Pure geometry of an interval chart render.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalChartLayout {
    /// Resolved dimensions.
    pub dims: ChartDims,
    /// Value scale over the fixed domain.
    pub scale: ScaleLinear,
    /// One entry per record.
    pub intervals: Vec<IntervalGeometry>,
    /// Annotations of row 0, if there is a row 0.
    pub reference: Option<ReferenceAnnotations>,
    /// Bottom axis.
    pub axis: AxisLayout,
    /// Label column.
    pub labels: LabelList,
}

impl IntervalChartSpec {
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

    /// The scale for a plot `chart_width` wide. Independent of the data.
    pub fn scale(&self, chart_width: f64) -> ScaleLinear {
        ScaleLinear::new(INTERVAL_DOMAIN, (0.0, chart_width))
    }

    /// Computes the full geometry of a render.
    pub fn layout(&self, ctx: &RenderContext, data: &Dataset) -> IntervalChartLayout {
        let dims = self.dims(ctx, data.len());
        let scale = self.scale(dims.chart_width);
        let h = self.interval_height;

        let intervals: Vec<IntervalGeometry> = data
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let cy = dims.rows.center(row);
                let px = scale.map(record.value);
                let bounds = record.bounds().map(|(lo, hi)| (scale.map(lo), scale.map(hi)));
                IntervalGeometry {
                    row,
                    cy,
                    whisker: bounds.map(|(x0, x1)| Line::new((x0, cy), (x1, cy))),
                    lower_tick: bounds.map(|(x0, _)| Line::new((x0, cy - h), (x0, cy + h))),
                    upper_tick: bounds.map(|(_, x1)| Line::new((x1, cy - h), (x1, cy + h))),
                    point: Point::new(px, cy),
                    value_label: PlacedText {
                        pos: Point::new(px, cy - h - 3.0),
                        text: format_percent(record.value, self.value_decimals),
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Alphabetic,
                    },
                    class: classify(&record.label),
                }
            })
            .collect();

        let reference = data.records().first().map(|record| {
            let cy = dims.rows.center(0);
            let caption = |x: f64, text: &str| PlacedText {
                pos: Point::new(x, self.caption_y),
                text: String::from(text),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Alphabetic,
            };
            let [at_least, estimate, at_most] = self.captions;
            let mut captions = Vec::with_capacity(3);
            let mut lower = None;
            let mut upper = None;
            if let Some((lo, hi)) = record.bounds() {
                let (x0, x1) = (scale.map(lo), scale.map(hi));
                lower = Some(PlacedText {
                    pos: Point::new(x0 - self.label_gap, cy),
                    text: format_percent(lo, self.value_decimals),
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                });
                upper = Some(PlacedText {
                    pos: Point::new(x1 + self.label_gap, cy),
                    text: format_percent(hi, self.value_decimals),
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Middle,
                });
                captions.push(caption(x0, at_least));
                captions.push(caption(scale.map(record.value), estimate));
                captions.push(caption(x1, at_most));
            } else {
                captions.push(caption(scale.map(record.value), estimate));
            }
            ReferenceAnnotations {
                lower,
                upper,
                captions,
            }
        });

        IntervalChartLayout {
            axis: self.axis.layout(&scale, dims.chart_height),
            labels: label_list(data, &dims),
            dims,
            scale,
            intervals,
            reference,
        }
    }

    fn text_mark(&self, id: MarkId, t: &PlacedText, font_size: f64, fill: &Brush) -> Mark {
        Mark::text(
            id,
            TextMark::new(t.pos, t.text.clone())
                .with_font_size(font_size)
                .with_anchor(t.anchor)
                .with_baseline(t.baseline)
                .with_fill(fill.clone()),
        )
    }

    /// Converts geometry into marks.
    pub fn marks(&self, layout: &IntervalChartLayout) -> Vec<Mark> {
        let base = self.id_base;
        let mut out = self.axis.marks(&layout.axis);

        for g in &layout.intervals {
            let rule = |id: u64, line: Line, class: String| {
                Mark::line(
                    MarkId::for_row(id, g.row),
                    line,
                    self.whisker.brush.clone(),
                    self.whisker.stroke_width,
                )
                .with_z_index(z_order::GRID)
                .with_class(class)
            };
            if let Some(line) = g.whisker {
                out.push(rule(base, line, format!("interval {}", g.class)));
            }
            if let Some(line) = g.lower_tick {
                out.push(rule(base + 0x1_0000, line, String::from("interval-tick lower")));
            }
            if let Some(line) = g.upper_tick {
                out.push(rule(base + 0x2_0000, line, String::from("interval-tick upper")));
            }
        }

        out.extend(layout.intervals.iter().map(|g| {
            Mark::circle(
                MarkId::for_row(base + 0x3_0000, g.row),
                Circle::new(g.point, self.point_radius),
                self.point_fill.clone(),
            )
            .with_z_index(z_order::SERIES)
            .with_class(format!("point {}", g.class))
        }));

        out.extend(layout.intervals.iter().map(|g| {
            self.text_mark(
                MarkId::for_row(base + 0x4_0000, g.row),
                &g.value_label,
                self.value_font_size,
                &self.value_fill,
            )
            .with_z_index(z_order::VALUE_LABELS)
            .with_class("value")
        }));

        if let Some(reference) = &layout.reference {
            let bounds = [("lower", &reference.lower), ("upper", &reference.upper)];
            for (i, (side, text)) in bounds.into_iter().enumerate() {
                if let Some(text) = text {
                    out.push(
                        self.text_mark(
                            MarkId::for_row(base + 0x5_0000, i),
                            text,
                            self.value_font_size,
                            &self.value_fill,
                        )
                        .with_z_index(z_order::ANNOTATIONS)
                        .with_class(format!("value reference {side}")),
                    );
                }
            }
            for (i, caption) in reference.captions.iter().enumerate() {
                out.push(
                    self.text_mark(
                        MarkId::for_row(base + 0x6_0000, i),
                        caption,
                        self.caption_font_size,
                        &self.caption_fill,
                    )
                    .with_z_index(z_order::ANNOTATIONS)
                    .with_class("annotation"),
                );
            }
        }

        out
    }

    /// Lays out and converts a render into a [`Frame`].
    pub fn frame(&self, ctx: &RenderContext, data: &Dataset) -> Frame {
        let layout = self.layout(ctx, data);
        Frame {
            width: layout.dims.outer_width(),
            height: layout.dims.outer_height(),
            origin: layout.dims.origin(),
            marks: self.marks(&layout),
            labels: Some(layout.labels),
        }
    }
}
