// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing primitives.
//!
//! A [`Mark`] is one primitive (rect, line, circle or text) with a stable id, a z-index
//! for paint order and a CSS class list. Geometry is expressed with `kurbo` types in chart
//! coordinates (origin at the top-left corner of the plot area).

extern crate alloc;

use alloc::string::String;

use kurbo::{Circle, Line, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity for a mark.
///
/// Chart generators derive ids from a per-layer base plus a row index, so the same datum
/// gets the same id across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives the id of row `row` within the layer starting at `base`.
    pub fn for_row(base: u64, row: usize) -> Self {
        Self(base + row as u64)
    }
}

/// Horizontal text anchor (SVG `text-anchor`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The text starts at the anchor point.
    Start,
    /// The text is centred on the anchor point.
    Middle,
    /// The text ends at the anchor point.
    End,
}

/// Vertical text baseline (SVG `dominant-baseline`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is on the vertical middle of the glyphs.
    Middle,
    /// The anchor point is at the top of the glyphs.
    Hanging,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle in chart coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineMark {
    /// Segment in chart coordinates.
    pub line: Line,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in chart coordinates.
    pub stroke_width: f64,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Circle in chart coordinates.
    pub circle: Circle,
    /// Fill paint.
    pub fill: Brush,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in chart coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in chart coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMark {
    /// Creates a start-anchored, alphabetic-baseline text mark with a 12px font.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// The geometry and paint of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A stroked line.
    Line(LineMark),
    /// A filled circle.
    Circle(CircleMark),
    /// A text run.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the geometric bounds, or `None` for text (which needs measurement).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Line(l) => Some(l.line.bounding_box()),
            Self::Circle(c) => Some(c.circle.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A drawing primitive with identity, paint order and CSS classes.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; lower values are drawn first.
    pub z_index: i32,
    /// Space-separated CSS classes (may be empty).
    pub class: String,
    /// Geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark with `z_index = 0` and no classes.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            class: String::new(),
            payload,
        }
    }

    /// Creates a filled rectangle mark.
    pub fn rect(id: MarkId, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a stroked line mark.
    pub fn line(id: MarkId, line: Line, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self::new(
            id,
            MarkPayload::Line(LineMark {
                line,
                stroke: stroke.into(),
                stroke_width,
            }),
        )
    }

    /// Creates a filled circle mark.
    pub fn circle(id: MarkId, circle: Circle, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Circle(CircleMark {
                circle,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, text: TextMark) -> Self {
        Self::new(id, MarkPayload::Text(text))
    }

    /// Sets the z-index used for paint ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the CSS class list.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Returns `true` if `name` is one of this mark's classes.
    pub fn has_class(&self, name: &str) -> bool {
        self.class.split_ascii_whitespace().any(|c| c == name)
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextMark> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the rectangle, if this is a rect mark.
    pub fn as_rect(&self) -> Option<Rect> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r.rect),
            _ => None,
        }
    }
}
