// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for Hbar graphics.
//!
//! A chart render produces a [`Frame`]: a list of stable-identity [`Mark`]s in chart
//! coordinates plus an optional HTML [`LabelList`] that sits beside the plot. Frames are
//! handed to a [`Surface`], which owns the actual output (SVG text, a canvas, a test
//! recorder) and exposes text measurement so layout can avoid label collisions.
//!
//! This crate performs no layout of its own; see `hbar_charts` for scales and charts.

#![no_std]

extern crate alloc;

mod frame;
mod mark;
mod measure;
mod surface;

pub use frame::{Frame, LabelItem, LabelList};
pub use mark::{
    CircleMark, LineMark, Mark, MarkId, MarkPayload, RectMark, TextAnchor, TextBaseline,
    TextMark,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use surface::Surface;
