// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar and interval charts for `hbar_core` surfaces.
//!
//! This crate turns a [`Dataset`] and a [`RenderContext`] into a [`hbar_core::Frame`]:
//! - **Scales** map percent values onto the plot width.
//! - **Layouts** ([`BarChartLayout`], [`IntervalChartLayout`]) are plain geometry,
//!   computed without any surface so they can be tested directly.
//! - **Marks** are generated from layouts in a fixed paint order (see [`z_order`]).
//!
//! [`render`] ties these together: it clears a surface and presents a fresh frame.
//!
//! Two leaf helpers are shared with the HTML side of a graphic: [`classify`] (label →
//! CSS class) and [`format_style`] (inline style strings).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod bar_chart;
mod classify;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interval_chart;
mod label_list;
mod layout;
mod render;
mod scale;
mod style;
pub mod z_order;

pub use axis::{AxisLayout, AxisSpec, AxisTick, StrokeStyle};
pub use bar_chart::{
    BarChartLayout, BarChartSpec, BarGeometry, LabelPlacement, ValueLabel, bar_extent,
    place_value_label,
};
pub use classify::classify;
pub use data::{Dataset, Record, parse_percent};
pub use format::format_percent;
pub use interval_chart::{
    IntervalChartLayout, IntervalChartSpec, IntervalGeometry, PlacedText, ReferenceAnnotations,
};
pub use label_list::label_list;
pub use layout::{ChartDims, Margins, RenderContext, Responsive, Rows};
pub use render::{Chart, render};
pub use scale::{INTERVAL_DOMAIN, ScaleLinear, build_scale, rounded_domain};
pub use style::{format_style, px};
