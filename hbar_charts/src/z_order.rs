// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of chart-generated marks.
//!
//! Charts paint axis → grid/intervals → bars/points → zero line → text labels. Each layer
//! gets a coarse z-index; within a layer, emission order breaks ties.

/// Axis domain line, tick gridlines and tick labels.
pub const AXIS: i32 = -100;
/// Gridlines and interval whiskers.
pub const GRID: i32 = -50;
/// Bars and point markers.
pub const SERIES: i32 = 0;
/// The zero-reference line.
pub const ZERO_LINE: i32 = 10;
/// Value labels next to bars and points.
pub const VALUE_LABELS: i32 = 20;
/// Reference-row annotations and captions.
pub const ANNOTATIONS: i32 = 30;
