// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete, self-contained render result.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::mark::Mark;

/// One entry of the HTML label column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelItem {
    /// Visible label text.
    pub text: String,
    /// CSS class list for the `<li>`.
    pub class: String,
    /// Inline style for the `<li>`.
    pub style: String,
}

/// An absolutely positioned HTML list of row labels drawn beside the plot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelList {
    /// CSS class list for the `<ul>`.
    pub class: String,
    /// Inline style for the `<ul>`.
    pub style: String,
    /// Items in row order.
    pub items: Vec<LabelItem>,
}

/// Everything a surface needs to draw one chart.
///
/// Marks are in chart coordinates; `origin` is the translation of the chart group
/// inside the outer `width` x `height` viewport (the left/top margins).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Outer viewport width.
    pub width: f64,
    /// Outer viewport height.
    pub height: f64,
    /// Offset of chart coordinates inside the viewport.
    pub origin: Vec2,
    /// Drawing primitives, in emission order.
    pub marks: Vec<Mark>,
    /// Optional label column drawn after the marks.
    pub labels: Option<LabelList>,
}

impl Frame {
    /// Returns marks in paint order: by `z_index`, then by emission order.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        // `sort_by_key` is stable, so emission order breaks ties.
        out.sort_by_key(|m| m.z_index);
        out
    }

    /// Iterates the marks carrying CSS class `name`.
    pub fn marks_with_class<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Mark> + 'a {
        self.marks.iter().filter(move |m| m.has_class(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kurbo::Rect;
    use peniko::Brush;

    use crate::mark::MarkId;

    #[test]
    fn paint_order_is_stable_within_a_layer() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        let frame = Frame {
            marks: alloc::vec![
                Mark::rect(MarkId(3), r, Brush::default()).with_z_index(10),
                Mark::rect(MarkId(1), r, Brush::default()).with_z_index(-5),
                Mark::rect(MarkId(2), r, Brush::default()).with_z_index(10),
            ],
            ..Frame::default()
        };
        let ids: Vec<u64> = frame.paint_order().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, [1, 3, 2]);
    }
}
