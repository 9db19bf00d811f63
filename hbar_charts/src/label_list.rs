// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The HTML label column beside the plot.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hbar_core::{LabelItem, LabelList};

use crate::classify::classify;
use crate::data::Dataset;
use crate::layout::ChartDims;
use crate::style::{format_style, px};

/// Builds the `<ul class="labels">` column: one item per row, aligned with its bar.
pub fn label_list(data: &Dataset, dims: &ChartDims) -> LabelList {
    let width = px(dims.label_width);
    let style = format_style([
        ("width", width.clone()),
        ("top", px(dims.margins.top)),
        ("left", String::from("0")),
    ]);
    let items: Vec<LabelItem> = data
        .iter()
        .enumerate()
        .map(|(row, record)| LabelItem {
            text: record.label.clone(),
            class: classify(&record.label),
            style: format_style([
                ("width", width.clone()),
                ("height", px(dims.rows.bar_height)),
                ("left", String::from("0px")),
                ("top", px(dims.rows.y(row))),
            ]),
        })
        .collect();
    LabelList {
        class: String::from("labels"),
        style,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::data::Record;
    use crate::layout::Rows;

    #[test]
    fn items_follow_row_slots() {
        let data = Dataset::new(vec![Record::new("New York", 1.0), Record::new("Ohio", 2.0)]);
        let rows = Rows {
            bar_height: 30.0,
            bar_gap: 5.0,
            count: data.len(),
        };
        let dims = ChartDims::new(940.0, 250.0, 6.0, 10.0, 15.0, 30.0, rows);
        let list = label_list(&data, &dims);
        assert_eq!(list.style, "width: 250px; top: 10px; left: 0; ");
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].class, "new-york");
        assert_eq!(
            list.items[1].style,
            "width: 250px; height: 30px; left: 0px; top: 35px; "
        );
        assert_eq!(list.items[1].text, "Ohio");
    }
}
