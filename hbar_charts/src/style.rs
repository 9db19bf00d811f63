// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline CSS style strings.

extern crate alloc;

use alloc::string::String;
use core::fmt::{Display, Write};

/// Serializes `(key, value)` pairs as an inline style string.
///
/// Each pair becomes `"key: value; "`, in iteration order, trailing space included.
/// Nothing is escaped; keys and values come from chart code, not from data.
///
/// ```
/// use hbar_charts::format_style;
///
/// let s = format_style([("width", "250px"), ("left", "0")]);
/// assert_eq!(s, "width: 250px; left: 0; ");
/// ```
pub fn format_style<I, K, V>(props: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut s = String::new();
    for (key, value) in props {
        // Writing into a `String` cannot fail.
        let _ = write!(s, "{key}: {value}; ");
    }
    s
}

/// Formats a pixel length the way CSS expects (`250px`, `12.5px`).
pub fn px(value: f64) -> String {
    let mut s = String::new();
    let _ = write!(s, "{value}px");
    s
}
