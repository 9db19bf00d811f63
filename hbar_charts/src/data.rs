// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One row of chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Category name, shown in the label column.
    pub label: String,
    /// Primary value, in percent units (`12.3` means 12.3%).
    pub value: f64,
    /// Lower confidence bound, in percent units.
    pub lower: Option<f64>,
    /// Upper confidence bound, in percent units.
    pub upper: Option<f64>,
}

impl Record {
    /// Creates a record without confidence bounds.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            lower: None,
            upper: None,
        }
    }

    /// Attaches confidence bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = Some(lower);
        self.upper = Some(upper);
        self
    }

    /// Returns both bounds when present.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.lower?, self.upper?))
    }
}

/// An ordered sequence of records.
///
/// Order is significant: row `i` is drawn at the `i`-th vertical slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wraps records in their drawing order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in drawing order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates the records in drawing order.
    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Keeps the first record as the reference row and sorts the rest by value, largest
    /// first.
    ///
    /// The sort is stable, so ties keep their input order.
    #[must_use]
    pub fn with_reference_first(mut self) -> Self {
        if self.records.len() > 2 {
            self.records[1..].sort_by(|a, b| b.value.total_cmp(&a.value));
        }
        self
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parses a percent string such as `"42.1%"` into `42.1`.
///
/// Surrounding whitespace and a missing `%` sign are accepted. Anything that does not
/// parse to a finite number returns `None`.
pub fn parse_percent(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix('%').unwrap_or(s).trim_end();
    let v: f64 = s.parse().ok()?;
    v.is_finite().then_some(v)
}
