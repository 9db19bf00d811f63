// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement.
//!
//! Value labels are flipped inside their bars when the measured text would overflow the
//! plot. The heuristic measurer in `hbar_core` is close enough for digits in most sans
//! fonts; this crate implements [`hbar_core::TextMeasurer`] with real shaping for
//! graphics whose label font differs noticeably from that estimate.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use core::cell::RefCell;

use hbar_core::TextMeasurer;
use parley::style::{FontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight, LayoutContext};

/// A [`TextMeasurer`] backed by Parley.
///
/// Measures a single line in one font family and weight.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<()>>,
    family: Option<String>,
    weight: f32,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer using the system sans-serif family at normal weight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(LayoutContext::new()),
            family: None,
            weight: 400.0,
        }
    }

    /// Measures with a named font family (e.g. the stylesheet's label font).
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Sets the CSS font weight (`400` normal, `700` bold).
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    fn font_stack(&self) -> FontStack<'_> {
        let family = match &self.family {
            Some(name) => FontFamily::Named(Cow::Borrowed(name.as_str())),
            None => FontFamily::Generic(GenericFamily::SansSerif),
        };
        FontStack::from(family)
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() {
            return 0.0;
        }
        let font_size = font_size.max(0.0);
        if font_size >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                font_size as f32
            }
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return (0.0, 0.0);
        }

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(font_size)));
        builder.push_default(StyleProperty::FontStack(self.font_stack()));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(self.weight)));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return (0.0, 0.0);
        };
        let m = line.metrics();
        (
            f64::from(m.advance),
            f64::from(m.ascent + m.descent + m.leading),
        )
    }
}
