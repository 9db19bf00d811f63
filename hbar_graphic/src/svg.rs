// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An HTML + SVG [`Surface`].

use hbar_core::{
    Frame, HeuristicTextMeasurer, LabelList, Mark, MarkPayload, Surface, TextAnchor,
    TextBaseline, TextMeasurer,
};
use peniko::Brush;

/// Height reported while the fallback message is shown.
pub const FALLBACK_HEIGHT: f64 = 30.0;

#[derive(Clone, Debug, Default, PartialEq)]
enum Content {
    #[default]
    Empty,
    Chart(Frame),
    Fallback(String),
}

/// Renders frames into an embeddable HTML fragment.
///
/// The fragment is
/// `<div id="…"><div class="graphic-wrapper"><svg …>…</svg><ul class="labels">…</ul></div></div>`:
/// an SVG holding the marks (translated by the frame origin) followed by the label list.
#[derive(Clone, Debug)]
pub struct SvgSurface<M = HeuristicTextMeasurer> {
    container_id: String,
    measurer: M,
    content: Content,
}

impl SvgSurface<HeuristicTextMeasurer> {
    /// Creates an empty surface for container `container_id` using heuristic metrics.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self::with_measurer(container_id, HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> SvgSurface<M> {
    /// Creates an empty surface that measures label text with `measurer`.
    pub fn with_measurer(container_id: impl Into<String>, measurer: M) -> Self {
        Self {
            container_id: container_id.into(),
            measurer,
            content: Content::Empty,
        }
    }

    /// The last presented frame, if a chart is showing.
    pub fn frame(&self) -> Option<&Frame> {
        match &self.content {
            Content::Chart(frame) => Some(frame),
            _ => None,
        }
    }

    /// Whether the fallback message is showing.
    pub fn is_fallback(&self) -> bool {
        matches!(self.content, Content::Fallback(_))
    }

    /// Serializes the current content as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(r#"<div id="{}">"#, escape_xml(&self.container_id)));
        match &self.content {
            Content::Empty => {}
            Content::Chart(frame) => {
                out.push_str(r#"<div class="graphic-wrapper">"#);
                out.push('\n');
                write_svg(&mut out, frame);
                if let Some(labels) = &frame.labels {
                    write_labels(&mut out, labels);
                }
                out.push_str("</div>");
            }
            Content::Fallback(message) => {
                out.push_str(&format!(
                    r#"<p class="fallback">{}</p>"#,
                    escape_xml(message)
                ));
            }
        }
        out.push_str("</div>\n");
        out
    }
}

impl<M: TextMeasurer> TextMeasurer for SvgSurface<M> {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        self.measurer.measure(text, font_size)
    }
}

impl<M: TextMeasurer> Surface for SvgSurface<M> {
    fn clear(&mut self) {
        self.content = Content::Empty;
    }

    fn present(&mut self, frame: &Frame) {
        self.content = Content::Chart(frame.clone());
    }

    fn present_fallback(&mut self, message: &str) {
        self.content = Content::Fallback(message.to_string());
    }

    fn rendered_height(&self) -> f64 {
        match &self.content {
            Content::Empty => 0.0,
            Content::Chart(frame) => frame.height,
            Content::Fallback(_) => FALLBACK_HEIGHT,
        }
    }
}

fn write_svg(out: &mut String, frame: &Frame) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        frame.width, frame.height
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<g transform="translate({},{})">"#,
        frame.origin.x, frame.origin.y
    ));
    out.push('\n');
    for mark in frame.paint_order() {
        write_mark(out, mark);
    }
    out.push_str("</g>\n</svg>\n");
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            out.push_str("<rect");
            write_class_attr(out, &mark.class);
            out.push_str(&format!(
                r#" x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Line(l) => {
            out.push_str("<line");
            write_class_attr(out, &mark.class);
            out.push_str(&format!(
                r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
                l.line.p0.x, l.line.p0.y, l.line.p1.x, l.line.p1.y
            ));
            write_paint_attr(out, "stroke", &l.stroke);
            out.push_str(&format!(r#" stroke-width="{}""#, l.stroke_width));
            out.push_str("/>\n");
        }
        MarkPayload::Circle(c) => {
            out.push_str("<circle");
            write_class_attr(out, &mark.class);
            out.push_str(&format!(
                r#" cx="{}" cy="{}" r="{}""#,
                c.circle.center.x, c.circle.center.y, c.circle.radius
            ));
            write_paint_attr(out, "fill", &c.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str("<text");
            write_class_attr(out, &mark.class);
            out.push_str(&format!(
                r#" x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

fn write_labels(out: &mut String, labels: &LabelList) {
    out.push_str("<ul");
    write_class_attr(out, &labels.class);
    write_style_attr(out, &labels.style);
    out.push_str(">\n");
    for item in &labels.items {
        out.push_str("<li");
        write_class_attr(out, &item.class);
        write_style_attr(out, &item.style);
        out.push_str(&format!("><span>{}</span></li>\n", escape_xml(&item.text)));
    }
    out.push_str("</ul>\n");
}

fn write_class_attr(out: &mut String, class: &str) {
    if !class.is_empty() {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
}

fn write_style_attr(out: &mut String, style: &str) {
    if !style.is_empty() {
        out.push_str(&format!(r#" style="{}""#, escape_xml(style.trim_end())));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use hbar_core::{LabelItem, MarkId, TextMark};
    use kurbo::{Point, Rect, Vec2};
    use peniko::Color;

    fn sample_frame() -> Frame {
        Frame {
            width: 300.0,
            height: 80.0,
            origin: Vec2::new(256.0, 10.0),
            marks: vec![
                Mark::text(
                    MarkId(2),
                    TextMark::new(Point::new(4.0, 15.0), "<5%")
                        .with_anchor(TextAnchor::End)
                        .with_baseline(TextBaseline::Middle),
                )
                .with_class("value out")
                .with_z_index(20),
                Mark::rect(
                    MarkId(1),
                    Rect::new(0.0, 0.0, 12.5, 30.0),
                    Color::from_rgba8(0x11, 0x22, 0x33, 0xff),
                )
                .with_class("bar-0 texas"),
            ],
            labels: Some(LabelList {
                class: "labels".into(),
                style: "width: 250px; top: 10px; left: 0; ".into(),
                items: vec![LabelItem {
                    text: "Texas & Co".into(),
                    class: "texas-co".into(),
                    style: "top: 0px; ".into(),
                }],
            }),
        }
    }

    #[test]
    fn chart_html_nests_svg_and_labels_in_the_container() {
        let mut surface = SvgSurface::new("graphic");
        surface.present(&sample_frame());
        let html = surface.to_html();

        assert!(html.starts_with(r#"<div id="graphic"><div class="graphic-wrapper">"#));
        assert!(html.ends_with("</ul>\n</div></div>\n"));
        assert!(html.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="80">"#));
        assert!(html.contains(r#"<g transform="translate(256,10)">"#));
        assert!(html.contains(
            r##"<rect class="bar-0 texas" x="0" y="0" width="12.5" height="30" fill="#112233"/>"##
        ));
        assert!(html.contains(r#"<ul class="labels" style="width: 250px; top: 10px; left: 0;">"#));
        assert!(html.contains(
            r#"<li class="texas-co" style="top: 0px;"><span>Texas &amp; Co</span></li>"#
        ));
        assert!(html.contains("&lt;5%</text>"));

        let rect_at = html.find("<rect").unwrap();
        let text_at = html.find("<text").unwrap();
        assert!(rect_at < text_at, "marks are painted in z order");
        assert_eq!(surface.rendered_height(), 80.0);
    }

    #[test]
    fn fallback_replaces_the_chart() {
        let mut surface = SvgSurface::new("graphic");
        surface.present(&sample_frame());
        surface.clear();
        surface.present_fallback("Data unavailable");

        assert!(surface.is_fallback());
        assert!(surface.frame().is_none());
        assert_eq!(
            surface.to_html(),
            "<div id=\"graphic\"><p class=\"fallback\">Data unavailable</p></div>\n"
        );
        assert_eq!(surface.rendered_height(), FALLBACK_HEIGHT);
    }

    #[test]
    fn cleared_surface_is_empty() {
        let mut surface = SvgSurface::new("g");
        surface.present(&sample_frame());
        surface.clear();
        assert_eq!(surface.to_html(), "<div id=\"g\"></div>\n");
        assert_eq!(surface.rendered_height(), 0.0);
    }

    #[test]
    fn translucent_paint_gets_an_opacity_attribute() {
        let mut out = String::new();
        write_paint_attr(
            &mut out,
            "fill",
            &Brush::Solid(Color::from_rgba8(0, 0, 0, 51)),
        );
        assert_eq!(out, r##" fill="#000000" fill-opacity="0.2""##);
    }
}
