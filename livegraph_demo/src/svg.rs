// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG rendering surface for `livegraph_demo`.

use kurbo::{Cap, Join, Rect};
use livegraph_geometry::{Mark, MarkKind};
use peniko::{Brush, Color};

const LABEL_FONT_SIZE: f64 = 14.0;
const LABEL_LINE_HEIGHT: f64 = 1.3 * LABEL_FONT_SIZE;

#[derive(Debug)]
pub(crate) struct SvgScene {
    marks: Vec<Mark>,
    view_box: Rect,
    background: Color,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            marks: Vec::new(),
            view_box,
            background: Color::BLACK,
        }
    }

    pub(crate) fn push_marks(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height()
        ));
        write_paint_attr(&mut out, "fill", &Brush::Solid(self.background));
        out.push_str("/>\n");

        // Stable sort: marks sharing a z-index keep their emission order.
        let mut marks: Vec<&Mark> = self.marks.iter().collect();
        marks.sort_by_key(|m| m.z_index);

        for mark in marks {
            match &mark.kind {
                MarkKind::Fill { path, brush } => {
                    out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                    write_paint_attr(&mut out, "fill", brush);
                    out.push_str("/>\n");
                }
                MarkKind::Stroke { path, brush, style } => {
                    out.push_str(&format!(
                        r#"<path d="{}" fill="none""#,
                        path.to_svg()
                    ));
                    if style.width > 0.0 {
                        write_paint_attr(&mut out, "stroke", brush);
                        out.push_str(&format!(
                            r#" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}""#,
                            style.width,
                            svg_cap(style.start_cap),
                            svg_join(style.join)
                        ));
                    }
                    out.push_str("/>\n");
                }
                MarkKind::Label(label) => {
                    let x = view_box.x0 + 5.0;
                    let y = view_box.y0 + LABEL_LINE_HEIGHT * (label.line as f64 + 1.0);
                    out.push_str(&format!(
                        r#"<text x="{x}" y="{y}" font-size="{LABEL_FONT_SIZE}""#
                    ));
                    write_paint_attr(&mut out, "fill", &label.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&label.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_cap(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn svg_join(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
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
