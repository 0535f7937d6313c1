// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of recorded draw commands.

use kurbo::Rect;
use peniko::Brush;
use pipe_section::DrawCommand;

/// Writes `commands` as an SVG document covering `canvas`.
pub(crate) fn to_svg_string(canvas: Rect, commands: &[DrawCommand]) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        canvas.x0,
        canvas.y0,
        canvas.width(),
        canvas.height(),
        canvas.width(),
        canvas.height()
    ));
    out.push('\n');

    for command in commands {
        match command {
            DrawCommand::Clear(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                    r.x0,
                    r.y0,
                    r.width(),
                    r.height(),
                ));
                out.push('\n');
            }
            DrawCommand::Fill { path, brush } => {
                out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                write_paint_attr(&mut out, "fill", brush);
                out.push_str("/>\n");
            }
            DrawCommand::Stroke { path, brush, width } => {
                out.push_str(&format!(r#"<path d="{}" fill="none""#, path.to_svg()));
                write_paint_attr(&mut out, "stroke", brush);
                out.push_str(&format!(r#" stroke-width="{width}""#));
                out.push_str("/>\n");
            }
            DrawCommand::Text {
                text,
                pos,
                style,
                brush,
            } => {
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
                    pos.x,
                    pos.y,
                    style.font_size,
                    escape_xml(&style.font_family)
                ));
                write_paint_attr(&mut out, "fill", brush);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
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
