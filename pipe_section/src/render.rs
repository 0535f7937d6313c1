// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paints scene primitives through the coordinate mapper.

use core::f64::consts::TAU;

use kurbo::{Rect, Size};

use crate::{CoordinateMapper, DrawSurface, Primitive, Scene, ShapeStyle};

/// Draws every primitive in scene order.
///
/// `surface` must already be translated to `mapper.origin()`.
pub fn render_scene<S: DrawSurface + ?Sized>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    scene: &Scene,
    style: &ShapeStyle,
) {
    log::debug!("drawing {} primitives", scene.len());
    for primitive in scene {
        render_primitive(surface, mapper, primitive, style);
    }
}

/// Draws a single primitive.
pub fn render_primitive<S: DrawSurface + ?Sized>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    primitive: &Primitive,
    style: &ShapeStyle,
) {
    match primitive {
        Primitive::Arc { center, radius } => {
            surface.begin_path();
            surface.arc(
                mapper.to_device_offset(*center),
                mapper.length_to_device(*radius),
                0.0,
                TAU,
            );
            surface.set_line_width(style.outline.stroke_width);
            surface.set_fill(&style.arc_fill);
            surface.fill();
            surface.set_stroke(&style.outline.brush);
            surface.stroke();
            surface.close_path();
        }
        Primitive::Rect {
            origin,
            width,
            height,
        } => {
            // Positive height extends down the screen, i.e. toward smaller logical y.
            let rect = Rect::from_origin_size(
                mapper.to_device_offset(*origin),
                Size::new(
                    mapper.length_to_device(*width),
                    mapper.length_to_device(*height),
                ),
            );
            surface.begin_path();
            surface.rect(rect);
            surface.set_line_width(style.outline.stroke_width);
            surface.set_fill(&style.rect_fill);
            surface.fill();
            surface.set_stroke(&style.outline.brush);
            surface.stroke();
            surface.close_path();
        }
        Primitive::Line { path } => {
            if !primitive.is_drawable() {
                log::trace!("skipping line with {} point(s)", path.len());
                return;
            }
            let mut points = path.iter().map(|p| mapper.to_device_offset(*p));
            surface.begin_path();
            if let Some(first) = points.next() {
                surface.move_to(first);
            }
            for p in points {
                surface.line_to(p);
            }
            surface.set_line_width(style.line.stroke_width);
            surface.set_stroke(&style.line.brush);
            surface.stroke();
        }
    }
}
