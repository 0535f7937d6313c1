// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis frame, ticks, gridlines and tick labels.
//!
//! Ticks start at the view minimum and step by `scale`, one every `ratio`
//! pixels, so labels are evenly spaced by `scale` whatever the pixel density.
//! Everything is drawn in the origin-translated frame.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;

use crate::format::{decimals, format_tick, snap};
use crate::{AxisStyle, CoordinateMapper, DrawSurface, TextStyle, ViewConfig};

/// Which side of its tick a label sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelOrient {
    /// Centered horizontally, hanging below the anchor (x axis).
    Below,
    /// Right-aligned against the anchor, vertically centered (y axis).
    Left,
}

/// Tick values `min + i * scale` for `i` in `0..=count`.
///
/// Values are snapped to the precision of `min` and `scale`.
pub fn tick_values(min: f64, scale: f64, count: usize) -> Vec<f64> {
    let precision = decimals(min).max(decimals(scale));
    (0..=count)
        .map(|i| snap(min + i as f64 * scale, precision))
        .collect()
}

/// Tick values along the x axis of `view`.
pub fn x_ticks(view: &ViewConfig) -> Vec<f64> {
    tick_values(view.min_x, view.scale, view.x_tick_count())
}

/// Tick values along the y axis of `view`.
pub fn y_ticks(view: &ViewConfig) -> Vec<f64> {
    tick_values(view.min_y, view.scale, view.y_tick_count())
}

/// Draws one tick label next to `anchor`, aligned by its measured width.
pub fn draw_tick_label<S: DrawSurface + ?Sized>(
    surface: &mut S,
    anchor: Point,
    text: &str,
    font: &TextStyle,
    fill: &Brush,
    orient: LabelOrient,
) {
    let width = surface.measure(text, font).advance_width;
    let size = font.font_size;
    let pos = match orient {
        LabelOrient::Below => Point::new(anchor.x - width / 2.0, anchor.y + size),
        LabelOrient::Left => Point::new(anchor.x - width, anchor.y + size / 2.0),
    };
    surface.begin_path();
    surface.set_font(font);
    surface.set_fill(fill);
    surface.fill_text(text, pos);
}

/// Renders the axis frame for a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisRenderer {
    /// Paint and spacing.
    pub style: AxisStyle,
}

impl AxisRenderer {
    /// Creates a renderer with the given style.
    pub fn new(style: AxisStyle) -> Self {
        Self { style }
    }

    /// Draws frame, ticks, gridlines and labels.
    ///
    /// `surface` must already be translated to `mapper.origin()`.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, mapper: &CoordinateMapper) {
        let view = *mapper.view();
        let style = &self.style;
        let xs = x_ticks(&view);
        let ys = y_ticks(&view);
        log::debug!("drawing axes: {} x ticks, {} y ticks", xs.len(), ys.len());

        // The frame stays on the padded edge even when a minimum is positive.
        let frame = view.plot_rect() - mapper.origin().to_vec2();
        let (x_left, x_right) = (frame.x0, frame.x1);
        let (y_top, y_bottom) = (frame.y0, frame.y1);
        let y_last = ys
            .last()
            .map_or(y_top, |v| mapper.to_device_offset(Point::new(0.0, *v)).y);

        surface.begin_path();
        surface.move_to(Point::new(x_left, y_top));
        surface.line_to(Point::new(x_left, y_bottom));
        surface.line_to(Point::new(x_right, y_bottom));
        surface.set_stroke(&style.rule.brush);
        surface.set_line_width(style.rule.stroke_width);
        surface.stroke();

        for (i, v) in xs.iter().copied().enumerate() {
            let x = mapper.to_device_offset(Point::new(v, 0.0)).x;
            self.rule(
                surface,
                Point::new(x, y_bottom + style.tick_size),
                Point::new(x, y_bottom),
            );
            // The first tick coincides with the y axis.
            if i > 0 {
                self.grid(surface, Point::new(x, y_bottom), Point::new(x, y_last));
            }
            draw_tick_label(
                surface,
                Point::new(x, y_bottom + style.label_gap),
                &format_tick(v),
                &style.label_font,
                &style.label_fill,
                LabelOrient::Below,
            );
        }

        for (i, v) in ys.iter().copied().enumerate() {
            // Positive values land above the x axis (negative device y).
            let y = mapper.to_device_offset(Point::new(0.0, v)).y;
            self.rule(
                surface,
                Point::new(x_left - style.tick_size, y),
                Point::new(x_left, y),
            );
            if i > 0 {
                self.grid(surface, Point::new(x_left, y), Point::new(x_right, y));
            }
            draw_tick_label(
                surface,
                Point::new(x_left - style.label_gap, y),
                &format_tick(v),
                &style.label_font,
                &style.label_fill,
                LabelOrient::Left,
            );
        }
    }

    fn rule<S: DrawSurface + ?Sized>(&self, surface: &mut S, from: Point, to: Point) {
        segment(surface, from, to, &self.style.rule.brush, self.style.rule.stroke_width);
    }

    fn grid<S: DrawSurface + ?Sized>(&self, surface: &mut S, from: Point, to: Point) {
        segment(surface, from, to, &self.style.grid.brush, self.style.grid.stroke_width);
    }
}

fn segment<S: DrawSurface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    brush: &Brush,
    width: f64,
) {
    surface.begin_path();
    surface.move_to(from);
    surface.line_to(to);
    surface.set_stroke(brush);
    surface.set_line_width(width);
    surface.stroke();
}
