// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint defaults for axes and shapes.
//!
//! Colors are cosmetic: nothing here affects mapping or hit testing.

use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::TextStyle;

/// Muted gray used for gridlines.
pub const GRID_GRAY: Color = Color::from_rgb8(0xd1, 0xd1, 0xd1);
/// Default circle fill.
pub const ARC_FILL: Color = Color::from_rgb8(0xe7, 0xac, 0x40);
/// Default rectangle fill.
pub const RECT_FILL: Color = Color::from_rgb8(0xfe, 0xa4, 0x00);

/// A paint + width pair for stroked paths (axis lines, ticks, gridlines, outlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Styling for the axis frame, ticks, gridlines and tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Axis frame and tick marks.
    pub rule: StrokeStyle,
    /// Gridlines.
    pub grid: StrokeStyle,
    /// Tick label paint.
    pub label_fill: Brush,
    /// Tick label font.
    pub label_font: TextStyle,
    /// Tick mark length in pixels.
    pub tick_size: f64,
    /// Distance between an axis line and its tick labels in pixels.
    pub label_gap: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            grid: StrokeStyle::solid(GRID_GRAY, 1.0),
            label_fill: Brush::Solid(css::BLACK),
            label_font: TextStyle::new(20.0),
            tick_size: 10.0,
            label_gap: 10.0,
        }
    }
}

/// Styling for scene primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Circle fill.
    pub arc_fill: Brush,
    /// Rectangle fill.
    pub rect_fill: Brush,
    /// Outline stroked around circles and rectangles.
    pub outline: StrokeStyle,
    /// Polyline stroke.
    pub line: StrokeStyle,
}

impl ShapeStyle {
    /// Sets the circle fill.
    pub fn with_arc_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.arc_fill = fill.into();
        self
    }

    /// Sets the rectangle fill.
    pub fn with_rect_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.rect_fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_outline(mut self, outline: StrokeStyle) -> Self {
        self.outline = outline;
        self
    }

    /// Sets the polyline stroke.
    pub fn with_line(mut self, line: StrokeStyle) -> Self {
        self.line = line;
        self
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            arc_fill: Brush::Solid(ARC_FILL),
            rect_fill: Brush::Solid(RECT_FILL),
            outline: StrokeStyle::solid(css::BLACK, 2.0),
            line: StrokeStyle::solid(css::BLACK, 2.0),
        }
    }
}
