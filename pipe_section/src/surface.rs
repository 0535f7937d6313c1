// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface the renderers paint onto.
//!
//! [`DrawSurface`] is an immediate-mode 2D canvas: a current path built with
//! `move_to`/`line_to`/`arc`/`rect`, filled or stroked with the current paint,
//! a translatable origin, and text drawing with measurement. The host owns the
//! surface and lends it to a render call.
//!
//! [`DisplayList`] implements the trait by recording what would be painted, in
//! absolute device pixels. Tests inspect it and the demo turns it into SVG.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

use crate::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// An immediate-mode 2D drawing surface in device pixels.
///
/// Mirrors the HTML canvas 2D context: paint state and the translation are
/// saved and restored together, and path coordinates are transformed when
/// they are added.
pub trait DrawSurface: TextMeasurer {
    /// Pushes the current paint state and transform.
    fn save(&mut self);
    /// Pops the state pushed by the matching [`DrawSurface::save`].
    fn restore(&mut self);
    /// Moves the origin by `offset` in the current frame.
    fn translate(&mut self, offset: Vec2);
    /// Clears `rect` (in untransformed device pixels) to transparent.
    fn clear(&mut self, rect: Rect);

    /// Starts a new, empty path.
    fn begin_path(&mut self);
    /// Closes the current subpath.
    fn close_path(&mut self);
    /// Starts a subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Adds a straight segment to `p`.
    fn line_to(&mut self, p: Point);
    /// Adds a clockwise circular arc between two angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    /// Adds a closed rectangle subpath.
    fn rect(&mut self, rect: Rect);
    /// Fills the current path with the fill paint.
    fn fill(&mut self);
    /// Strokes the current path with the stroke paint and line width.
    fn stroke(&mut self);

    /// Sets the paint used by [`DrawSurface::fill`] and [`DrawSurface::fill_text`].
    fn set_fill(&mut self, brush: &Brush);
    /// Sets the paint used by [`DrawSurface::stroke`].
    fn set_stroke(&mut self, brush: &Brush);
    /// Sets the stroke width in pixels.
    fn set_line_width(&mut self, width: f64);
    /// Sets the font used by [`DrawSurface::fill_text`].
    fn set_font(&mut self, style: &TextStyle);
    /// Draws `text` with its alphabetic baseline starting at `p`.
    fn fill_text(&mut self, text: &str, p: Point);
}

/// One painted item recorded by a [`DisplayList`], in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A region cleared to transparent.
    Clear(Rect),
    /// A filled path.
    Fill {
        /// Path geometry.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
    },
    /// A stroked path.
    Stroke {
        /// Path geometry.
        path: BezPath,
        /// Stroke paint.
        brush: Brush,
        /// Stroke width.
        width: f64,
    },
    /// A line of text.
    Text {
        /// The string drawn.
        text: String,
        /// Baseline start position.
        pos: Point,
        /// Font at draw time.
        style: TextStyle,
        /// Fill paint.
        brush: Brush,
    },
}

#[derive(Clone, Debug)]
struct PaintState {
    transform: Affine,
    fill: Brush,
    stroke: Brush,
    line_width: f64,
    font: TextStyle,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Brush::Solid(css::BLACK),
            stroke: Brush::Solid(css::BLACK),
            line_width: 1.0,
            font: TextStyle::new(10.0),
        }
    }
}

/// A [`DrawSurface`] that records paint operations instead of rasterizing.
#[derive(Clone, Debug)]
pub struct DisplayList<M = HeuristicTextMeasurer> {
    measurer: M,
    state: PaintState,
    saved: Vec<PaintState>,
    path: BezPath,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Creates an empty list that measures text heuristically.
    pub fn new() -> Self {
        Self::with_measurer(HeuristicTextMeasurer)
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> DisplayList<M> {
    /// Creates an empty list using `measurer` for text metrics.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            state: PaintState::default(),
            saved: Vec::new(),
            path: BezPath::new(),
            commands: Vec::new(),
        }
    }

    /// Everything recorded so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops all recorded commands, keeping paint state.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded text draws as `(text, position)` pairs.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, pos, .. } => Some((text.as_str(), *pos)),
            _ => None,
        })
    }

    /// Recorded stroked paths.
    pub fn strokes(&self) -> impl Iterator<Item = &BezPath> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { path, .. } => Some(path),
            _ => None,
        })
    }

    /// Recorded filled paths.
    pub fn fills(&self) -> impl Iterator<Item = &BezPath> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { path, .. } => Some(path),
            _ => None,
        })
    }

    fn has_current_point(&self) -> bool {
        !self.path.elements().is_empty()
    }
}

impl<M: TextMeasurer> TextMeasurer for DisplayList<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}

impl<M: TextMeasurer> DrawSurface for DisplayList<M> {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine::translate(offset);
    }

    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn begin_path(&mut self) {
        self.path.truncate(0);
    }

    fn close_path(&mut self) {
        if self.has_current_point() {
            self.path.close_path();
        }
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(self.state.transform * p);
    }

    fn line_to(&mut self, p: Point) {
        if self.has_current_point() {
            self.path.line_to(self.state.transform * p);
        } else {
            self.move_to(p);
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let start = center + Vec2::from_angle(start_angle) * radius;
        self.line_to(start);
        let arc = kurbo::Arc::new(
            center,
            Vec2::new(radius, radius),
            start_angle,
            end_angle - start_angle,
            0.0,
        );
        let transform = self.state.transform;
        arc.to_cubic_beziers(0.1, |p1, p2, p3| {
            self.path.curve_to(transform * p1, transform * p2, transform * p3);
        });
    }

    fn rect(&mut self, rect: Rect) {
        self.move_to(Point::new(rect.x0, rect.y0));
        self.line_to(Point::new(rect.x1, rect.y0));
        self.line_to(Point::new(rect.x1, rect.y1));
        self.line_to(Point::new(rect.x0, rect.y1));
        self.path.close_path();
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            brush: self.state.fill.clone(),
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            brush: self.state.stroke.clone(),
            width: self.state.line_width,
        });
    }

    fn set_fill(&mut self, brush: &Brush) {
        self.state.fill = brush.clone();
    }

    fn set_stroke(&mut self, brush: &Brush) {
        self.state.stroke = brush.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.state.font = style.clone();
    }

    fn fill_text(&mut self, text: &str, p: Point) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            pos: self.state.transform * p,
            style: self.state.font.clone(),
            brush: self.state.fill.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;

    #[test]
    fn translation_applies_to_points_and_text() {
        let mut list = DisplayList::new();
        list.translate(Vec2::new(100.0, 50.0));
        list.begin_path();
        list.move_to(Point::new(0.0, 0.0));
        list.line_to(Point::new(10.0, -10.0));
        list.stroke();
        list.fill_text("0", Point::new(1.0, 2.0));

        let path = list.strokes().next().unwrap();
        let bbox = path.bounding_box();
        assert_eq!(bbox, Rect::new(100.0, 40.0, 110.0, 50.0));
        assert_eq!(list.texts().next(), Some(("0", Point::new(101.0, 52.0))));
    }

    #[test]
    fn restore_undoes_translation() {
        let mut list = DisplayList::new();
        list.save();
        list.translate(Vec2::new(5.0, 5.0));
        list.restore();
        list.fill_text("a", Point::ZERO);
        assert_eq!(list.texts().next(), Some(("a", Point::ZERO)));
        // Unbalanced restores are ignored.
        list.restore();
    }

    #[test]
    fn full_arc_covers_circle_bounds() {
        let mut list = DisplayList::new();
        list.begin_path();
        list.arc(Point::new(10.0, 10.0), 5.0, 0.0, core::f64::consts::TAU);
        list.fill();
        let bbox = list.fills().next().unwrap().bounding_box();
        assert!((bbox.x0 - 5.0).abs() < 1e-3);
        assert!((bbox.x1 - 15.0).abs() < 1e-3);
        assert!((bbox.y0 - 5.0).abs() < 1e-3);
        assert!((bbox.y1 - 15.0).abs() < 1e-3);
    }

    #[test]
    fn begin_path_discards_previous_geometry() {
        let mut list = DisplayList::new();
        list.begin_path();
        list.rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.begin_path();
        list.move_to(Point::new(20.0, 20.0));
        list.line_to(Point::new(30.0, 20.0));
        list.stroke();
        let bbox = list.strokes().next().unwrap().bounding_box();
        assert_eq!(bbox, Rect::new(20.0, 20.0, 30.0, 20.0));
    }
}
