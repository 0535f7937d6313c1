// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical <-> device coordinate mapping.
//!
//! Logical space is the diagram's own Cartesian space: y grows upward and one
//! tick spans `scale` units. Device space is canvas pixels: y grows downward
//! and one tick spans `ratio` pixels.
//!
//! Drawing happens in a frame translated to the [origin](CoordinateMapper::origin),
//! so the renderer only needs [`CoordinateMapper::to_device_offset`] (scale and
//! flip y). Clicks arrive in absolute canvas pixels and go back through
//! [`CoordinateMapper::to_logical`], which rounds to two decimals.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Vec2};

use crate::ViewConfig;

/// Rounds to two decimal places.
///
/// Click coordinates are compared after this rounding so that hit results do
/// not depend on sub-hundredth pixel noise.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Computes the device pixel that logical `(0, 0)` maps to.
///
/// With `min_x >= 0` the origin sits on the left padding edge; with a negative
/// `min_x` it moves right by `|min_x|` logical units so negative x stays
/// visible. With `min_y >= 0` the origin sits on the bottom padding edge; with
/// a negative `min_y` it moves up by `|min_y|` logical units.
pub fn compute_origin(view: &ViewConfig) -> Point {
    let k = view.px_per_unit();
    let visible_height = view.visible_height();

    let mut x = view.padding;
    let mut y = view.padding + visible_height;
    if view.min_x < 0.0 {
        x = view.padding + round2(view.min_x.abs() * k);
    }
    if view.min_y < 0.0 {
        y = visible_height - round2(view.min_y.abs() * k) + view.padding;
    }
    Point::new(x, y)
}

/// Converts between logical diagram units and device pixels for one view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    view: ViewConfig,
    origin: Point,
}

impl CoordinateMapper {
    /// Creates a mapper and caches the origin for `view`.
    pub fn new(view: ViewConfig) -> Self {
        Self {
            origin: compute_origin(&view),
            view,
        }
    }

    /// The view this mapper was built from.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Device pixel of logical `(0, 0)`.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixels per logical unit (`ratio / scale`).
    pub fn px_per_unit(&self) -> f64 {
        self.view.px_per_unit()
    }

    /// Maps a logical point into the origin-translated device frame.
    ///
    /// Coordinates are scaled by `ratio / scale` and y is negated; the origin
    /// translation is left to the surface.
    pub fn to_device_offset(&self, p: Point) -> Point {
        let k = self.px_per_unit();
        Point::new(p.x * k, -p.y * k)
    }

    /// Maps a logical point to absolute device pixels.
    pub fn to_device(&self, p: Point) -> Point {
        self.origin + self.to_device_offset(p).to_vec2()
    }

    /// Maps absolute device pixels to logical units, rounded to two decimals.
    pub fn to_logical(&self, device: Point) -> Point {
        let d = self.device_delta(device);
        Point::new(round2(d.x), -round2(d.y))
    }

    /// Maps absolute device pixels to logical units without rounding.
    pub fn to_logical_exact(&self, device: Point) -> Point {
        let d = self.device_delta(device);
        Point::new(d.x, -d.y)
    }

    /// Converts a logical length (radius, width) to pixels.
    pub fn length_to_device(&self, length: f64) -> f64 {
        length * self.px_per_unit()
    }

    /// Converts a pixel length to logical units.
    pub fn length_to_logical(&self, length: f64) -> f64 {
        length / self.px_per_unit()
    }

    fn device_delta(&self, device: Point) -> Vec2 {
        (device - self.origin) / self.view.ratio * self.view.scale
    }
}
