// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive pipe cross-section diagrams.
//!
//! A [`PipeSection`] draws a Cartesian frame with ticks, gridlines and
//! labels, then draws a [`Scene`] of primitives (circles, rectangles and
//! polylines) in logical units on top of it. Clicks in device pixels are
//! mapped back to logical units and tested against the primitives, and a
//! registered callback hears about the first primitive hit.
//!
//! - [`ViewConfig`] describes the canvas, padding and the logical window.
//! - [`CoordinateMapper`] converts between logical units and device pixels.
//! - [`DrawSurface`] is the canvas the host lends to a render call;
//!   [`DisplayList`] records draws for tests and offline output.
//! - [`HitTester`] answers "what is under this point?".
//!
//! ```
//! use pipe_section::{DisplayList, PipeSection, Primitive, Scene, ViewConfig};
//! use kurbo::Point;
//!
//! let view = ViewConfig::new(400.0, 400.0).with_min(-5.0, -5.0);
//! let scene = Scene::new()
//!     .with(Primitive::arc((0.0, 0.0), 2.0))
//!     .with(Primitive::rect((3.0, 4.0), 2.0, 1.0));
//!
//! let mut canvas = DisplayList::new();
//! let mut section = PipeSection::draw(view, scene, &mut canvas).unwrap();
//! assert_eq!(section.mapper().origin(), Point::new(120.0, 280.0));
//! assert_eq!(section.handle_click(Point::new(130.0, 270.0)), Some(0));
//! ```
//!
//! The crate is `no_std` with `alloc`. Float math goes through `libm` unless
//! the `std` feature is enabled.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod axis;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hit_test;
mod mapper;
mod primitive;
mod render;
mod section;
mod style;
mod surface;
mod text;
mod view;

pub use axis::{AxisRenderer, LabelOrient, draw_tick_label, tick_values, x_ticks, y_ticks};
pub use error::ViewConfigError;
pub use format::format_tick;
pub use hit_test::{
    Hit, HitTester, LineHitTest, arc_contains, line_hit_segment, line_hit_slope, rect_contains,
};
pub use mapper::{CoordinateMapper, compute_origin, round2};
pub use primitive::{Primitive, PrimitiveKind, Scene};
pub use render::{render_primitive, render_scene};
pub use section::{ClickCallback, ClickEvent, PipeSection};
pub use style::{ARC_FILL, AxisStyle, GRID_GRAY, RECT_FILL, ShapeStyle, StrokeStyle};
pub use surface::{DisplayList, DrawCommand, DrawSurface};
pub use text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use view::ViewConfig;
