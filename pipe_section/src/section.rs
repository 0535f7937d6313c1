// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pipe section diagram: configuration, scene, rendering and click dispatch.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::hit_test::Hit;
use crate::render::render_scene;
use crate::{
    AxisRenderer, AxisStyle, CoordinateMapper, DrawSurface, HitTester, LineHitTest, Primitive,
    Scene, ShapeStyle, ViewConfig, ViewConfigError,
};

/// Passed to the click callback when a click lands on a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent<'a> {
    /// The primitive under the click.
    pub primitive: &'a Primitive,
    /// Its position in the scene.
    pub index: usize,
    /// The click in device pixels, as delivered by the host.
    pub point: Point,
    /// The click in logical units, rounded to two decimals.
    pub logical: Point,
}

/// Callback registered with [`PipeSection::on_click`].
pub type ClickCallback = Box<dyn FnMut(ClickEvent<'_>)>;

/// A rendered cross-section diagram that answers clicks.
///
/// The section owns its configuration and scene; drawing surfaces are lent
/// to [`PipeSection::render`] by the host for the duration of the call.
pub struct PipeSection {
    mapper: CoordinateMapper,
    scene: Scene,
    axes: AxisRenderer,
    shapes: ShapeStyle,
    line_hit: LineHitTest,
    on_click: Option<ClickCallback>,
    dirty: bool,
}

impl fmt::Debug for PipeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeSection")
            .field("mapper", &self.mapper)
            .field("scene", &self.scene)
            .field("axes", &self.axes)
            .field("shapes", &self.shapes)
            .field("line_hit", &self.line_hit)
            .field("on_click", &self.on_click.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PipeSection {
    /// Creates a section with default styling and the default line hit test.
    pub fn new(view: ViewConfig, scene: Scene) -> Result<Self, ViewConfigError> {
        view.validate()?;
        Ok(Self {
            mapper: CoordinateMapper::new(view),
            scene,
            axes: AxisRenderer::default(),
            shapes: ShapeStyle::default(),
            line_hit: LineHitTest::default(),
            on_click: None,
            dirty: true,
        })
    }

    /// Creates a section and renders it onto `surface` straight away.
    pub fn draw<S: DrawSurface + ?Sized>(
        view: ViewConfig,
        scene: Scene,
        surface: &mut S,
    ) -> Result<Self, ViewConfigError> {
        let mut section = Self::new(view, scene)?;
        section.render(surface);
        Ok(section)
    }

    /// Sets the polyline hit-test policy.
    pub fn with_line_hit_test(mut self, line_hit: LineHitTest) -> Self {
        self.set_line_hit_test(line_hit);
        self
    }

    /// Sets the primitive styling.
    pub fn with_shape_style(mut self, style: ShapeStyle) -> Self {
        self.set_shape_style(style);
        self
    }

    /// Sets the axis styling.
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.set_axis_style(style);
        self
    }

    /// The current view.
    pub fn view(&self) -> &ViewConfig {
        self.mapper.view()
    }

    /// The scene being drawn.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The mapper for the current view.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Whether a change since the last render has not been drawn yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces the view. The origin is recomputed.
    pub fn set_view(&mut self, view: ViewConfig) -> Result<(), ViewConfigError> {
        view.validate()?;
        log::debug!("view changed: {view:?}");
        self.mapper = CoordinateMapper::new(view);
        self.dirty = true;
        Ok(())
    }

    /// Replaces the scene.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.dirty = true;
    }

    /// Replaces the polyline hit-test policy.
    pub fn set_line_hit_test(&mut self, line_hit: LineHitTest) {
        self.line_hit = line_hit;
        self.dirty = true;
    }

    /// Replaces the primitive styling.
    pub fn set_shape_style(&mut self, style: ShapeStyle) {
        self.shapes = style;
        self.dirty = true;
    }

    /// Replaces the axis styling.
    pub fn set_axis_style(&mut self, style: AxisStyle) {
        self.axes = AxisRenderer::new(style);
        self.dirty = true;
    }

    /// Clears the canvas and draws axes and primitives.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let view = self.mapper.view();
        log::debug!(
            "rendering {}x{} section, origin {:?}",
            view.canvas_width,
            view.canvas_height,
            self.mapper.origin()
        );
        surface.clear(view.canvas_rect());
        surface.save();
        surface.translate(self.mapper.origin().to_vec2());
        self.axes.render(surface, &self.mapper);
        render_scene(surface, &self.mapper, &self.scene, &self.shapes);
        surface.restore();
        self.dirty = false;
    }

    /// Renders only if something changed since the last render.
    ///
    /// Returns whether a render happened.
    pub fn render_if_dirty<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.dirty {
            return false;
        }
        self.render(surface);
        true
    }

    /// A hit tester for the current view and policy.
    pub fn hit_tester(&self) -> HitTester {
        HitTester::new(self.mapper, self.line_hit)
    }

    /// Finds the primitive under a device point without invoking the callback.
    pub fn locate(&self, device: Point) -> Option<Hit<'_>> {
        self.hit_tester().locate(device, &self.scene)
    }

    /// Registers the click callback, replacing any previous one.
    ///
    /// The callback only runs for clicks that land on a primitive.
    pub fn on_click(&mut self, callback: impl FnMut(ClickEvent<'_>) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    /// Removes the click callback.
    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    /// Handles a click at a device point relative to the surface's top-left
    /// corner.
    ///
    /// Returns the index of the primitive hit, if any.
    pub fn handle_click(&mut self, device: Point) -> Option<usize> {
        let tester = self.hit_tester();
        let hit = tester.locate(device, &self.scene)?;
        if let Some(callback) = self.on_click.as_mut() {
            callback(ClickEvent {
                primitive: hit.primitive,
                index: hit.index,
                point: device,
                logical: hit.logical,
            });
        }
        Some(hit.index)
    }
}
