// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CanvasRenderingContext2d` drawing surface and click wiring.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::{Point, Rect, Vec2};
use peniko::Brush;
use pipe_section::{DrawSurface, PipeSection, TextMeasurer, TextMetrics, TextStyle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::brush_css;

/// A [`DrawSurface`] backed by an HTML canvas 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wraps an existing 2D context.
    #[must_use]
    pub fn from_context(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Acquires the 2D context of `canvas`.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("pipe_section_web: missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Looks up a canvas element by id and acquires its 2D context.
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let canvas = canvas_by_id(id)?;
        Self::from_canvas(&canvas)
    }

    /// The wrapped context.
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl TextMeasurer for CanvasSurface {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.ctx.save();
        self.ctx.set_font(&style.css_font());
        let metrics = self.ctx.measure_text(text);
        self.ctx.restore();
        let metrics = match metrics {
            Ok(m) => m,
            Err(_) => return pipe_section::HeuristicTextMeasurer.measure(text, style),
        };

        // Older engines report zero bounding boxes; treat zeros as unknown.
        let ascent = metrics.actual_bounding_box_ascent();
        let descent = metrics.actual_bounding_box_descent();
        TextMetrics {
            advance_width: metrics.width(),
            ascent: if ascent > 0.0 {
                ascent
            } else {
                0.8 * style.font_size
            },
            descent: if descent > 0.0 {
                descent
            } else {
                0.2 * style.font_size
            },
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        report(self.ctx.translate(offset.x, offset.y));
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        report(self.ctx.arc(center.x, center.y, radius, start_angle, end_angle));
    }

    fn rect(&mut self, rect: Rect) {
        self.ctx.rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill(&mut self, brush: &Brush) {
        self.ctx.set_fill_style_str(&brush_css(brush));
    }

    fn set_stroke(&mut self, brush: &Brush) {
        self.ctx.set_stroke_style_str(&brush_css(brush));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.ctx.set_font(&style.css_font());
    }

    fn fill_text(&mut self, text: &str, p: Point) {
        report(self.ctx.fill_text(text, p.x, p.y));
    }
}

/// Keeps a canvas click listener registered while alive.
///
/// Dropping it removes the listener. Call [`ClickListener::forget`] to keep
/// it for the lifetime of the page.
#[derive(Debug)]
pub struct ClickListener {
    canvas: HtmlCanvasElement,
    closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl ClickListener {
    /// Leaks the listener so it stays registered after this handle is gone.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            report(
                self.canvas
                    .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
            );
        }
    }
}

/// Forwards clicks on `canvas` to [`PipeSection::handle_click`].
///
/// Click positions are taken from `offsetX`/`offsetY`, relative to the
/// canvas' top-left corner.
pub fn attach_click(
    canvas: &HtmlCanvasElement,
    section: Rc<RefCell<PipeSection>>,
) -> Result<ClickListener, JsValue> {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let point = Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()));
        match section.try_borrow_mut() {
            Ok(mut section) => {
                section.handle_click(point);
            }
            Err(_) => log::warn!("click at {point:?} dropped: section is busy"),
        }
    });
    canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok(ClickListener {
        canvas: canvas.clone(),
        closure: Some(closure),
    })
}

/// Routes `log` output to the browser console and installs a panic hook.
///
/// Calling it more than once is harmless.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(level);
}

fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("pipe_section_web: missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("pipe_section_web: missing document"))?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str("pipe_section_web: no element with that id"))?;
    element.dyn_into::<HtmlCanvasElement>().map_err(JsValue::from)
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("canvas call failed: {err:?}");
    }
}
