// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML canvas backend for `pipe_section`.
//!
//! On `wasm32` targets this crate provides [`CanvasSurface`], a
//! [`pipe_section::DrawSurface`] over a `CanvasRenderingContext2d` that
//! measures labels with `measureText`, plus helpers to forward canvas clicks
//! to a [`pipe_section::PipeSection`] and to route `log` output to the
//! browser console.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds only expose the CSS conversion helpers.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod canvas;
mod css;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, ClickListener, attach_click, init_logging};
pub use css::{FALLBACK_PAINT, brush_css, color_css};
