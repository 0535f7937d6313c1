// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS color strings for canvas paint styles.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use peniko::{Brush, Color};

/// Paint used for brushes the canvas backend cannot express.
pub const FALLBACK_PAINT: &str = "black";

/// Formats a color as `#rrggbb`, or `rgba(r, g, b, a)` when translucent.
pub fn color_css(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

/// Converts a brush to a canvas `fillStyle`/`strokeStyle` string.
///
/// Only solid colors are supported; other brushes paint black.
pub fn brush_css(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => color_css(*color),
        _ => {
            log::debug!("non-solid brush painted as {FALLBACK_PAINT}");
            String::from(FALLBACK_PAINT)
        }
    }
}
