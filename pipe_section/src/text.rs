// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for tick labels.
//!
//! Tick labels are positioned from their measured advance width: x labels are
//! centered under their tick, y labels are right-aligned against it. Browser
//! surfaces answer with canvas `measureText`; everything else can fall back to
//! [`HeuristicTextMeasurer`].

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// Measures single-line text.
pub trait TextMeasurer {
    /// Measure `text` as a single line in the given style.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Font settings used for labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in device pixels.
    pub font_size: f64,
    /// Font family name, as understood by the drawing backend.
    pub font_family: Arc<str>,
}

impl TextStyle {
    /// Creates an Arial style of the given size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: Arc::from("Arial"),
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: &str) -> Self {
        self.font_family = Arc::from(family);
        self
    }

    /// Returns a CSS font shorthand such as `20px Arial`.
    #[must_use]
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Distance from the baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of typical glyphs.
    pub descent: f64,
}

/// Assumes ~0.6em per glyph with the baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn css_font_uses_pixel_size_and_family() {
        assert_eq!(TextStyle::new(20.0).css_font(), "20px Arial");
        assert_eq!(
            TextStyle::new(12.5).with_family("monospace").css_font(),
            "12.5px monospace"
        );
    }

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let style = TextStyle::new(10.0);
        let one = HeuristicTextMeasurer.measure("1", &style);
        let three = HeuristicTextMeasurer.measure("-10", &style);
        assert!((one.advance_width - 6.0).abs() < 1e-9);
        assert!((three.advance_width - 18.0).abs() < 1e-9);
    }
}
