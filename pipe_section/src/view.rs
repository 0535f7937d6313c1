// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas geometry and axis density.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;

use crate::ViewConfigError;

/// Canvas size, padding and the logical window drawn inside it.
///
/// `scale` is the logical distance between two ticks and `ratio` the pixel
/// distance between them, so one logical unit is `ratio / scale` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Empty border kept around the plot on every side, in pixels.
    pub padding: f64,
    /// Logical units per tick.
    pub scale: f64,
    /// Pixels per tick.
    pub ratio: f64,
    /// Smallest logical x drawn.
    pub min_x: f64,
    /// Smallest logical y drawn.
    pub min_y: f64,
}

impl ViewConfig {
    /// Most tick intervals [`ViewConfig::validate`] accepts along either axis.
    pub const MAX_TICKS: usize = 10_000;

    /// Creates a view over a canvas of the given size.
    ///
    /// Defaults: `padding = 20`, `scale = 1`, `ratio = 20`, `min_x = min_y = 0`.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            padding: 20.0,
            scale: 1.0,
            ratio: 20.0,
            min_x: 0.0,
            min_y: 0.0,
        }
    }

    /// Sets the padding in pixels.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the logical units per tick.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the pixels per tick.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the lower-left corner of the logical window.
    pub fn with_min(mut self, min_x: f64, min_y: f64) -> Self {
        self.min_x = min_x;
        self.min_y = min_y;
        self
    }

    /// Checks the invariants the mapper relies on.
    pub fn validate(&self) -> Result<(), ViewConfigError> {
        let fields = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("padding", self.padding),
            ("scale", self.scale),
            ("ratio", self.ratio),
            ("min_x", self.min_x),
            ("min_y", self.min_y),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ViewConfigError::NonFinite { field: *field });
        }
        if self.scale <= 0.0 {
            return Err(ViewConfigError::NonPositiveScale(self.scale));
        }
        if self.ratio <= 0.0 {
            return Err(ViewConfigError::NonPositiveRatio(self.ratio));
        }
        if self.padding < 0.0 {
            return Err(ViewConfigError::NegativePadding(self.padding));
        }
        let (width, height) = (self.visible_width(), self.visible_height());
        if width <= 0.0 || height <= 0.0 {
            return Err(ViewConfigError::EmptyPlotArea { width, height });
        }
        let count = self.x_tick_count().max(self.y_tick_count());
        if count > Self::MAX_TICKS {
            return Err(ViewConfigError::TooManyTicks { count });
        }
        Ok(())
    }

    /// Width of the padded plot area in pixels.
    pub fn visible_width(&self) -> f64 {
        self.canvas_width - 2.0 * self.padding
    }

    /// Height of the padded plot area in pixels.
    pub fn visible_height(&self) -> f64 {
        self.canvas_height - 2.0 * self.padding
    }

    /// Pixels per logical unit.
    pub fn px_per_unit(&self) -> f64 {
        self.ratio / self.scale
    }

    /// Number of whole tick intervals that fit along x.
    pub fn x_tick_count(&self) -> usize {
        tick_count(self.visible_width(), self.ratio)
    }

    /// Number of whole tick intervals that fit along y.
    pub fn y_tick_count(&self) -> usize {
        tick_count(self.visible_height(), self.ratio)
    }

    /// Largest logical x covered by the visible width.
    pub fn visible_max_x(&self) -> f64 {
        self.min_x + self.visible_width() / self.px_per_unit()
    }

    /// Largest logical y covered by the visible height.
    pub fn visible_max_y(&self) -> f64 {
        self.min_y + self.visible_height() / self.px_per_unit()
    }

    /// The padded plot rectangle in device pixels.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.canvas_width - self.padding,
            self.canvas_height - self.padding,
        )
    }

    /// The whole canvas in device pixels.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "tick counts are bounded by the canvas size in pixels"
)]
fn tick_count(length: f64, ratio: f64) -> usize {
    let n = (length / ratio).floor();
    if !n.is_finite() || n < 0.0 {
        return 0;
    }
    n as usize
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let view = ViewConfig::new(400.0, 400.0);
        assert_eq!(view.validate(), Ok(()));
        assert_eq!(view.px_per_unit(), 20.0);
        assert_eq!(view.visible_width(), 360.0);
    }

    #[test]
    fn tick_count_is_floored() {
        let view = ViewConfig::new(400.0, 300.0).with_ratio(25.0);
        // 360 / 25 = 14.4, 260 / 25 = 10.4
        assert_eq!(view.x_tick_count(), 14);
        assert_eq!(view.y_tick_count(), 10);
    }

    #[test]
    fn visible_range_follows_scale() {
        let view = ViewConfig::new(400.0, 400.0)
            .with_scale(0.5)
            .with_ratio(20.0)
            .with_min(-2.0, -3.0);
        // 360 px at 40 px/unit = 9 units.
        assert!((view.visible_max_x() - 7.0).abs() < 1e-9);
        assert!((view.visible_max_y() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn tick_count_is_capped_for_tiny_ratios() {
        let view = ViewConfig::new(400.0, 400.0).with_ratio(1e-12);
        assert!(matches!(
            view.validate(),
            Err(ViewConfigError::TooManyTicks { .. })
        ));
        // One tick per pixel on a 10k canvas is still accepted.
        let wide = ViewConfig::new(10_040.0, 400.0)
            .with_padding(20.0)
            .with_ratio(1.0);
        assert_eq!(wide.x_tick_count(), ViewConfig::MAX_TICKS);
        assert_eq!(wide.validate(), Ok(()));
    }

    #[test]
    fn plot_rect_is_the_padded_area() {
        let view = ViewConfig::new(400.0, 300.0).with_padding(25.0);
        assert_eq!(view.plot_rect(), Rect::new(25.0, 25.0, 375.0, 275.0));
        assert_eq!(view.canvas_rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        let base = ViewConfig::new(400.0, 400.0);
        assert_eq!(
            base.with_scale(0.0).validate(),
            Err(ViewConfigError::NonPositiveScale(0.0))
        );
        assert_eq!(
            base.with_ratio(-1.0).validate(),
            Err(ViewConfigError::NonPositiveRatio(-1.0))
        );
        assert_eq!(
            base.with_padding(-5.0).validate(),
            Err(ViewConfigError::NegativePadding(-5.0))
        );
        assert_eq!(
            base.with_padding(200.0).validate(),
            Err(ViewConfigError::EmptyPlotArea {
                width: 0.0,
                height: 0.0
            })
        );
        assert_eq!(
            base.with_ratio(0.031_25).validate(),
            Err(ViewConfigError::TooManyTicks { count: 11_520 })
        );
        assert_eq!(
            base.with_min(f64::NAN, 0.0).validate(),
            Err(ViewConfigError::NonFinite { field: "min_x" })
        );
    }
}
