// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned when a [`ViewConfig`](crate::ViewConfig) cannot be used.

use core::fmt;

/// Reasons a view configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewConfigError {
    /// A field is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `scale` (logical units per tick) must be positive.
    NonPositiveScale(f64),
    /// `ratio` (pixels per tick) must be positive.
    NonPositiveRatio(f64),
    /// `padding` must not be negative.
    NegativePadding(f64),
    /// The canvas leaves no drawable area once padding is removed.
    EmptyPlotArea {
        /// Visible width in pixels.
        width: f64,
        /// Visible height in pixels.
        height: f64,
    },
    /// `ratio` is so small that the axes would need more than
    /// [`ViewConfig::MAX_TICKS`](crate::ViewConfig::MAX_TICKS) ticks.
    TooManyTicks {
        /// Tick intervals along the denser axis.
        count: usize,
    },
}

impl fmt::Display for ViewConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "`{field}` must be a finite number"),
            Self::NonPositiveScale(v) => write!(f, "scale must be positive, got {v}"),
            Self::NonPositiveRatio(v) => write!(f, "ratio must be positive, got {v}"),
            Self::NegativePadding(v) => write!(f, "padding must not be negative, got {v}"),
            Self::EmptyPlotArea { width, height } => {
                write!(f, "padded plot area is empty ({width}x{height})")
            }
            Self::TooManyTicks { count } => {
                write!(f, "ratio yields {count} ticks per axis, too many to draw")
            }
        }
    }
}

impl core::error::Error for ViewConfigError {}
