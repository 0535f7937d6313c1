// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MAX_DECIMALS: usize = 6;

/// Number of decimals needed to print `v` exactly, capped at six.
pub(crate) fn decimals(v: f64) -> usize {
    if !v.is_finite() {
        return 0;
    }
    let mut scaled = v.abs();
    for d in 0..MAX_DECIMALS {
        if (scaled - scaled.round()).abs() <= 1e-9 * scaled.max(1.0) {
            return d;
        }
        scaled *= 10.0;
    }
    MAX_DECIMALS
}

/// Rounds `v` to `decimals` places, removing accumulated float drift.
pub(crate) fn snap(v: f64, decimals: usize) -> f64 {
    let mut factor = 1.0;
    for _ in 0..decimals {
        factor *= 10.0;
    }
    let snapped = (v * factor).round() / factor;
    // Avoid printing "-0".
    if snapped == 0.0 { 0.0 } else { snapped }
}

/// Formats a tick value as its shortest decimal form, up to six places.
///
/// Tick values are accumulated as `min + i * scale`, so they are snapped
/// first: `0.1 + 0.2` prints as `0.3`.
pub fn format_tick(value: f64) -> String {
    let v = snap(value, MAX_DECIMALS);
    format!("{:.*}", decimals(v), v)
}
