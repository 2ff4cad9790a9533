// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport dimensions supplied by the host layout.

use kurbo::Size;

/// Width and height of the plot area in pixel-equivalent units.
///
/// Hosts read this once per render pass. A zero (or otherwise unusable) dimension means the
/// layout has not been measured yet, and every normalizer returns its empty result.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Plot width.
    pub width: f64,
    /// Plot height.
    pub height: f64,
}

impl Viewport {
    /// A viewport that has not been measured yet.
    pub const UNMEASURED: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both dimensions are finite and positive.
    pub fn is_measurable(&self) -> bool {
        is_measured(self.width) && is_measured(self.height)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

pub(crate) fn is_measured(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
