// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through graph configuration.

use core::num::NonZeroU32;

use kurbo::{Cap, Join, Stroke};

use crate::error::ConfigError;

/// Horizontal sample spacing and stroke width shared by both graph kinds.
///
/// The engine assumes no defaults for these values; callers always supply them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
    x_step: NonZeroU32,
    stroke_width: f64,
}

impl GraphConfig {
    /// Creates a config, rejecting a zero `x_step` and a negative or non-finite `stroke_width`.
    pub fn new(x_step: u32, stroke_width: f64) -> Result<Self, ConfigError> {
        let x_step = NonZeroU32::new(x_step).ok_or(ConfigError::ZeroXStep)?;
        if !(stroke_width.is_finite() && stroke_width >= 0.0) {
            return Err(ConfigError::InvalidStrokeWidth(stroke_width));
        }
        Ok(Self {
            x_step,
            stroke_width,
        })
    }

    /// Pixel distance between consecutive samples.
    pub fn x_step(&self) -> NonZeroU32 {
        self.x_step
    }

    /// Stroke width for series lines.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Stroke style for series lines: round caps and round joins at the configured width.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    }
}
