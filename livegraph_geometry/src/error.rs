// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-contract errors.
//!
//! Degenerate data (empty windows, flat series, all-zero stacks) is never an error; those inputs
//! produce the empty or flat results documented on each normalizer.

/// Errors returned when a stacked series group violates its contract.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StackError {
    /// The group has more layers than there are palette colors to draw them with.
    #[error("series group has {layers} layers but the palette only has {palette} colors")]
    TooManyLayers {
        /// Number of layers in the group.
        layers: usize,
        /// Number of palette colors available.
        palette: usize,
    },
    /// A sample is negative (or not a finite number).
    #[error("sample {value} at layer {layer}, index {index} must be finite and non-negative")]
    InvalidSample {
        /// Layer (series index) holding the sample.
        layer: usize,
        /// Position of the sample within its layer.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A stacked total grew past the largest finite `f64`.
    #[error("stacked total at index {index} overflows to infinity")]
    TotalOverflow {
        /// Position (within the window) of the first overflowing total.
        index: usize,
    },
}

/// Errors returned when building a [`GraphConfig`](crate::GraphConfig).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The horizontal step between samples was zero.
    #[error("x step must be greater than zero")]
    ZeroXStep,
    /// The stroke width was negative or not finite.
    #[error("stroke width {0} must be finite and non-negative")]
    InvalidStrokeWidth(f64),
}
