// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for generated marks.
//!
//! Marks are emitted in paint order already; the `z_index` lets renderers that sort (for example
//! by `(z_index, emission order)`) keep the same result. Stacked layers are spaced by
//! [`LAYER_STRIDE`] so that each layer's fill and stroke sit above every lower layer.

/// Filled series marks (stacked areas).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines).
pub const SERIES_STROKE: i32 = 10;
/// Distance between consecutive stacked layers.
pub const LAYER_STRIDE: i32 = 20;
/// Value labels, drawn above every series layer.
pub const VALUE_LABELS: i32 = i32::MAX;

/// Returns the z-index of `base` (a series constant) for stacked layer `layer`.
pub fn layer_z_index(layer: usize, base: i32) -> i32 {
    let layer = i32::try_from(layer).unwrap_or(i32::MAX);
    layer.saturating_mul(LAYER_STRIDE).saturating_add(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_layers_paint_above_lower_strokes() {
        assert!(layer_z_index(0, SERIES_FILL) < layer_z_index(0, SERIES_STROKE));
        assert!(layer_z_index(0, SERIES_STROKE) < layer_z_index(1, SERIES_FILL));
        assert!(layer_z_index(usize::MAX, SERIES_STROKE) <= VALUE_LABELS);
    }
}
