// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked-area graphs over a group of non-negative series.

extern crate alloc;

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroU32;

use kurbo::Point;
use peniko::{Brush, Color};

use crate::config::GraphConfig;
use crate::error::StackError;
use crate::mark::{Mark, MarkKind, ValueLabel};
use crate::palette::{DEFAULT_AREA_PALETTE, DEFAULT_FILL_ALPHA};
use crate::path::Path;
use crate::viewport::Viewport;
use crate::window::window_group;
use crate::z_order;

/// One composited layer of a stacked graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedLayer {
    /// Cumulative values: this layer's samples plus every layer below it.
    pub values: Vec<f64>,
    /// Upper edge of the layer's area.
    pub stroke: Path,
    /// Area polygon: `stroke` forward, then the lower boundary in reverse.
    ///
    /// The lower boundary is the previous layer's stroke, or the baseline for the bottom layer.
    /// The closing edge is implied.
    pub fill: Path,
}

/// Output of [`normalize_stack`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackNormalization {
    /// Layers bottom-to-top. Empty when there was nothing to draw.
    pub layers: Vec<StackedLayer>,
    /// Largest cumulative value of the top layer; this is the value drawn at `y = 0`.
    pub max_value: Option<f64>,
}

/// Checks the stacked-group contract.
///
/// The group may not have more layers than `palette_size`, and every sample must be finite and
/// non-negative. The first violation found is returned.
pub fn validate_group<S: AsRef<[f64]>>(
    group: &[S],
    palette_size: usize,
) -> Result<(), StackError> {
    if group.len() > palette_size {
        tracing::debug!(
            layers = group.len(),
            palette_size,
            "rejected stacked group: more layers than colors"
        );
        return Err(StackError::TooManyLayers {
            layers: group.len(),
            palette: palette_size,
        });
    }
    for (layer, series) in group.iter().enumerate() {
        let invalid = series
            .as_ref()
            .iter()
            .position(|v| !(v.is_finite() && *v >= 0.0));
        if let Some(index) = invalid {
            let value = series.as_ref()[index];
            tracing::debug!(layer, index, value, "rejected stacked group: invalid sample");
            return Err(StackError::InvalidSample {
                layer,
                index,
                value,
            });
        }
    }
    Ok(())
}

/// Running elementwise sums of `group`, bottom-to-top.
///
/// Every output row has the length of the bottom layer. Positions missing from a shorter layer
/// count as `0`; positions past the bottom layer's length are ignored.
pub fn cumulative_sums<S: AsRef<[f64]>>(group: &[S]) -> Vec<Vec<f64>> {
    let Some(bottom) = group.first() else {
        return Vec::new();
    };
    let mut cumulative = vec![0.0; bottom.as_ref().len()];
    let mut out = Vec::with_capacity(group.len());
    for series in group {
        let series = series.as_ref();
        for (i, sum) in cumulative.iter_mut().enumerate() {
            *sum += series.get(i).copied().unwrap_or(0.0);
        }
        out.push(cumulative.clone());
    }
    out
}

/// Validates, stacks and normalizes an already windowed group.
///
/// Each layer's cumulative values map to `y = viewport.height * (1 - v / max)`, where `max` is
/// the top layer's largest cumulative value. An all-zero group puts every layer on the bottom
/// edge. An empty group, an empty bottom layer, or an unmeasured viewport yields the empty
/// result.
///
/// # Errors
///
/// Returns [`StackError`] before any geometry is computed when the group breaks the contract
/// checked by [`validate_group`], or when a stacked total overflows to infinity.
pub fn normalize_stack<S: AsRef<[f64]>>(
    windowed: &[S],
    viewport: Viewport,
    x_step: NonZeroU32,
    palette_size: usize,
) -> Result<StackNormalization, StackError> {
    validate_group(windowed, palette_size)?;
    if !viewport.is_measurable() {
        return Ok(StackNormalization::default());
    }
    composite(windowed, viewport.height, x_step)
}

fn composite<S: AsRef<[f64]>>(
    windowed: &[S],
    height: f64,
    x_step: NonZeroU32,
) -> Result<StackNormalization, StackError> {
    let stacked = cumulative_sums(windowed);
    let Some(top) = stacked.last() else {
        return Ok(StackNormalization::default());
    };
    // Totals only grow upward, so an overflow always shows in the top layer.
    if let Some(index) = top.iter().position(|v| !v.is_finite()) {
        tracing::debug!(index, "rejected stacked group: stacked total overflows");
        return Err(StackError::TotalOverflow { index });
    }
    let Some(max_value) = top.iter().copied().reduce(f64::max) else {
        return Ok(StackNormalization::default());
    };

    let to_y = |v: f64| {
        if max_value == 0.0 {
            height
        } else {
            height * (1.0 - v / max_value)
        }
    };

    let n = stacked[0].len();
    let last_x = n as f64 * f64::from(x_step.get());
    let baseline = Path::from_points(vec![
        Point::new(0.0, height),
        Point::new(last_x, height),
    ]);

    let mut layers: Vec<StackedLayer> = Vec::with_capacity(stacked.len());
    for values in stacked {
        let stroke = Path::from_ys(values.iter().map(|&v| to_y(v)), x_step);
        let lower = layers.last().map_or(&baseline, |below| &below.stroke);
        let fill = stroke.ring_over(lower);
        layers.push(StackedLayer {
            values,
            stroke,
            fill,
        });
    }
    tracing::trace!(
        layers = layers.len(),
        points = n,
        max_value,
        "composited stacked group"
    );

    Ok(StackNormalization {
        layers,
        max_value: Some(max_value),
    })
}

/// A stacked-area graph over a group of series.
///
/// Each layer gets its palette color: a translucent fill followed by an opaque stroke.
#[derive(Clone, Debug)]
pub struct StackedGraphSpec {
    /// Horizontal step and stroke width.
    pub config: GraphConfig,
    /// Layer colors, bottom first. Also bounds the number of layers.
    pub palette: Vec<Color>,
    /// Alpha applied to fills.
    pub fill_alpha: f32,
    /// Whether to emit a max value label.
    pub show_max: bool,
    /// Label paint.
    pub label_fill: Brush,
}

impl StackedGraphSpec {
    /// Creates a stacked graph with the default area palette, half-transparent fills and white
    /// labels.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            palette: DEFAULT_AREA_PALETTE.to_vec(),
            fill_alpha: DEFAULT_FILL_ALPHA,
            show_max: false,
            label_fill: Brush::Solid(Color::WHITE),
        }
    }

    /// Sets the layer palette.
    pub fn with_palette(mut self, palette: impl Into<Vec<Color>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Sets the fill alpha.
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    /// Enables or disables the max value label.
    pub fn with_max(mut self, show: bool) -> Self {
        self.show_max = show;
        self
    }

    /// Sets the label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Validates the full `group` history, windows every layer and composites the result.
    ///
    /// Validation covers every sample in the history, not only the visible window.
    ///
    /// # Errors
    ///
    /// Returns [`StackError`] when the group has more layers than the palette has colors, holds
    /// a negative or non-finite sample, or when a visible stacked total overflows to infinity.
    pub fn layout<S: AsRef<[f64]>>(
        &self,
        group: &[S],
        viewport: Viewport,
    ) -> Result<StackedGraph, StackError> {
        validate_group(group, self.palette.len())?;
        let x_step = self.config.x_step();
        let normalization = if viewport.is_measurable() {
            let windowed = window_group(group, viewport.width, x_step);
            composite(&windowed, viewport.height, x_step)?
        } else {
            StackNormalization::default()
        };
        Ok(StackedGraph {
            spec: self.clone(),
            normalization,
        })
    }
}

/// The result of laying out a [`StackedGraphSpec`].
#[derive(Clone, Debug)]
pub struct StackedGraph {
    spec: StackedGraphSpec,
    normalization: StackNormalization,
}

impl StackedGraph {
    /// The composited layers and the global maximum.
    pub fn normalization(&self) -> &StackNormalization {
        &self.normalization
    }

    /// Generates the draw marks.
    ///
    /// Per layer, bottom to top: the fill, then the stroke. The max label (when enabled) comes
    /// last.
    pub fn marks(&self) -> Vec<Mark> {
        let layers = &self.normalization.layers;
        let mut out = Vec::with_capacity(layers.len() * 2 + 1);
        let style = self.spec.config.stroke();

        for (i, (layer, &color)) in layers.iter().zip(&self.spec.palette).enumerate() {
            out.push(Mark {
                z_index: z_order::layer_z_index(i, z_order::SERIES_FILL),
                kind: MarkKind::Fill {
                    path: layer.fill.to_closed_bez_path(),
                    brush: Brush::Solid(color.with_alpha(self.spec.fill_alpha)),
                },
            });
            out.push(Mark {
                z_index: z_order::layer_z_index(i, z_order::SERIES_STROKE),
                kind: MarkKind::Stroke {
                    path: layer.stroke.to_bez_path(),
                    brush: Brush::Solid(color),
                    style: style.clone(),
                },
            });
        }

        if self.spec.show_max
            && let Some(max_value) = self.normalization.max_value
        {
            out.push(Mark {
                z_index: z_order::VALUE_LABELS,
                kind: MarkKind::Label(ValueLabel {
                    text: format!("{max_value}"),
                    line: 0,
                    fill: self.spec.label_fill.clone(),
                }),
            });
        }

        out
    }
}
