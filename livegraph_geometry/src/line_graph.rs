// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-series line graphs (min-max scaled).

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;
use core::num::NonZeroU32;

use peniko::{Brush, Color};

use crate::config::GraphConfig;
use crate::mark::{Mark, MarkKind, ValueLabel};
use crate::palette::DEFAULT_AREA_PALETTE;
use crate::path::Path;
use crate::viewport::{Viewport, is_measured};
use crate::window::window;
use crate::z_order;

/// Output of [`normalize_line`].
///
/// `path` is `None` (and both values are absent) when there was nothing to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineNormalization {
    /// Height-inverted polyline, one point per windowed sample.
    pub path: Option<Path>,
    /// Smallest windowed sample.
    pub min_value: Option<f64>,
    /// Largest windowed sample.
    pub max_value: Option<f64>,
}

/// Maps a windowed series into a polyline spanning `[0, viewport_height]`.
///
/// The smallest sample lands on the bottom edge (`y = viewport_height`) and the largest on the
/// top edge (`y = 0`). When every sample is equal the whole line sits on the bottom edge.
///
/// An empty window, or a height that is not measured yet, yields the empty result.
pub fn normalize_line(
    windowed: &[f64],
    viewport_height: f64,
    x_step: NonZeroU32,
) -> LineNormalization {
    if !is_measured(viewport_height) {
        return LineNormalization::default();
    }
    let Some((min_value, max_value)) = value_range(windowed) else {
        return LineNormalization::default();
    };

    let path = Path::from_ys(
        windowed
            .iter()
            .map(|&v| viewport_height * (1.0 - unit_offset(v, min_value, max_value))),
        x_step,
    );
    tracing::trace!(
        points = path.len(),
        min_value,
        max_value,
        "normalized line series"
    );

    LineNormalization {
        path: Some(path),
        min_value: Some(min_value),
        max_value: Some(max_value),
    }
}

/// Position of `v` within `[min, max]` as a fraction in `[0, 1]`; `0` when the range is empty.
///
/// Finite samples far apart can overflow `max - min`; halving first keeps the ratio exact.
fn unit_offset(v: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    let span = max - min;
    if span.is_finite() {
        (v - min) / span
    } else {
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// A line graph over one series.
///
/// This bundles the windowing and normalization passes with styling: a single round-capped
/// stroke and an optional max/min readout.
#[derive(Clone, Debug)]
pub struct LineGraphSpec {
    /// Horizontal step and stroke width.
    pub config: GraphConfig,
    /// Line paint.
    pub color: Brush,
    /// Whether to emit max/min value labels.
    pub show_min_max: bool,
    /// Label paint.
    pub label_fill: Brush,
}

impl LineGraphSpec {
    /// Creates a line graph using the first default palette color and white labels.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            color: Brush::Solid(DEFAULT_AREA_PALETTE[0]),
            show_min_max: false,
            label_fill: Brush::Solid(Color::WHITE),
        }
    }

    /// Sets the line paint.
    pub fn with_color(mut self, color: impl Into<Brush>) -> Self {
        self.color = color.into();
        self
    }

    /// Enables or disables the max/min readout.
    pub fn with_min_max(mut self, show: bool) -> Self {
        self.show_min_max = show;
        self
    }

    /// Sets the label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Windows and normalizes the full `series` history for `viewport`.
    pub fn layout(&self, series: &[f64], viewport: Viewport) -> LineGraph {
        let x_step = self.config.x_step();
        let windowed = window(series, viewport.width, x_step);
        LineGraph {
            spec: self.clone(),
            normalization: normalize_line(windowed, viewport.height, x_step),
        }
    }
}

/// The result of laying out a [`LineGraphSpec`].
#[derive(Clone, Debug)]
pub struct LineGraph {
    spec: LineGraphSpec,
    normalization: LineNormalization,
}

impl LineGraph {
    /// The normalized path and the observed range.
    pub fn normalization(&self) -> &LineNormalization {
        &self.normalization
    }

    /// Generates the draw marks: the stroke, then the max and min labels when enabled.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        let Some(path) = &self.normalization.path else {
            return out;
        };

        out.push(Mark {
            z_index: z_order::SERIES_STROKE,
            kind: MarkKind::Stroke {
                path: path.to_bez_path(),
                brush: self.spec.color.clone(),
                style: self.spec.config.stroke(),
            },
        });

        if self.spec.show_min_max {
            let values = [self.normalization.max_value, self.normalization.min_value];
            for (line, value) in values.into_iter().flatten().enumerate() {
                out.push(Mark {
                    z_index: z_order::VALUE_LABELS,
                    kind: MarkKind::Label(ValueLabel {
                        text: format!("{value}"),
                        line,
                        fill: self.spec.label_fill.clone(),
                    }),
                });
            }
        }

        out
    }
}
