// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for live-updating line and stacked-area charts.
//!
//! This crate turns borrowed snapshots of numeric sample streams into pixel-space paths:
//! - **Windowing** picks the trailing samples that fit the current viewport width.
//! - **Line normalization** min-max scales one windowed series into a height-inverted polyline.
//! - **Stacked compositing** accumulates a group of non-negative series bottom-to-top and emits a
//!   stroke and a closed fill polygon per layer.
//!
//! Every entry point is a pure function of its inputs. Nothing is cached between calls; hosts
//! re-run the computation whenever the data or the viewport changes and hand the resulting
//! [`Mark`]s (or the raw [`Path`]s) to their rendering surface.
//!
//! Drawing itself (stroking, filling, shaping label text) is out of scope.

#![no_std]

extern crate alloc;

mod config;
mod error;
#[cfg(test)]
mod graph_tests;
mod line_graph;
mod mark;
mod palette;
mod path;
mod stacked_graph;
mod viewport;
mod window;
mod z_order;

pub use config::GraphConfig;
pub use error::{ConfigError, StackError};
pub use line_graph::{LineGraph, LineGraphSpec, LineNormalization, normalize_line};
pub use mark::{Mark, MarkKind, ValueLabel};
pub use palette::{DEFAULT_AREA_PALETTE, DEFAULT_FILL_ALPHA};
pub use path::Path;
pub use stacked_graph::{
    StackNormalization, StackedGraph, StackedGraphSpec, StackedLayer, cumulative_sums,
    normalize_stack, validate_group,
};
pub use viewport::Viewport;
pub use window::{WindowedGroup, visible_count, window, window_group};
pub use z_order::*;
