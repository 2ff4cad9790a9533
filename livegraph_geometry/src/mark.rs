// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic draw marks.

use alloc::string::String;

use kurbo::{BezPath, Stroke};
use peniko::Brush;

/// A single thing to draw, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Rendering order hint (see the z-order constants).
    pub z_index: i32,
    /// What to draw.
    pub kind: MarkKind,
}

/// The drawable payload of a [`Mark`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkKind {
    /// A closed, filled area.
    Fill {
        /// Closed outline to fill.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
    },
    /// A stroked polyline.
    Stroke {
        /// Polyline to stroke.
        path: BezPath,
        /// Stroke paint.
        brush: Brush,
        /// Width, caps and joins.
        style: Stroke,
    },
    /// A numeric value shown next to the plot.
    Label(ValueLabel),
}

/// A min/max value readout.
///
/// Labels are stacked as text lines anchored at the top-left corner of the plot; shaping and
/// exact placement are left to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    /// Text to show.
    pub text: String,
    /// Line index within the label block (0 is the top line).
    pub line: usize,
    /// Text paint.
    pub fill: Brush,
}
