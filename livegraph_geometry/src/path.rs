// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point paths shared by the line and stacked normalizers.

use alloc::vec::Vec;
use core::num::NonZeroU32;

use kurbo::{BezPath, Point};

/// An immutable, ordered list of points in pixel space (y grows downward).
///
/// A path is either a polyline (series strokes) or a polygon whose closing edge is implied
/// (stacked fills). Use [`Path::to_bez_path`] or [`Path::to_closed_bez_path`] to hand it to a
/// renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Creates a path from explicit points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Places the `i`-th y-coordinate at `x = i * x_step`.
    pub(crate) fn from_ys(ys: impl IntoIterator<Item = f64>, x_step: NonZeroU32) -> Self {
        let step = f64::from(x_step.get());
        let points = ys
            .into_iter()
            .enumerate()
            .map(|(i, y)| Point::new(i as f64 * step, y))
            .collect();
        Self { points }
    }

    /// The path's points, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Builds an open polyline: one `move_to` followed by a `line_to` per remaining point.
    pub fn to_bez_path(&self) -> BezPath {
        let mut p = BezPath::new();
        let Some((&first, rest)) = self.points.split_first() else {
            return p;
        };
        p.move_to(first);
        for &pt in rest {
            p.line_to(pt);
        }
        p
    }

    /// Builds the polyline and closes it back to its first point.
    pub fn to_closed_bez_path(&self) -> BezPath {
        let mut p = self.to_bez_path();
        if !self.points.is_empty() {
            p.close_path();
        }
        p
    }

    /// Builds the polygon bounded above by `self` and below by `lower`.
    ///
    /// The ring visits `self` forward, then the first `self.len()` points of `lower` in reverse,
    /// so both boundaries line up by x position when `lower` is at least as long.
    pub(crate) fn ring_over(&self, lower: &Self) -> Self {
        let take = self.points.len().min(lower.points.len());
        let mut points = Vec::with_capacity(self.points.len() + take);
        points.extend_from_slice(&self.points);
        points.extend(lower.points[..take].iter().rev());
        Self { points }
    }
}
