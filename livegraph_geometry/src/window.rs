// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-window selection.
//!
//! A series only ever contributes the samples that fit the viewport width at the configured
//! horizontal step; older samples are ignored (but not removed, the caller owns the history).

use core::num::NonZeroU32;

use smallvec::SmallVec;

use crate::viewport::is_measured;

/// Windowed layers of a series group, borrowed from the caller's snapshot.
///
/// Sized inline for the default ten-color area palette.
pub type WindowedGroup<'a> = SmallVec<[&'a [f64]; 10]>;

/// Returns how many samples fit in `viewport_width` at `x_step` pixels per sample.
///
/// This is `floor(viewport_width / x_step)`, and `0` when the width is not measured yet.
#[allow(
    clippy::cast_possible_truncation,
    reason = "positive and finite; the saturating cast floors the quotient"
)]
pub fn visible_count(viewport_width: f64, x_step: NonZeroU32) -> usize {
    if !is_measured(viewport_width) {
        return 0;
    }
    (viewport_width / f64::from(x_step.get())) as usize
}

/// Returns the trailing samples of `series` that fit `viewport_width`.
///
/// The window is shorter than the visible count when the history is short, and empty when the
/// width is not measured yet.
pub fn window(series: &[f64], viewport_width: f64, x_step: NonZeroU32) -> &[f64] {
    take_last(series, visible_count(viewport_width, x_step))
}

/// Windows every layer of `group` with the same visible count.
pub fn window_group<S: AsRef<[f64]>>(
    group: &[S],
    viewport_width: f64,
    x_step: NonZeroU32,
) -> WindowedGroup<'_> {
    let count = visible_count(viewport_width, x_step);
    let windowed: WindowedGroup<'_> = group
        .iter()
        .map(|series| take_last(series.as_ref(), count))
        .collect();
    tracing::trace!(layers = windowed.len(), count, "windowed series group");
    windowed
}

fn take_last(series: &[f64], count: usize) -> &[f64] {
    &series[series.len().saturating_sub(count)..]
}
