// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default series colors.

use peniko::Color;

/// The default ordered area palette, one color per stacked layer (bottom first).
///
/// A stacked group may hold at most as many layers as its palette has colors.
pub const DEFAULT_AREA_PALETTE: [Color; 10] = [
    Color::from_rgb8(0xFD, 0x6C, 0x0C),
    Color::from_rgb8(0x8D, 0x0C, 0xFD),
    Color::from_rgb8(0xB0, 0xFF, 0x1D),
    Color::from_rgb8(0xB8, 0x69, 0x5B),
    Color::from_rgb8(0xFD, 0xF1, 0x0C),
    Color::from_rgb8(0x0C, 0xFD, 0xB9),
    Color::from_rgb8(0xFD, 0x0C, 0xDD),
    Color::from_rgb8(0x0C, 0x8D, 0xFD),
    Color::from_rgb8(0xFD, 0x0C, 0x58),
    Color::from_rgb8(0xFF, 0xF9, 0xF9),
];

/// Alpha applied to stacked fills so that strokes and lower layers stay visible.
pub const DEFAULT_FILL_ALPHA: f32 = 0.5;
