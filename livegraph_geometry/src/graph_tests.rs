// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;
use core::num::NonZeroU32;

use kurbo::Point;

use crate::{
    DEFAULT_AREA_PALETTE, GraphConfig, LineGraphSpec, LineNormalization, StackError,
    StackNormalization, StackedGraphSpec, Viewport, cumulative_sums, normalize_line,
    normalize_stack, window, window_group,
};

fn step(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

fn assert_close(a: f64, b: f64) {
    let eps = 1e-9;
    assert!((a - b).abs() <= eps, "{a} != {b}");
}

fn assert_points_close(got: &[Point], expected: &[(f64, f64)]) {
    assert_eq!(got.len(), expected.len(), "{got:?} vs {expected:?}");
    for (g, &(x, y)) in got.iter().zip(expected) {
        assert_close(g.x, x);
        assert_close(g.y, y);
    }
}

/// Small deterministic generator so the property checks cover more than hand-picked inputs.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn series(&mut self, len: usize, lo: f64, hi: f64) -> Vec<f64> {
        (0..len).map(|_| lo + self.next_f64() * (hi - lo)).collect()
    }
}

#[test]
fn window_length_is_min_of_history_and_count() {
    let mut rng = Lcg(7);
    for len in [0_usize, 1, 5, 40] {
        let series = rng.series(len, -10.0, 10.0);
        for (width, x_step) in [(0.0, 1), (3.0, 1), (10.0, 3), (99.5, 2), (1000.0, 7)] {
            let count = (width / f64::from(x_step)) as usize;
            let got = window(&series, width, step(x_step));
            let expected = len.min(count);
            assert_eq!(got.len(), expected);
            assert_eq!(got, &series[len - expected..]);
        }
    }
}

#[test]
fn single_series_range_spans_the_height() {
    let mut rng = Lcg(11);
    for _ in 0..20 {
        let series = rng.series(25, -50.0, 50.0);
        let n = normalize_line(&series, 120.0, step(2));
        let min = n.min_value.unwrap();
        let max = n.max_value.unwrap();
        assert!(max > min);
        let path = n.path.unwrap();
        for (pt, &v) in path.points().iter().zip(&series) {
            assert!((0.0..=120.0).contains(&pt.y), "{pt:?} out of range");
            if v == min {
                assert_close(pt.y, 120.0);
            }
            if v == max {
                assert_close(pt.y, 0.0);
            }
        }
    }
}

#[test]
fn flat_series_collapses_to_the_bottom_edge() {
    let n = normalize_line(&[5.0, 5.0, 5.0], 100.0, step(1));
    let path = n.path.unwrap();
    assert_eq!(path.len(), 3);
    assert!(path.points().iter().all(|p| p.y == 100.0));
}

#[test]
fn stacked_layers_never_decrease() {
    let mut rng = Lcg(23);
    let group: Vec<Vec<f64>> = (0..6).map(|_| rng.series(30, 0.0, 100.0)).collect();
    let sums = cumulative_sums(&group);
    for k in 1..sums.len() {
        for i in 0..sums[k].len() {
            assert!(sums[k][i] >= sums[k - 1][i], "layer {k} dips at {i}");
        }
    }

    // The same holds after normalization: upper layers are never drawn below lower ones.
    let n = normalize_stack(&group, Viewport::new(30.0, 200.0), step(1), 10).unwrap();
    for pair in n.layers.windows(2) {
        for (upper, lower) in pair[1].stroke.points().iter().zip(pair[0].stroke.points()) {
            assert!(upper.y <= lower.y);
        }
    }
}

#[test]
fn eleven_layers_overflow_a_ten_color_palette() {
    let group = vec![vec![1.0, 2.0]; 11];
    assert_eq!(
        normalize_stack(&group, Viewport::new(100.0, 100.0), step(1), 10),
        Err(StackError::TooManyLayers {
            layers: 11,
            palette: 10
        })
    );

    let spec = StackedGraphSpec::new(GraphConfig::new(1, 1.0).unwrap());
    assert_eq!(spec.palette.len(), DEFAULT_AREA_PALETTE.len());
    assert!(spec.layout(&group, Viewport::new(100.0, 100.0)).is_err());
}

#[test]
fn a_negative_sample_anywhere_is_rejected() {
    let group = vec![vec![1.0, 2.0, 3.0], vec![4.0, -0.1, 6.0], vec![7.0, 8.0, 9.0]];
    assert_eq!(
        normalize_stack(&group, Viewport::new(100.0, 100.0), step(1), 10),
        Err(StackError::InvalidSample {
            layer: 1,
            index: 1,
            value: -0.1
        })
    );
}

#[test]
fn single_series_scenario() {
    let spec = LineGraphSpec::new(GraphConfig::new(1, 5.0).unwrap());
    let graph = spec.layout(&[10.0, 30.0, 20.0], Viewport::new(3.0, 100.0));
    let n = graph.normalization();
    assert_eq!(n.min_value, Some(10.0));
    assert_eq!(n.max_value, Some(30.0));
    assert_points_close(
        n.path.as_ref().unwrap().points(),
        &[(0.0, 100.0), (1.0, 0.0), (2.0, 50.0)],
    );
}

#[test]
fn two_layer_stack_scenario() {
    let group = [[10.0, 10.0], [20.0, 20.0]];
    let windowed = window_group(&group, 2.0, step(1));
    let n = normalize_stack(&windowed, Viewport::new(2.0, 90.0), step(1), 2).unwrap();

    assert_eq!(n.max_value, Some(30.0));
    assert_eq!(n.layers[0].values, [10.0, 10.0]);
    assert_eq!(n.layers[1].values, [30.0, 30.0]);
    assert_points_close(n.layers[0].stroke.points(), &[(0.0, 60.0), (1.0, 60.0)]);
    assert_points_close(n.layers[1].stroke.points(), &[(0.0, 0.0), (1.0, 0.0)]);
}

#[test]
fn empty_inputs_are_absorbing_states() {
    let viewports = [
        Viewport::UNMEASURED,
        Viewport::new(100.0, 0.0),
        Viewport::new(100.0, 100.0),
    ];
    for viewport in viewports {
        let line = LineGraphSpec::new(GraphConfig::new(1, 1.0).unwrap()).layout(&[], viewport);
        assert_eq!(line.normalization(), &LineNormalization::default());

        let empty_group: [Vec<f64>; 0] = [];
        let stack = normalize_stack(&empty_group, viewport, step(1), 10).unwrap();
        assert_eq!(stack, StackNormalization::default());

        let stack = normalize_stack(&[Vec::<f64>::new(), vec![]], viewport, step(1), 10).unwrap();
        assert!(stack.layers.is_empty());
        assert_eq!(stack.max_value, None);
    }
}

#[test]
fn fill_polygons_visit_upper_then_reversed_lower() {
    let mut rng = Lcg(31);
    let group: Vec<Vec<f64>> = (0..4).map(|_| rng.series(12, 0.0, 10.0)).collect();
    let n = normalize_stack(&group, Viewport::new(24.0, 50.0), step(2), 10).unwrap();

    for (k, layer) in n.layers.iter().enumerate() {
        let stroke = layer.stroke.points();
        let fill = layer.fill.points();
        assert_eq!(&fill[..stroke.len()], stroke);

        if k == 0 {
            // The baseline has two points; the fill ends on it, right to left.
            assert_eq!(fill.len(), stroke.len() + 2);
            assert_eq!(fill[stroke.len()], Point::new(24.0, 50.0));
            assert_eq!(fill[stroke.len() + 1], Point::new(0.0, 50.0));
        } else {
            let lower = n.layers[k - 1].stroke.points();
            assert_eq!(fill.len(), 2 * stroke.len());
            let reversed: Vec<Point> = lower.iter().rev().copied().collect();
            assert_eq!(&fill[stroke.len()..], reversed.as_slice());
        }
    }
}
