// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic sample streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Append-only sample history that keeps at most `capacity` recent samples.
///
/// Storage grows to twice the capacity before the oldest samples are dropped in one go, so
/// pushes stay amortized O(1) and [`SampleHistory::as_slice`] stays contiguous.
#[derive(Clone, Debug)]
pub(crate) struct SampleHistory {
    samples: Vec<f64>,
    capacity: usize,
}

impl SampleHistory {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity * 2),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, sample: f64) {
        if self.samples.len() >= self.capacity * 2 {
            let excess = self.samples.len() + 1 - self.capacity;
            self.samples.drain(..excess);
        }
        self.samples.push(sample);
    }

    pub(crate) fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// The retained samples, oldest first (at most `capacity` of them).
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.samples[self.samples.len().saturating_sub(self.capacity)..]
    }
}

/// A random walk: each step moves by `d * m`, with `d` in `{-1, 0, 1}` and `m` in
/// `0..=max_offset`.
#[derive(Debug)]
pub(crate) struct RandomWalk {
    rng: StdRng,
    max_offset: u32,
    non_negative: bool,
}

impl RandomWalk {
    pub(crate) fn new(seed: u64, max_offset: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_offset,
            non_negative: false,
        }
    }

    /// Reflects every step at zero, as stacked layers require.
    pub(crate) fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Returns the sample following `last` (a missing `last` starts the walk at zero).
    pub(crate) fn step(&mut self, last: Option<f64>) -> f64 {
        let direction: i32 = self.rng.random_range(-1..=1);
        let magnitude: u32 = self.rng.random_range(0..=self.max_offset);
        let next = last.unwrap_or(0.0) + f64::from(direction) * f64::from(magnitude);
        if self.non_negative { next.abs() } else { next }
    }
}

/// One random walk per layer, advanced together on every tick.
#[derive(Debug)]
pub(crate) struct GroupSource {
    walk: RandomWalk,
    layers: Vec<SampleHistory>,
    capacity: usize,
}

impl GroupSource {
    pub(crate) fn new(walk: RandomWalk, capacity: usize) -> Self {
        Self {
            walk,
            layers: Vec::new(),
            capacity,
        }
    }

    /// Appends one sample to each of the first `layer_count` layers.
    ///
    /// Layers past `layer_count` are dropped; new layers start with an empty history.
    pub(crate) fn tick(&mut self, layer_count: usize) {
        self.layers.truncate(layer_count);
        while self.layers.len() < layer_count {
            self.layers.push(SampleHistory::new(self.capacity));
        }
        for layer in &mut self.layers {
            let next = self.walk.step(layer.last());
            layer.push(next);
        }
    }

    /// A snapshot of every layer, bottom first.
    pub(crate) fn snapshot(&self) -> Vec<&[f64]> {
        self.layers.iter().map(SampleHistory::as_slice).collect()
    }
}
