// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side view state: which chart is shown and how many layers it stacks.

/// Which chart the host shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DisplayMode {
    /// All layers as a stacked-area chart.
    Stacked,
    /// The bottom layer alone as a line chart with its min/max readout.
    Single,
}

#[derive(Clone, Debug)]
pub(crate) struct HostState {
    mode: DisplayMode,
    layer_count: usize,
    max_layers: usize,
}

impl HostState {
    /// Starts in stacked mode with every available layer shown.
    pub(crate) fn new(max_layers: usize) -> Self {
        let max_layers = max_layers.max(1);
        Self {
            mode: DisplayMode::Stacked,
            layer_count: max_layers,
            max_layers,
        }
    }

    pub(crate) fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub(crate) fn layer_count(&self) -> usize {
        self.layer_count
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DisplayMode::Stacked => DisplayMode::Single,
            DisplayMode::Single => DisplayMode::Stacked,
        };
    }

    /// Adds a layer, up to the palette size.
    pub(crate) fn increment(&mut self) {
        if self.layer_count < self.max_layers {
            self.layer_count += 1;
        }
    }

    /// Removes a layer, keeping at least one.
    pub(crate) fn decrement(&mut self) {
        if self.layer_count > 1 {
            self.layer_count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_modes() {
        let mut host = HostState::new(10);
        assert_eq!(host.mode(), DisplayMode::Stacked);
        host.toggle_mode();
        assert_eq!(host.mode(), DisplayMode::Single);
        host.toggle_mode();
        assert_eq!(host.mode(), DisplayMode::Stacked);
    }

    #[test]
    fn layer_count_saturates_at_both_ends() {
        let mut host = HostState::new(3);
        host.increment();
        assert_eq!(host.layer_count(), 3);
        for _ in 0..5 {
            host.decrement();
        }
        assert_eq!(host.layer_count(), 1);
        host.increment();
        assert_eq!(host.layer_count(), 2);
    }
}
