// Copyright 2026 the Livegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live chart demo for `livegraph_geometry`.
//!
//! A fixed tick appends one random-walk sample per layer and recomputes both charts from
//! scratch. Along the way the host removes and re-adds layers, then writes the final stacked
//! view and (after toggling the display mode) the single-series view as SVG files.

mod host;
mod source;
mod svg;

use std::error::Error;

use kurbo::Rect;
use livegraph_geometry::{
    DEFAULT_AREA_PALETTE, GraphConfig, LineGraphSpec, Mark, StackedGraphSpec, Viewport,
    visible_count,
};
use tracing_subscriber::EnvFilter;

use crate::host::{DisplayMode, HostState};
use crate::source::{GroupSource, RandomWalk};

#[derive(Clone, Debug)]
struct DemoConfig {
    viewport: Viewport,
    x_step: u32,
    line_width: f64,
    area_line_width: f64,
    max_offset: u32,
    ticks: usize,
    seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1100.0, 700.0),
            x_step: 3,
            line_width: 5.0,
            area_line_width: 2.0,
            max_offset: 100,
            ticks: 600,
            seed: 0x5EED,
        }
    }
}

/// Host interactions replayed at fixed ticks.
fn scripted_input(tick: usize, host: &mut HostState) {
    match tick {
        200 | 210 => host.decrement(),
        300 => host.increment(),
        _ => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DemoConfig::default();
    let line = LineGraphSpec::new(GraphConfig::new(config.x_step, config.line_width)?)
        .with_color(DEFAULT_AREA_PALETTE[0])
        .with_min_max(true);
    let stacked = StackedGraphSpec::new(GraphConfig::new(config.x_step, config.area_line_width)?)
        .with_palette(DEFAULT_AREA_PALETTE)
        .with_max(true);

    // Keep just enough history for the widest window this viewport can show.
    let x_step = line.config.x_step();
    let capacity = visible_count(config.viewport.width, x_step);
    let mut source = GroupSource::new(
        RandomWalk::new(config.seed, config.max_offset).non_negative(),
        capacity,
    );
    let mut host = HostState::new(stacked.palette.len());

    for tick in 0..config.ticks {
        scripted_input(tick, &mut host);
        source.tick(host.layer_count());
        let marks = render(&host, &source, &line, &stacked, config.viewport)?;
        tracing::debug!(tick, marks = marks.len(), "recomputed frame");
    }

    for _ in 0..2 {
        let marks = render(&host, &source, &line, &stacked, config.viewport)?;
        let file = match host.mode() {
            DisplayMode::Stacked => "livegraph_stacked.svg",
            DisplayMode::Single => "livegraph_line.svg",
        };
        let view = Rect::new(0.0, 0.0, config.viewport.width, config.viewport.height);
        let mut scene = svg::SvgScene::new(view);
        scene.push_marks(marks);
        std::fs::write(file, scene.to_svg_string())?;
        tracing::info!(file, layers = host.layer_count(), "wrote frame");
        host.toggle_mode();
    }

    Ok(())
}

fn render(
    host: &HostState,
    source: &GroupSource,
    line: &LineGraphSpec,
    stacked: &StackedGraphSpec,
    viewport: Viewport,
) -> Result<Vec<Mark>, Box<dyn Error>> {
    let group = source.snapshot();
    let marks = match host.mode() {
        DisplayMode::Stacked => stacked.layout(&group, viewport)?.marks(),
        DisplayMode::Single => {
            let bottom = group.first().copied().unwrap_or_default();
            line.layout(bottom, viewport).marks()
        }
    };
    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_renders_both_modes() {
        let config = DemoConfig {
            ticks: 50,
            ..DemoConfig::default()
        };
        let line = LineGraphSpec::new(GraphConfig::new(config.x_step, 5.0).unwrap())
            .with_min_max(true);
        let stacked = StackedGraphSpec::new(GraphConfig::new(config.x_step, 2.0).unwrap());
        let mut source = GroupSource::new(RandomWalk::new(config.seed, 100).non_negative(), 400);
        let mut host = HostState::new(stacked.palette.len());
        for _ in 0..config.ticks {
            source.tick(host.layer_count());
        }

        // Ten layers: a fill and a stroke each.
        let marks = render(&host, &source, &line, &stacked, config.viewport).unwrap();
        assert_eq!(marks.len(), 20);

        host.toggle_mode();
        let marks = render(&host, &source, &line, &stacked, config.viewport).unwrap();
        // One stroke plus the max and min labels.
        assert_eq!(marks.len(), 3);
    }

    #[test]
    fn script_removes_then_restores_a_layer() {
        let mut host = HostState::new(10);
        for tick in 0..400 {
            scripted_input(tick, &mut host);
        }
        assert_eq!(host.layer_count(), 9);
    }
}
