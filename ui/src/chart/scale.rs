//! Linear domain → pixel mappings for the comparison chart.

use tracing::debug;

use super::config::ChartLayout;
use super::series::Series;
use super::ticks;
use crate::core::sim::SIMULATION_DURATION_SEC;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value into the range. Values outside the domain
    /// extrapolate (no clamping); a zero-width domain maps to the range midpoint.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        ticks::tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Both axes' scales for one render, plus the layout they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub time: LinearScale,
    pub value: LinearScale,
    pub layout: ChartLayout,
}

impl ChartScales {
    /// Time spans the fixed run length; value spans `[0, max]` over every
    /// point of every series, inverted so larger errors draw higher.
    pub fn build(series: &[Series], layout: &ChartLayout) -> Self {
        let max_value = value_domain_max(series);
        debug!(series = series.len(), max_value, "building chart scales");

        Self {
            time: LinearScale::new((0.0, SIMULATION_DURATION_SEC), (0.0, layout.inner_width())),
            value: LinearScale::new((0.0, max_value), (layout.inner_height(), 0.0)),
            layout: *layout,
        }
    }

    pub fn project(&self, time: f64, value: f64) -> (f64, f64) {
        (self.time.map(time), self.value.map(value))
    }
}

/// Largest plotted value, or `1` when nothing positive exists so the value
/// axis never collapses to a zero-height domain.
pub fn value_domain_max(series: &[Series]) -> f64 {
    series
        .iter()
        .filter_map(Series::max_value)
        .reduce(f64::max)
        .filter(|max| max.is_finite() && *max > 0.0)
        .unwrap_or(1.0)
}
