//! Sample extraction and per-mode series selection.

use serde::{Deserialize, Serialize};

use crate::core::sim::{ComparisonMode, SimSample, SimulationResult};

/// One plotted sample. Rebuilt on every render, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub time: f64,
    pub value: f64,
}

/// Color identity of a run. Only two runs exist, so the palette is fixed per
/// run rather than indexed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesColor {
    WithRun,
    WithoutRun,
}

impl SeriesColor {
    pub fn hex(&self) -> &'static str {
        match self {
            SeriesColor::WithRun => "#22d3ee",
            SeriesColor::WithoutRun => "#f97316",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            SeriesColor::WithRun => "metrics-chart__swatch--with",
            SeriesColor::WithoutRun => "metrics-chart__swatch--without",
        }
    }

    pub fn legend_label(&self) -> String {
        match self {
            SeriesColor::WithRun => crate::t!("legend-with"),
            SeriesColor::WithoutRun => crate::t!("legend-without"),
        }
    }

    /// Short machine name used in CSV exports.
    pub fn run_key(&self) -> &'static str {
        match self {
            SeriesColor::WithRun => "with",
            SeriesColor::WithoutRun => "without",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub data: Vec<PlotPoint>,
    pub color: SeriesColor,
}

impl Series {
    pub fn from_result(result: &SimulationResult, color: SeriesColor) -> Self {
        Self {
            data: extract(&result.samples),
            color,
        }
    }

    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().map(|p| p.value).reduce(f64::max)
    }
}

/// Projects samples onto plot points verbatim, keeping order and length.
pub fn extract(samples: &[SimSample]) -> Vec<PlotPoint> {
    samples
        .iter()
        .map(|sample| PlotPoint {
            time: sample.time_sec,
            value: sample.err_magnitude,
        })
        .collect()
}

/// Series to draw for `mode`, in paint order. With both runs shown the
/// without-run comes first so the with-run line sits on top.
pub fn select_series(
    mode: ComparisonMode,
    with_result: &SimulationResult,
    without_result: &SimulationResult,
) -> Vec<Series> {
    match mode {
        ComparisonMode::With => vec![Series::from_result(with_result, SeriesColor::WithRun)],
        ComparisonMode::Without => {
            vec![Series::from_result(without_result, SeriesColor::WithoutRun)]
        }
        ComparisonMode::Both => vec![
            Series::from_result(without_result, SeriesColor::WithoutRun),
            Series::from_result(with_result, SeriesColor::WithRun),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sim::SafetyStatus;

    fn result(samples: &[(f64, f64)]) -> SimulationResult {
        SimulationResult {
            samples: samples
                .iter()
                .map(|&(t, e)| SimSample::new(t, e))
                .collect(),
            max_error_km: 0.0,
            recovery_time_sec: None,
            safety_status: SafetyStatus::maintained(),
        }
    }

    #[test]
    fn extract_is_verbatim() {
        let samples = [
            SimSample::new(0.0, 0.1),
            SimSample::new(0.1 + 0.2, 1e-12),
            SimSample::new(59.999, 123.456_789),
        ];
        let points = extract(&samples);
        assert_eq!(points.len(), samples.len());
        for (point, sample) in points.iter().zip(samples.iter()) {
            assert_eq!(point.time, sample.time_sec);
            assert_eq!(point.value, sample.err_magnitude);
        }
    }

    #[test]
    fn extract_empty_is_empty() {
        assert!(extract(&[]).is_empty());
    }

    #[test]
    fn single_modes_select_one_series() {
        let with = result(&[(0.0, 1.0)]);
        let without = result(&[(0.0, 2.0), (1.0, 3.0)]);

        let only_with = select_series(ComparisonMode::With, &with, &without);
        assert_eq!(only_with.len(), 1);
        assert_eq!(only_with[0].color, SeriesColor::WithRun);
        assert_eq!(only_with[0].data.len(), 1);

        let only_without = select_series(ComparisonMode::Without, &with, &without);
        assert_eq!(only_without.len(), 1);
        assert_eq!(only_without[0].color, SeriesColor::WithoutRun);
        assert_eq!(only_without[0].data.len(), 2);
    }

    #[test]
    fn both_mode_draws_without_run_first() {
        let with = result(&[(0.0, 1.0)]);
        let without = result(&[(0.0, 2.0), (1.0, 3.0)]);
        let both = select_series(ComparisonMode::Both, &with, &without);
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].color, SeriesColor::WithoutRun);
        assert_eq!(both[0].data.len(), 2);
        assert_eq!(both[1].color, SeriesColor::WithRun);
        assert_eq!(both[0].color.hex(), "#f97316");
        assert_eq!(both[1].color.hex(), "#22d3ee");
    }

    #[test]
    fn max_value_ignores_empty_series() {
        let empty = Series::from_result(&result(&[]), SeriesColor::WithRun);
        assert_eq!(empty.max_value(), None);
        let filled = Series::from_result(&result(&[(0.0, 4.0), (1.0, 9.5)]), SeriesColor::WithRun);
        assert_eq!(filled.max_value(), Some(9.5));
    }
}
