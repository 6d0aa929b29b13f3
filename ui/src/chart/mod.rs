//! Comparison chart pipeline.
//!
//! `select_series` → `ChartScales::build` → `render_chart` yields a
//! `ChartDrawing`: a plain list of draw commands in inner-chart coordinates.
//! Nothing in here touches a real surface; the Dioxus panel, the SVG exporter
//! and the PNG rasterizer are thin adapters over the same drawing.

pub mod axis;
pub mod cards;
pub mod config;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod svg;
pub mod ticks;

pub use cards::{Accent, MetricCard, MetricKind, SummaryCards};
pub use config::{ChartLayout, ChartStyle, Margin};
pub use render::{render_chart, ChartDrawing, DrawCommand, Point, Stroke, TextAnchor};
pub use scale::{ChartScales, LinearScale};
pub use series::{extract, select_series, PlotPoint, Series, SeriesColor};
pub use surface::{paint, DrawingSurface};
pub use svg::SvgSurface;

use crate::core::sim::{ComparisonMode, SimulationResult};

/// Runs the whole pipeline for one render pass.
pub fn build_drawing(
    mode: ComparisonMode,
    with_result: &SimulationResult,
    without_result: &SimulationResult,
    layout: &ChartLayout,
    style: &ChartStyle,
) -> ChartDrawing {
    let series = select_series(mode, with_result, without_result);
    let scales = ChartScales::build(&series, layout);
    render_chart(&series, &scales, style)
}
