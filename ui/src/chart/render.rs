//! Pure chart rendering: series + scales in, draw commands out.

use tracing::debug;

use super::axis::{Axis, AxisOrient};
use super::config::{ChartLayout, ChartStyle};
use super::scale::ChartScales;
use super::series::{Series, SeriesColor};

/// Position in inner-chart pixels (origin at the top-left of the plot area,
/// margins excluded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis domain and tick marks.
    Line { from: Point, to: Point, stroke: Stroke },
    /// Tick label. `dy_em` shifts the baseline like SVG's `dy`.
    Label {
        at: Point,
        text: String,
        anchor: TextAnchor,
        dy_em: f64,
        fill: String,
        font_size: f64,
    },
    /// One open, unfilled series line.
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
        series: SeriesColor,
    },
}

impl DrawCommand {
    pub fn is_polyline(&self) -> bool {
        matches!(self, DrawCommand::Polyline { .. })
    }
}

/// Everything one render pass draws, in paint order (axes first, then the
/// series lines so they sit above the grid).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDrawing {
    pub layout: ChartLayout,
    pub commands: Vec<DrawCommand>,
}

impl ChartDrawing {
    pub fn polylines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|cmd| cmd.is_polyline())
    }

    /// Translation from inner-chart coordinates to the full `viewBox`.
    pub fn origin(&self) -> Point {
        Point::new(self.layout.margin.left, self.layout.margin.top)
    }
}

pub fn render_chart(series: &[Series], scales: &ChartScales, style: &ChartStyle) -> ChartDrawing {
    let mut commands = Vec::new();

    let time_axis = Axis {
        orient: AxisOrient::Bottom,
        scale: scales.time,
        tick_count: style.time_ticks,
        suffix: style.time_suffix.as_str(),
        grouped: false,
        offset: scales.layout.inner_height(),
    };
    let value_axis = Axis {
        orient: AxisOrient::Left,
        scale: scales.value,
        tick_count: style.value_ticks,
        suffix: "",
        grouped: true,
        offset: 0.0,
    };
    time_axis.draw(style, &mut commands);
    value_axis.draw(style, &mut commands);

    for line in series {
        let points = line
            .data
            .iter()
            .map(|p| {
                let (x, y) = scales.project(p.time, p.value);
                Point::new(x, y)
            })
            .collect();
        commands.push(DrawCommand::Polyline {
            points,
            stroke: Stroke {
                color: line.color.hex().to_string(),
                width: style.line_width,
            },
            series: line.color,
        });
    }

    debug!(commands = commands.len(), series = series.len(), "rendered chart");

    ChartDrawing {
        layout: scales.layout,
        commands,
    }
}
