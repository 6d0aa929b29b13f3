//! Chart geometry and styling shared by every drawing adapter.
//!
//! Defaults reproduce the compact panel chart; both structs deserialize so a
//! caller can override a subset from JSON (`#[serde(default)]` fills the rest).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 18.0,
            bottom: 20.0,
            left: 36.0,
        }
    }
}

/// Logical chart size (the SVG `viewBox`), margins included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 460.0,
            height: 160.0,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub line_width: f64,
    pub axis_stroke: String,
    pub axis_stroke_width: f64,
    pub tick_text_fill: String,
    pub tick_font_size: f64,
    /// Inner tick length in pixels; outer ticks are never drawn.
    pub tick_size: f64,
    pub tick_padding: f64,
    pub time_ticks: usize,
    pub value_ticks: usize,
    pub time_suffix: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2.5,
            axis_stroke: "rgba(255,255,255,0.1)".to_string(),
            axis_stroke_width: 1.0,
            tick_text_fill: "rgba(255,255,255,0.45)".to_string(),
            tick_font_size: 10.0,
            tick_size: 6.0,
            tick_padding: 3.0,
            time_ticks: 5,
            value_ticks: 4,
            time_suffix: "s".to_string(),
        }
    }
}
