//! SVG adapter: replays a drawing into standalone SVG markup. Used for the
//! SVG export and as the input to the PNG rasterizer.

use std::fmt::Write as _;

use super::config::ChartLayout;
use super::render::{ChartDrawing, DrawCommand, Point};
use super::surface::{paint, DrawingSurface};
use crate::core::format::to_fixed;

pub const LINE_CLASS: &str = "metrics-chart__line";

#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    layout: ChartLayout,
    background: Option<String>,
    font_family: Option<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the whole view box before the chart; exported images need an
    /// opaque backdrop because the tick text is light-on-dark.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| el.contains(LINE_CLASS))
            .count()
    }

    pub fn to_document(&self) -> String {
        let layout = &self.layout;
        let mut doc = String::new();
        let _ = write!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"{vb}\">",
            w = num(layout.width),
            h = num(layout.height),
            vb = layout.view_box(),
        );
        if let Some(fill) = &self.background {
            let _ = write!(
                doc,
                "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                num(layout.width),
                num(layout.height),
                escape(fill)
            );
        }
        let _ = write!(
            doc,
            "<g transform=\"translate({},{})\"",
            num(layout.margin.left),
            num(layout.margin.top)
        );
        if let Some(family) = &self.font_family {
            let _ = write!(doc, " font-family=\"{}\"", escape(family));
        }
        doc.push('>');
        for element in &self.elements {
            doc.push_str(element);
        }
        doc.push_str("</g></svg>");
        doc
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn begin(&mut self, layout: &ChartLayout) {
        self.layout = *layout;
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.elements.push(element(command));
    }
}

/// Convenience: paint `drawing` onto a fresh surface and serialize it.
pub fn svg_document(drawing: &ChartDrawing, background: Option<&str>) -> String {
    let mut surface = SvgSurface::new().with_font_family("Inter, sans-serif");
    if let Some(color) = background {
        surface = surface.with_background(color);
    }
    paint(&mut surface, drawing);
    surface.to_document()
}

/// Path data for an open polyline (`M x,y L x,y ...`). Empty when there are no points.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (idx, p) in points.iter().enumerate() {
        let cmd = if idx == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", num(p.x), num(p.y));
    }
    d
}

fn element(command: &DrawCommand) -> String {
    match command {
        DrawCommand::Line { from, to, stroke } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            escape(&stroke.color),
            num(stroke.width)
        ),
        DrawCommand::Label {
            at,
            text,
            anchor,
            dy_em,
            fill,
            font_size,
        } => format!(
            "<text x=\"{}\" y=\"{}\" dy=\"{}em\" text-anchor=\"{}\" fill=\"{}\" font-size=\"{}\">{}</text>",
            num(at.x),
            num(at.y),
            num(*dy_em),
            anchor.as_svg(),
            escape(fill),
            num(*font_size),
            escape(text)
        ),
        DrawCommand::Polyline { points, stroke, .. } => format!(
            "<path class=\"{LINE_CLASS}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>",
            path_data(points),
            escape(&stroke.color),
            num(stroke.width)
        ),
    }
}

/// Compact coordinate formatting (`203`, `90.5`, never `-0`).
pub fn num(value: f64) -> String {
    let text = to_fixed(value, 3);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
