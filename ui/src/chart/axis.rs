//! Axis drawing: domain line, inner tick marks and tick labels.
//!
//! Outer ticks are suppressed, so the domain line is a bare segment across
//! the scale's range.

use super::config::ChartStyle;
use super::render::{DrawCommand, Point, Stroke, TextAnchor};
use super::scale::LinearScale;
use super::ticks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy)]
pub struct Axis<'a> {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub suffix: &'a str,
    /// Thousands separators in tick labels.
    pub grouped: bool,
    /// Distance from the plot origin along the cross axis (the bottom axis
    /// sits at `inner_height`).
    pub offset: f64,
}

impl Axis<'_> {
    pub fn draw(&self, style: &ChartStyle, out: &mut Vec<DrawCommand>) {
        let stroke = Stroke {
            color: style.axis_stroke.clone(),
            width: style.axis_stroke_width,
        };
        let (r0, r1) = self.scale.range;

        out.push(DrawCommand::Line {
            from: self.place(r0, 0.0),
            to: self.place(r1, 0.0),
            stroke: stroke.clone(),
        });

        let step = self.scale.tick_step(self.tick_count);
        let label_distance = style.tick_size.max(0.0) + style.tick_padding;
        for value in self.scale.ticks(self.tick_count) {
            let along = self.scale.map(value);
            out.push(DrawCommand::Line {
                from: self.place(along, 0.0),
                to: self.place(along, style.tick_size),
                stroke: stroke.clone(),
            });

            let (anchor, dy_em) = match self.orient {
                AxisOrient::Bottom => (TextAnchor::Middle, 0.71),
                AxisOrient::Left => (TextAnchor::End, 0.32),
            };
            out.push(DrawCommand::Label {
                at: self.place(along, label_distance),
                text: ticks::format_tick(value, step, self.suffix, self.grouped),
                anchor,
                dy_em,
                fill: style.tick_text_fill.clone(),
                font_size: style.tick_font_size,
            });
        }
    }

    /// Converts (position along the axis, distance outward from it) into
    /// plot coordinates. "Outward" is down for the bottom axis and left for
    /// the left axis.
    fn place(&self, along: f64, outward: f64) -> Point {
        match self.orient {
            AxisOrient::Bottom => Point::new(along, self.offset + outward),
            AxisOrient::Left => Point::new(self.offset - outward, along),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_labels_carry_suffix() {
        let axis = Axis {
            orient: AxisOrient::Bottom,
            scale: LinearScale::new((0.0, 60.0), (0.0, 406.0)),
            tick_count: 5,
            suffix: "s",
            grouped: false,
            offset: 120.0,
        };
        let mut out = Vec::new();
        axis.draw(&ChartStyle::default(), &mut out);
        assert_eq!(
            labels(&out),
            vec!["0s", "10s", "20s", "30s", "40s", "50s", "60s"]
        );

        // Domain line spans the full range without end caps.
        assert_eq!(
            out[0],
            DrawCommand::Line {
                from: Point::new(0.0, 120.0),
                to: Point::new(406.0, 120.0),
                stroke: Stroke {
                    color: "rgba(255,255,255,0.1)".into(),
                    width: 1.0
                },
            }
        );
    }

    #[test]
    fn left_axis_ticks_point_outward() {
        let axis = Axis {
            orient: AxisOrient::Left,
            scale: LinearScale::new((0.0, 20.0), (120.0, 0.0)),
            tick_count: 4,
            suffix: "",
            grouped: true,
            offset: 0.0,
        };
        let mut out = Vec::new();
        axis.draw(&ChartStyle::default(), &mut out);
        assert_eq!(labels(&out), vec!["0", "5", "10", "15", "20"]);

        let tick = out
            .iter()
            .skip(1)
            .find_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        assert_eq!(tick, (Point::new(0.0, 120.0), Point::new(-6.0, 120.0)));

        let anchors: Vec<TextAnchor> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { anchor, .. } => Some(*anchor),
                _ => None,
            })
            .collect();
        assert!(anchors.iter().all(|a| *a == TextAnchor::End));
    }

    #[test]
    fn left_axis_groups_large_values() {
        let axis = Axis {
            orient: AxisOrient::Left,
            scale: LinearScale::new((0.0, 2000.0), (120.0, 0.0)),
            tick_count: 4,
            suffix: "",
            grouped: true,
            offset: 0.0,
        };
        let mut out = Vec::new();
        axis.draw(&ChartStyle::default(), &mut out);
        assert_eq!(labels(&out), vec!["0", "500", "1,000", "1,500", "2,000"]);
    }
}
