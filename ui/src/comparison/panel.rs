use dioxus::prelude::*;

use crate::{
    chart::{
        self,
        svg::{num, path_data, LINE_CLASS},
        ChartLayout, ChartStyle, DrawCommand, MetricCard, SeriesColor, SummaryCards,
    },
    comparison::value_class,
    core::sim::{ComparisonMode, SimulationResult},
    t,
};

/// Summary cards for the primary run plus the error-over-time chart.
///
/// Series, scales and draw commands are rebuilt on every render; the
/// component only re-renders when `mode` or either result changes. The
/// chart body is emitted straight from the drawing, so each render replaces
/// the previous one instead of adding to it.
#[component]
pub fn MetricsPanel(
    mode: ComparisonMode,
    with_result: SimulationResult,
    without_result: SimulationResult,
) -> Element {
    let layout = ChartLayout::default();
    let style = ChartStyle::default();
    let drawing = chart::build_drawing(mode, &with_result, &without_result, &layout, &style);
    let origin = drawing.origin();
    let view_box = layout.view_box();

    let cards = SummaryCards::build(mode.primary(&with_result, &without_result));
    let legend: Vec<SeriesColor> = drawing
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Polyline { series, .. } => Some(*series),
            _ => None,
        })
        .collect();

    rsx! {
        section { class: "metrics-panel",
            div { class: "metrics-panel__cards",
                for card in cards.cards() {
                    {render_card(card)}
                }
            }
            div { class: "metrics-chart",
                p { class: "metrics-chart__title", {t!("chart-title")} }
                svg {
                    class: "metrics-chart__svg",
                    view_box: "{view_box}",
                    g { transform: "translate({num(origin.x)},{num(origin.y)})",
                        for (idx, command) in drawing.commands.iter().enumerate() {
                            {render_command(idx, command)}
                        }
                    }
                }
                ul { class: "metrics-chart__legend",
                    for color in legend {
                        li { key: "{color.run_key()}", class: "metrics-chart__legend-item",
                            span { class: "metrics-chart__swatch {color.css_modifier()}" }
                            span { "{color.legend_label()}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_card(card: &MetricCard) -> Element {
    let label = card.kind.label();
    let class_name = value_class(card.accent);
    rsx! {
        div { class: "metric-card",
            p { class: "metric-card__label", "{label}" }
            p { class: "{class_name}", "{card.value}" }
        }
    }
}

fn render_command(idx: usize, command: &DrawCommand) -> Element {
    match command {
        DrawCommand::Line { from, to, stroke } => rsx! {
            line {
                key: "{idx}",
                x1: "{num(from.x)}",
                y1: "{num(from.y)}",
                x2: "{num(to.x)}",
                y2: "{num(to.y)}",
                stroke: "{stroke.color}",
                stroke_width: "{num(stroke.width)}",
            }
        },
        DrawCommand::Label {
            at,
            text: content,
            anchor,
            dy_em,
            fill,
            font_size,
        } => rsx! {
            text {
                key: "{idx}",
                x: "{num(at.x)}",
                y: "{num(at.y)}",
                dy: "{num(*dy_em)}em",
                text_anchor: anchor.as_svg(),
                fill: "{fill}",
                font_size: "{num(*font_size)}",
                "{content}"
            }
        },
        DrawCommand::Polyline { points, stroke, .. } => rsx! {
            path {
                key: "{idx}",
                class: LINE_CLASS,
                d: path_data(points),
                fill: "none",
                stroke: "{stroke.color}",
                stroke_width: "{num(stroke.width)}",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }
        },
    }
}
