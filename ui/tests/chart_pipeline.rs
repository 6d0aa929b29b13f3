//! End-to-end checks of the comparison chart: results in, draw commands and
//! SVG markup out.

use ui::chart::{
    self, paint, ChartDrawing, ChartLayout, ChartScales, ChartStyle, DrawCommand, Point,
    SeriesColor, SummaryCards, SvgSurface,
};
use ui::core::format::format_recovery;
use ui::core::sim::{
    ComparisonMode, SafetyStatus, SimSample, SimulationResult, SIMULATION_DURATION_SEC,
};

fn run(samples: &[(f64, f64)], status: &str) -> SimulationResult {
    let samples: Vec<SimSample> = samples
        .iter()
        .map(|&(t, e)| SimSample::new(t, e))
        .collect();
    let max_error_km = samples
        .iter()
        .map(|s| s.err_magnitude)
        .fold(0.0_f64, f64::max);
    SimulationResult {
        samples,
        max_error_km,
        recovery_time_sec: None,
        safety_status: SafetyStatus::new(status),
    }
}

fn polylines(drawing: &ChartDrawing) -> Vec<(SeriesColor, Vec<Point>)> {
    drawing
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Polyline { points, series, .. } => Some((*series, points.clone())),
            _ => None,
        })
        .collect()
}

fn draw(mode: ComparisonMode, with: &SimulationResult, without: &SimulationResult) -> ChartDrawing {
    chart::build_drawing(
        mode,
        with,
        without,
        &ChartLayout::default(),
        &ChartStyle::default(),
    )
}

#[test]
fn both_mode_draws_without_then_with_on_a_shared_scale() {
    let with = run(&[(0.0, 0.0), (10.0, 5.0)], "maintained");
    let without = run(&[(0.0, 0.0), (10.0, 20.0)], "breached");

    let drawing = draw(ComparisonMode::Both, &with, &without);
    let lines = polylines(&drawing);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, SeriesColor::WithoutRun);
    assert_eq!(lines[1].0, SeriesColor::WithRun);

    let inner_height = ChartLayout::default().inner_height();
    // Value 20 is the shared maximum, so it reaches the top of the plot.
    assert!((lines[0].1[1].y - 0.0).abs() < 1e-9);
    // Value 5 of 20 sits 75% of the way down.
    assert!((lines[1].1[1].y - inner_height * 0.75).abs() < 1e-9);
    assert!((lines[1].1[1].y - 90.0).abs() < 1e-9);
}

#[test]
fn single_modes_draw_one_line_in_their_run_color() {
    let with = run(&[(0.0, 1.0), (30.0, 2.0)], "maintained");
    let without = run(&[(0.0, 3.0), (30.0, 9.0)], "breached");

    let with_lines = polylines(&draw(ComparisonMode::With, &with, &without));
    assert_eq!(with_lines.len(), 1);
    assert_eq!(with_lines[0].0, SeriesColor::WithRun);

    let without_lines = polylines(&draw(ComparisonMode::Without, &with, &without));
    assert_eq!(without_lines.len(), 1);
    assert_eq!(without_lines[0].0, SeriesColor::WithoutRun);
    // Its own max (9) maps to the top.
    assert!(without_lines[0].1[1].y.abs() < 1e-9);
}

#[test]
fn time_axis_is_fixed_to_the_run_length() {
    let with = run(&[(0.0, 1.0), (12.0, 4.0)], "maintained");
    let series = chart::select_series(ComparisonMode::With, &with, &with);
    let layout = ChartLayout::default();
    let scales = ChartScales::build(&series, &layout);

    assert_eq!(scales.time.map(0.0), 0.0);
    assert!((scales.time.map(SIMULATION_DURATION_SEC) - layout.inner_width()).abs() < 1e-9);
    assert!((layout.inner_width() - 406.0).abs() < 1e-9);
}

#[test]
fn empty_and_flat_runs_render_axes_without_panicking() {
    let empty = run(&[], "maintained");
    let drawing = draw(ComparisonMode::With, &empty, &empty);
    let lines = polylines(&drawing);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].1.is_empty());
    assert!(drawing.commands.len() > 1, "axes still drawn");

    let flat = run(&[(0.0, 0.0), (60.0, 0.0)], "maintained");
    let lines = polylines(&draw(ComparisonMode::With, &flat, &flat));
    let bottom = ChartLayout::default().inner_height();
    assert!(lines[0].1.iter().all(|p| (p.y - bottom).abs() < 1e-9));
}

#[test]
fn repainting_an_svg_surface_does_not_accumulate_lines() {
    let with = run(&[(0.0, 0.0), (10.0, 5.0)], "maintained");
    let without = run(&[(0.0, 0.0), (10.0, 20.0)], "breached");
    let drawing = draw(ComparisonMode::Both, &with, &without);

    let mut surface = SvgSurface::new();
    paint(&mut surface, &drawing);
    let first = surface.to_document();
    paint(&mut surface, &drawing);

    assert_eq!(surface.line_count(), 2);
    assert_eq!(surface.to_document(), first);
}

#[test]
fn summary_cards_follow_the_primary_run() {
    let mut with = run(&[(0.0, 0.0), (10.0, 5.0)], "maintained");
    with.recovery_time_sec = Some(42.5);
    let without = run(&[(0.0, 0.0), (10.0, 20.0)], "breached");

    let cards = SummaryCards::build(ComparisonMode::With.primary(&with, &without));
    assert_eq!(cards.max_error.value, "5.0 km");
    assert_eq!(cards.recovery.value, "43s");
    assert_eq!(cards.safety.value, "maintained");

    let cards = SummaryCards::build(ComparisonMode::Without.primary(&with, &without));
    assert_eq!(cards.max_error.value, "20.0 km");
    assert_eq!(cards.recovery.value, format_recovery(None));
    assert_eq!(cards.safety.value, "breached");
}
