use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::figure::{Figure, Series};

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render every series of `figure` on shared axes, stepfilled.
pub fn histogram_plot(ui: &mut Ui, figure: &Figure) {
    let (lo, hi) = figure.range;

    let mut plot = Plot::new("histogram_plot")
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .include_x(lo)
        .include_x(hi)
        .include_y(0.0)
        .include_y(figure.max_count() as f64)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if figure.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &figure.series {
            plot_ui.bar_chart(filled_area(series));
            plot_ui.line(step_outline(series));
        }
    });
}

/// Borderless bin-wide bars so adjacent bins merge into one filled area.
fn filled_area(series: &Series) -> BarChart {
    let bars: Vec<Bar> = series
        .histogram
        .iter_bins()
        .filter(|&(_, _, count)| count > 0)
        .map(|(left, right, count)| {
            Bar::new((left + right) / 2.0, count as f64)
                .width(right - left)
                .fill(series.color.fill())
                .stroke(Stroke::NONE)
        })
        .collect();

    BarChart::new(bars)
        .name(&series.name)
        .color(series.color.stroke())
}

/// The edge shares the fill's opacity.
fn outline_color(series: &Series) -> Color32 {
    series.color.fill()
}

/// Outline tracing the top of the filled area, closed down to zero at both ends.
fn step_outline(series: &Series) -> Line<'_> {
    let points: PlotPoints = step_points(series).into_iter().collect();
    Line::new(points)
        .name(&series.name)
        .color(outline_color(series))
        .width(1.0)
}

fn step_points(series: &Series) -> Vec<[f64; 2]> {
    let edges = series.histogram.edges();
    let mut points = Vec::with_capacity(2 * edges.len());
    points.push([edges[0], 0.0]);
    for (left, right, count) in series.histogram.iter_bins() {
        points.push([left, count as f64]);
        points.push([right, count as f64]);
    }
    points.push([edges[edges.len() - 1], 0.0]);
    points
}
