use eframe::egui::{self, RichText, Ui};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Top bar – title and per-series summary
// ---------------------------------------------------------------------------

/// Render the chart title with a short summary of each series underneath.
pub fn title_bar(ui: &mut Ui, figure: &Figure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.title);
    });

    ui.horizontal(|ui: &mut Ui| {
        for series in &figure.series {
            let hist = &series.histogram;
            let mut text = format!("{}: {} samples", series.name, hist.total());
            if hist.excluded() > 0 {
                text.push_str(&format!(" ({} outside range)", hist.excluded()));
            }
            ui.label(RichText::new(text).color(series.color.stroke()));
            ui.separator();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.weak(format!("bin width {}", bin_width(figure)));
        });
    });
}

fn bin_width(figure: &Figure) -> f64 {
    figure
        .series
        .first()
        .map(|s| s.histogram.width())
        .unwrap_or(0.0)
}
