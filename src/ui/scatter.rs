use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::chart::ScatterSpec;
use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Payload / outcome scatter plot (lower central panel)
// ---------------------------------------------------------------------------

/// Render a [`ScatterSpec`] with one named point series per booster version.
/// An empty spec still draws the plot frame, just with no points.
pub fn scatter_plot(ui: &mut Ui, spec: &ScatterSpec, colors: &ColorMap) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
        if spec.is_empty() {
            ui.label(RichText::new("No launches match the current selection.").weak());
        }
    });

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.booster_version)
                        .color(colors.color_for(&series.booster_version))
                        .radius(3.5),
                );
            }
        });
}
