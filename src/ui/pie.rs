use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Ui, Vec2};
use eframe::egui::epaint::Mesh;

use crate::chart::PieSpec;
use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Outcome pie chart (upper central panel)
// ---------------------------------------------------------------------------

/// Render a [`PieSpec`] with the egui painter: one triangle-fan per slice
/// plus a swatch legend. An empty spec renders as a placeholder message.
pub fn pie_chart(ui: &mut Ui, spec: &PieSpec) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let total = spec.total();
    if spec.is_empty() || total <= 0.0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);

    let radius = (rect.height().min(rect.width() * 0.6) * 0.5 - 12.0).max(20.0);
    let center = Pos2::new(rect.left() + radius + 16.0, rect.center().y);
    let colors = generate_palette(spec.slices.len());

    // Slices start at 12 o'clock and run clockwise in spec order.
    let mut start_angle = -FRAC_PI_2;
    for (slice, color) in spec.slices.iter().zip(colors.iter()) {
        let sweep = (slice.value / total) as f32 * TAU;
        paint_slice(&painter, center, radius, start_angle, sweep, *color);
        start_angle += sweep;
    }

    // ---- Legend, right of the pie ----
    let row_height = 18.0;
    let legend_x = center.x + radius + 24.0;
    let mut legend_y =
        rect.center().y - spec.slices.len() as f32 * row_height * 0.5 + row_height * 0.5;
    let text_color = ui.visuals().text_color();

    for (slice, color) in spec.slices.iter().zip(colors.iter()) {
        let swatch = Rect::from_center_size(Pos2::new(legend_x, legend_y), Vec2::splat(10.0));
        painter.rect_filled(swatch, 2.0, *color);
        let percent = slice.value / total * 100.0;
        painter.text(
            Pos2::new(legend_x + 12.0, legend_y),
            Align2::LEFT_CENTER,
            format!("{}: {:.0} ({percent:.1}%)", slice.label, slice.value),
            FontId::proportional(13.0),
            text_color,
        );
        legend_y += row_height;
    }
}

/// Paint one pie slice as a triangle fan. A fan stays correct for sweeps
/// past 180°, which a single convex polygon would not.
fn paint_slice(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);

    // Roughly 3° per segment keeps the arc smooth at any radius.
    let steps = ((sweep / 0.05).ceil() as usize).max(2);
    for i in 0..=steps {
        let angle = start + sweep * i as f32 / steps as f32;
        let point = center + radius * Vec2::new(angle.cos(), angle.sin());
        mesh.colored_vertex(point, color);
    }
    for i in 0..steps as u32 {
        mesh.add_triangle(0, i + 1, i + 2);
    }

    painter.add(Shape::mesh(mesh));
}
