use eframe::egui::{self, RichText, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

/// Slider step for the payload range controls, in kilograms.
const PAYLOAD_STEP_KG: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title / summary bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches across {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the control panel. Each widget's change event calls the matching
/// state setter, which re-runs the affected selectors.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone what we need so we can mutate state inside the closures.
    let sites = state.dataset.sites.clone();
    let bounds = state.dataset.bounds;

    // ---- Site selector ----
    ui.strong("Launch site");
    let current = state.site_selection.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.set_site_selection(SiteSelection::All);
            }
            for site in &sites {
                let selected = matches!(&current, SiteSelection::Site(name) if name == site);
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site_selection(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;
    let mut changed = false;

    changed |= ui
        .add(
            egui::Slider::new(&mut low, bounds.min..=bounds.max)
                .step_by(PAYLOAD_STEP_KG)
                .text("Min"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut high, bounds.min..=bounds.max)
                .step_by(PAYLOAD_STEP_KG)
                .text("Max"),
        )
        .changed();

    if changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    // The sliders are clamped to the bounds but not to each other; an
    // inverted range is valid input and simply selects nothing.
    if state.payload_range.low > state.payload_range.high {
        ui.label(RichText::new("Min exceeds max: no launches selected").weak());
    }

    ui.separator();
    ui.label(format!("{} launches in view", state.scatter.point_count()));
}
