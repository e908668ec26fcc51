use crate::chart::{select_pie_spec, select_scatter_spec, PieSpec, ScatterSpec};
use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is immutable for the life of the process; everything else is
/// a function of the two control values, re-derived by the setters whenever
/// a control reports a change.
pub struct AppState {
    /// Loaded dataset. Never mutated after startup.
    pub dataset: LaunchDataset,

    /// Current site control value.
    pub site_selection: SiteSelection,

    /// Current payload range control value.
    pub payload_range: PayloadRange,

    /// Latest pie spec, re-derived on site changes.
    pub pie: PieSpec,

    /// Latest scatter spec, re-derived on site and range changes.
    pub scatter: ScatterSpec,

    /// Stable booster-version colours for the scatter series.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Seed the controls with their defaults (every site, full payload
    /// range) and derive the initial chart specs.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site_selection = SiteSelection::All;
        let payload_range = PayloadRange::new(dataset.bounds.min, dataset.bounds.max);
        let booster_colors = ColorMap::new(&dataset.booster_versions);
        let pie = select_pie_spec(&dataset, &site_selection);
        let scatter = select_scatter_spec(&dataset, &site_selection, &payload_range);

        Self {
            dataset,
            site_selection,
            payload_range,
            pie,
            scatter,
            booster_colors,
        }
    }

    /// Site change handler: both charts depend on the site selection.
    pub fn set_site_selection(&mut self, selection: SiteSelection) {
        self.site_selection = selection;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Range change handler. The pie chart ignores the payload range, so
    /// only the scatter spec is re-derived here.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = select_pie_spec(&self.dataset, &self.site_selection);
    }

    fn refresh_scatter(&mut self) {
        self.scatter =
            select_scatter_spec(&self.dataset, &self.site_selection, &self.payload_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "A".to_string(),
                payload_mass_kg: 2000.0,
                booster_version: "v1.0".to_string(),
                outcome: Outcome::Success,
            },
            LaunchRecord {
                site: "B".to_string(),
                payload_mass_kg: 9000.0,
                booster_version: "FT".to_string(),
                outcome: Outcome::Failure,
            },
        ])
        .unwrap()
    }

    #[test]
    fn controls_default_to_all_sites_and_full_range() {
        let state = AppState::new(dataset());
        assert_eq!(state.site_selection, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(2000.0, 9000.0));
        assert_eq!(state.scatter.point_count(), 2);
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let mut state = AppState::new(dataset());
        state.set_site_selection(SiteSelection::Site("A".to_string()));
        assert_eq!(state.pie.title, "Success vs Failure for A");
        assert_eq!(state.scatter.point_count(), 1);
    }

    #[test]
    fn range_change_refreshes_the_scatter_only() {
        let mut state = AppState::new(dataset());
        let pie_before = state.pie.clone();
        state.set_payload_range(PayloadRange::new(0.0, 2500.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.point_count(), 1);
    }
}
