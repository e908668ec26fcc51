use crate::data::filter::{
    filter_by_payload_range, filter_by_site, PayloadRange, SiteSelection,
};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// One pie slice: a category label and its (count) value.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Everything the pie widget needs to draw: title plus non-empty slices.
/// A spec with no slices is valid and renders as a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// One scatter series: all points sharing a booster version.
/// Points are `[payload mass (kg), outcome indicator]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_version: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything the scatter widget needs to draw. A spec with no series is
/// valid and renders as an empty plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// View selectors
// ---------------------------------------------------------------------------

/// Build the outcome pie spec for the current site selection.
///
/// With every site selected the chart compares sites by success count; with
/// one site selected it compares successes against failures at that site.
/// The payload range does not feed this chart; only the scatter honours it.
pub fn select_pie_spec(dataset: &LaunchDataset, selection: &SiteSelection) -> PieSpec {
    match selection {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|site| PieSlice {
                    label: site.clone(),
                    value: dataset
                        .records
                        .iter()
                        .filter(|rec| rec.site == *site && rec.outcome.is_success())
                        .count() as f64,
                })
                .filter(|slice| slice.value > 0.0)
                .collect();

            PieSpec {
                title: "Success Rates for All Sites".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let subset = filter_by_site(&dataset.records, selection);
            let successes = subset.iter().filter(|rec| rec.outcome.is_success()).count();
            let failures = subset.len() - successes;

            let mut slices = Vec::new();
            if successes > 0 {
                slices.push(PieSlice {
                    label: Outcome::Success.to_string(),
                    value: successes as f64,
                });
            }
            if failures > 0 {
                slices.push(PieSlice {
                    label: Outcome::Failure.to_string(),
                    value: failures as f64,
                });
            }

            PieSpec {
                title: format!("Success vs Failure for {name}"),
                slices,
            }
        }
    }
}

/// Build the payload/outcome scatter spec for the current controls.
///
/// The subset is the payload-range filter over the full dataset, then the
/// site filter over that result, in original row order. Points are grouped
/// into one series per booster version (first-appearance order) so the
/// renderer can colour by booster.
pub fn select_scatter_spec(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterSpec {
    let subset = filter_by_site(filter_by_payload_range(&dataset.records, range), selection);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in subset {
        let point = [rec.payload_mass_kg, rec.outcome.as_indicator()];
        match series
            .iter_mut()
            .find(|s| s.booster_version == rec.booster_version)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                booster_version: rec.booster_version.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterSpec {
        title: "Payload Mass vs Launch Success".to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn record(site: &str, payload: f64, booster: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: booster.to_string(),
            outcome,
        }
    }

    /// The four-record fixture: two A launches (one success, one failure)
    /// and two B successes.
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 2000.0, "v1.0", Outcome::Success),
            record("A", 5000.0, "v1.1", Outcome::Failure),
            record("B", 3000.0, "v1.1", Outcome::Success),
            record("B", 9000.0, "FT", Outcome::Success),
        ])
        .unwrap()
    }

    fn slice_value(spec: &PieSpec, label: &str) -> Option<f64> {
        spec.slices
            .iter()
            .find(|slice| slice.label == label)
            .map(|slice| slice.value)
    }

    #[test]
    fn pie_all_sites_counts_successes_per_site() {
        let spec = select_pie_spec(&dataset(), &SiteSelection::All);
        assert_eq!(spec.title, "Success Rates for All Sites");
        assert_eq!(slice_value(&spec, "A"), Some(1.0));
        assert_eq!(slice_value(&spec, "B"), Some(2.0));
        assert_eq!(spec.total(), 3.0);
    }

    #[test]
    fn pie_single_site_splits_success_and_failure() {
        let spec = select_pie_spec(&dataset(), &SiteSelection::Site("A".to_string()));
        assert_eq!(spec.title, "Success vs Failure for A");
        assert_eq!(slice_value(&spec, "Success"), Some(1.0));
        assert_eq!(slice_value(&spec, "Failure"), Some(1.0));
    }

    #[test]
    fn pie_omits_zero_slices() {
        let spec = select_pie_spec(&dataset(), &SiteSelection::Site("B".to_string()));
        assert_eq!(slice_value(&spec, "Success"), Some(2.0));
        assert_eq!(slice_value(&spec, "Failure"), None);
    }

    #[test]
    fn pie_unknown_site_is_a_valid_empty_spec() {
        let spec = select_pie_spec(&dataset(), &SiteSelection::Site("nowhere".to_string()));
        assert!(spec.is_empty());
        assert_eq!(spec.title, "Success vs Failure for nowhere");
    }

    #[test]
    fn scatter_honours_the_payload_range() {
        let spec = select_scatter_spec(
            &dataset(),
            &SiteSelection::All,
            &PayloadRange::new(2000.0, 5000.0),
        );
        assert_eq!(spec.title, "Payload Mass vs Launch Success");
        assert_eq!(spec.point_count(), 3);

        let all_points: Vec<[f64; 2]> = spec
            .series
            .iter()
            .flat_map(|series| series.points.iter().copied())
            .collect();
        assert!(all_points.contains(&[2000.0, 1.0]));
        assert!(all_points.contains(&[5000.0, 0.0]));
        assert!(all_points.contains(&[3000.0, 1.0]));
        assert!(!all_points.contains(&[9000.0, 1.0]));
    }

    #[test]
    fn scatter_single_site_full_range_keeps_both_records() {
        let spec = select_scatter_spec(
            &dataset(),
            &SiteSelection::Site("B".to_string()),
            &PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(spec.point_count(), 2);
    }

    #[test]
    fn scatter_groups_points_by_booster_version() {
        let spec = select_scatter_spec(
            &dataset(),
            &SiteSelection::All,
            &PayloadRange::new(0.0, 10_000.0),
        );
        let names: Vec<&str> = spec
            .series
            .iter()
            .map(|series| series.booster_version.as_str())
            .collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT"]);
        let v11 = spec
            .series
            .iter()
            .find(|series| series.booster_version == "v1.1")
            .unwrap();
        assert_eq!(v11.points.len(), 2);
    }

    #[test]
    fn scatter_inverted_range_is_a_valid_empty_spec() {
        let spec = select_scatter_spec(
            &dataset(),
            &SiteSelection::All,
            &PayloadRange::new(9000.0, 2000.0),
        );
        assert!(spec.is_empty());
        assert_eq!(spec.point_count(), 0);
    }
}
