use std::fmt;

use super::model::LaunchRecord;

// ---------------------------------------------------------------------------
// Filter inputs: site selection and payload range
// ---------------------------------------------------------------------------

/// The site control's value: every site, or one exact site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection. Matching is exact
    /// and case-sensitive; an unknown name simply matches nothing.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

/// The payload control's value. The UI keeps both ends inside the dataset
/// bounds but nothing guarantees `low <= high`; an inverted range contains
/// no mass at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both ends. `low > high` is false for every mass.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filter operations
// ---------------------------------------------------------------------------

/// Keep the records passing the site selection, preserving input order.
pub fn filter_by_site<'a>(
    records: impl IntoIterator<Item = &'a LaunchRecord>,
    selection: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    records
        .into_iter()
        .filter(|rec| selection.matches(&rec.site))
        .collect()
}

/// Keep the records whose payload mass lies in the range, preserving input
/// order. An inverted range yields an empty subset, never an error.
pub fn filter_by_payload_range<'a>(
    records: impl IntoIterator<Item = &'a LaunchRecord>,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .into_iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: "FT".to_string(),
            outcome,
        }
    }

    fn sample() -> Vec<LaunchRecord> {
        vec![
            record("A", 2000.0, Outcome::Success),
            record("A", 5000.0, Outcome::Failure),
            record("B", 3000.0, Outcome::Success),
            record("B", 9000.0, Outcome::Success),
        ]
    }

    #[test]
    fn all_selection_is_identity() {
        let records = sample();
        let subset = filter_by_site(&records, &SiteSelection::All);
        let expected: Vec<&LaunchRecord> = records.iter().collect();
        assert_eq!(subset, expected);
    }

    #[test]
    fn site_selection_matches_exactly() {
        let records = sample();
        let subset = filter_by_site(&records, &SiteSelection::Site("A".to_string()));
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|rec| rec.site == "A"));
    }

    #[test]
    fn site_matching_is_case_sensitive() {
        let records = sample();
        let subset = filter_by_site(&records, &SiteSelection::Site("a".to_string()));
        assert!(subset.is_empty());
    }

    #[test]
    fn unknown_site_yields_empty_subset() {
        let records = sample();
        let subset = filter_by_site(&records, &SiteSelection::Site("LC-404".to_string()));
        assert!(subset.is_empty());
    }

    #[test]
    fn payload_range_is_inclusive_on_both_ends() {
        let records = sample();
        let subset = filter_by_payload_range(&records, &PayloadRange::new(2000.0, 3000.0));
        let masses: Vec<f64> = subset.iter().map(|rec| rec.payload_mass_kg).collect();
        assert_eq!(masses, vec![2000.0, 3000.0]);
    }

    #[test]
    fn inverted_range_yields_empty_subset() {
        let records = sample();
        let subset = filter_by_payload_range(&records, &PayloadRange::new(9000.0, 2000.0));
        assert!(subset.is_empty());
    }

    #[test]
    fn payload_range_is_complete() {
        let records = sample();
        let range = PayloadRange::new(0.0, 10_000.0);
        let subset = filter_by_payload_range(&records, &range);
        assert_eq!(subset.len(), records.len());
        for rec in subset {
            assert!(range.contains(rec.payload_mass_kg));
        }
    }

    /// Small deterministic LCG so the commutativity check runs over more
    /// shapes than the hand-written fixtures.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }
    }

    #[test]
    fn site_and_payload_filters_commute() {
        let sites = ["A", "B", "C", "D"];
        let mut rng = Lcg(7);
        let records: Vec<LaunchRecord> = (0..200)
            .map(|_| {
                let site = sites[(rng.next() % sites.len() as u64) as usize];
                let payload = (rng.next() % 10_000) as f64;
                let outcome = if rng.next() % 2 == 0 {
                    Outcome::Success
                } else {
                    Outcome::Failure
                };
                record(site, payload, outcome)
            })
            .collect();

        let selections = [
            SiteSelection::All,
            SiteSelection::Site("B".to_string()),
            SiteSelection::Site("nowhere".to_string()),
        ];
        let ranges = [
            PayloadRange::new(0.0, 10_000.0),
            PayloadRange::new(2500.0, 7500.0),
            PayloadRange::new(7500.0, 2500.0),
        ];

        for selection in &selections {
            for range in &ranges {
                let payload_then_site =
                    filter_by_site(filter_by_payload_range(&records, range), selection);
                let site_then_payload =
                    filter_by_payload_range(filter_by_site(&records, selection), range);
                assert_eq!(payload_then_site, site_then_payload);
            }
        }
    }
}
