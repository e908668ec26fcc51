use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the 0/1 `class` indicator of a launch
// ---------------------------------------------------------------------------

/// Launch outcome, decoded from the dataset's 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode a numeric indicator. Anything other than exactly 0 or 1 is
    /// not interpretable as an outcome.
    pub fn from_indicator(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Outcome::Success)
        } else if value == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }

    /// The indicator value back as `f64`, for the scatter y-axis.
    pub fn as_indicator(self) -> f64 {
        match self {
            Outcome::Success => 1.0,
            Outcome::Failure => 0.0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name.
    pub site: String,
    /// Payload mass in kilograms. Finite and non-negative.
    pub payload_mass_kg: f64,
    /// Booster version label.
    pub booster_version: String,
    /// Launch outcome.
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// PayloadBounds – min/max payload over the dataset
// ---------------------------------------------------------------------------

/// Minimum and maximum payload mass over the whole dataset, computed once at
/// load time and used to seed the range control. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed derived data. Built once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site names in first-appearance order (dropdown population).
    pub sites: Vec<String>,
    /// Sorted set of distinct booster versions (series colour mapping).
    pub booster_versions: BTreeSet<String>,
    /// Payload mass bounds over `records`.
    pub bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Build the derived indices from loaded records.
    ///
    /// Returns `None` for an empty record list; bounds are meaningless
    /// without at least one row, and the loader rejects that case anyway.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?;

        let mut sites: Vec<String> = Vec::new();
        let mut booster_versions: BTreeSet<String> = BTreeSet::new();
        let mut bounds = PayloadBounds {
            min: first.payload_mass_kg,
            max: first.payload_mass_kg,
        };

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            booster_versions.insert(rec.booster_version.clone());
            bounds.min = bounds.min.min(rec.payload_mass_kg);
            bounds.max = bounds.max.max(rec.payload_mass_kg);
        }

        Some(LaunchDataset {
            records,
            sites,
            booster_versions,
            bounds,
        })
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
