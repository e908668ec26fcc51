use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Required columns
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Startup-fatal: the dataset file cannot be turned into a [`LaunchDataset`].
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("unsupported file extension '.{0}'")]
    UnsupportedExtension(String),

    #[error("invalid table structure: {0}")]
    Structure(String),

    #[error("dataset contains no launch records")]
    Empty,

    #[error(transparent)]
    Format(#[from] DataFormatError),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("malformed parquet data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

/// A row whose cell values cannot be interpreted under the fixed schema.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("row {row}: payload mass '{value}' is not a non-negative number")]
    PayloadMass { row: usize, value: String },

    #[error("row {row}: outcome class '{value}' is not a 0/1 indicator")]
    OutcomeClass { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the schema columns (extra columns ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the schema names
///
/// Called exactly once at startup; an empty table is an error because the
/// dashboard must not start with no data.
pub fn load_file(path: &Path) -> Result<LaunchDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedExtension(other.to_string())),
    };

    LaunchDataset::from_records(records).ok_or(DataLoadError::Empty)
}

// -- Shared cell parsing --

fn parse_payload(raw: &str, row: usize) -> Result<f64, DataFormatError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|mass| mass.is_finite() && *mass >= 0.0)
        .ok_or_else(|| DataFormatError::PayloadMass {
            row,
            value: raw.to_string(),
        })
}

fn parse_outcome(raw: &str, row: usize) -> Result<Outcome, DataFormatError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(Outcome::from_indicator)
        .ok_or_else(|| DataFormatError::OutcomeClass {
            row,
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let booster_idx = column(COL_BOOSTER)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        records.push(LaunchRecord {
            site: cell(site_idx).to_string(),
            payload_mass_kg: parse_payload(cell(payload_idx), row)?,
            booster_version: cell(booster_idx).to_string(),
            outcome: parse_outcome(cell(class_idx), row)?,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` output:
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "Booster Version": "F9 v1.1",
///     "class": 1
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| DataLoadError::Structure("top-level JSON is not an array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.iter().enumerate() {
        let obj = value.as_object().ok_or_else(|| {
            DataLoadError::Structure(format!("row {row} is not a JSON object"))
        })?;

        let field = |name: &'static str| obj.get(name).ok_or(DataLoadError::MissingColumn(name));

        let site = field(COL_SITE)?.as_str().ok_or_else(|| {
            DataLoadError::Structure(format!("row {row}: '{COL_SITE}' is not a string"))
        })?;
        let booster = field(COL_BOOSTER)?.as_str().ok_or_else(|| {
            DataLoadError::Structure(format!("row {row}: '{COL_BOOSTER}' is not a string"))
        })?;

        let payload_value = field(COL_PAYLOAD)?;
        let payload = payload_value
            .as_f64()
            .filter(|mass| mass.is_finite() && *mass >= 0.0)
            .ok_or_else(|| DataFormatError::PayloadMass {
                row,
                value: payload_value.to_string(),
            })?;

        let class_value = field(COL_CLASS)?;
        let outcome = class_value
            .as_f64()
            .and_then(Outcome::from_indicator)
            .ok_or_else(|| DataFormatError::OutcomeClass {
                row,
                value: class_value.to_string(),
            })?;

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: booster.to_string(),
            outcome,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Flat-column parquet, as written by `df.to_parquet()`:
///
/// - `Launch Site`: Utf8
/// - `Payload Mass (kg)`: Float64 / Float32 / Int64 / Int32
/// - `Booster Version`: Utf8
/// - `class`: Int64 / Int32 / Float64 / Boolean
///
/// Any other columns are ignored.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut row_base = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map_err(|_| DataLoadError::MissingColumn(name))
        };
        let site_col = batch.column(column(COL_SITE)?);
        let payload_col = batch.column(column(COL_PAYLOAD)?);
        let booster_col = batch.column(column(COL_BOOSTER)?);
        let class_col = batch.column(column(COL_CLASS)?);

        for batch_row in 0..batch.num_rows() {
            let row = row_base + batch_row;

            let site = scalar_str(site_col, batch_row).ok_or_else(|| {
                DataLoadError::Structure(format!("row {row}: '{COL_SITE}' is not a string"))
            })?;
            let booster = scalar_str(booster_col, batch_row).ok_or_else(|| {
                DataLoadError::Structure(format!("row {row}: '{COL_BOOSTER}' is not a string"))
            })?;

            let payload = scalar_f64(payload_col, batch_row)
                .filter(|mass| mass.is_finite() && *mass >= 0.0)
                .ok_or_else(|| DataFormatError::PayloadMass {
                    row,
                    value: cell_display(payload_col, batch_row),
                })?;

            let outcome = scalar_f64(class_col, batch_row)
                .and_then(Outcome::from_indicator)
                .ok_or_else(|| DataFormatError::OutcomeClass {
                    row,
                    value: cell_display(class_col, batch_row),
                })?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg: payload,
                booster_version: booster,
                outcome,
            });
        }

        row_base += batch.num_rows();
    }

    Ok(records)
}

// -- Arrow helpers --

/// Extract a string cell from a Utf8 or LargeUtf8 column.
fn scalar_str(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|arr| arr.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Extract a numeric cell as `f64` from any of the supported scalar types.
fn scalar_f64(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|arr| arr.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Boolean => col
            .as_any()
            .downcast_ref::<BooleanArray>()
            .map(|arr| if arr.value(row) { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Best-effort rendering of a cell for error messages.
fn cell_display(col: &Arc<dyn Array>, row: usize) -> String {
    if col.is_null(row) {
        return "<null>".to_string();
    }
    match scalar_f64(col, row) {
        Some(v) => format!("{v}"),
        None => format!("{:?}", col.data_type()),
    }
}
