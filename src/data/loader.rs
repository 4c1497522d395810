use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to turn an input file into a [`SalesDataset`].
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Raw row shape shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One input row before the sequential index is derived.
#[derive(Debug, Deserialize)]
struct RawRecord {
    month: String,
    sales: f64,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least `month` and `sales` columns
/// * `.json` – records orientation: `[{ "month": "Jan", "sales": 120 }, ...]`
///
/// The 1-based `index` column is derived from row order; it is never read
/// from the file. Sales values are taken as parsed, with no further
/// validation.
pub fn load_file(path: &Path) -> Result<SalesDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataLoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<SalesDataset, DataLoadError> {
    let reader = csv::Reader::from_path(path)?;
    read_csv(reader)
}

/// Parse CSV from any reader. Split out so tests can feed in-memory data.
fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<SalesDataset, DataLoadError> {
    // Fail fast on a missing column rather than letting row deserialization
    // produce a per-row error later.
    let headers = reader.headers()?.clone();
    for required in ["month", "sales"] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        let raw = result?;
        rows.push((raw.month, raw.sales));
    }
    Ok(SalesDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "month": "Jan", "sales": 120 },
///   { "month": "Feb", "sales": 135 }
/// ]
/// ```
fn load_json(path: &Path) -> Result<SalesDataset, DataLoadError> {
    let text = std::fs::read_to_string(path)?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text)?;
    let rows = raw.into_iter().map(|r| (r.month, r.sales)).collect();
    Ok(SalesDataset::from_rows(rows))
}
