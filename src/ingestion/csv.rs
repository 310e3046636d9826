//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Dataset, Record, COUNTY, POPULATION, STATE};

/// Load a CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `County`, `State` and `2014 Population` (order can differ).
/// - Every other column becomes an extra field keyed by its header.
/// - Values are kept as text (trimmed); nothing is parsed at load time.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<Dataset> {
    let headers = rdr.headers()?.clone();

    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
    };
    let county_idx = position(COUNTY)?;
    let state_idx = position(STATE)?;
    let population_idx = position(POPULATION)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim().to_owned();
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![county_idx, state_idx, population_idx].contains(idx))
            .map(|(idx, name)| (name.trim().to_owned(), cell(idx)));
        records.push(Record::new(
            cell(county_idx),
            cell(state_idx),
            cell(population_idx),
            extra,
        ));
    }

    Ok(Dataset::new(records))
}
