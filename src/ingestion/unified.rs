//! Unified dataset loading entrypoint.
//!
//! Most callers should use [`load_dataset`], which loads a file into an in-memory
//! [`crate::types::Dataset`].
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the file extension.

use std::path::Path;

use log::{info, warn};

use crate::error::{IngestionError, IngestionResult};
use crate::types::Dataset;

use super::{csv, json};

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IngestionFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases.
#[derive(Debug, Clone, Default)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
}

/// Load a dataset from `path`.
///
/// # Examples
///
/// ```no_run
/// use county_demographics::ingestion::{load_dataset, IngestionFormat, IngestionOptions};
///
/// # fn main() -> Result<(), county_demographics::IngestionError> {
/// // Uses `.json` to select JSON ingestion.
/// let ds = load_dataset("county_demographics.json", &IngestionOptions::default())?;
/// println!("records={}", ds.len());
///
/// // Force a format when the extension is missing or misleading.
/// let opts = IngestionOptions {
///     format: Some(IngestionFormat::Csv),
/// };
/// let ds = load_dataset("counties.txt", &opts)?;
/// println!("records={}", ds.len());
/// # Ok(())
/// # }
/// ```
pub fn load_dataset(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<Dataset> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let result = match fmt {
        IngestionFormat::Csv => csv::ingest_csv_from_path(path),
        IngestionFormat::Json => json::ingest_json_from_path(path),
    };

    match &result {
        Ok(ds) => info!(
            "loaded dataset format={fmt:?} path={} records={}",
            path.display(),
            ds.len()
        ),
        Err(e) => warn!(
            "failed to load dataset format={fmt:?} path={} err={e}",
            path.display()
        ),
    }

    result
}

fn infer_format_from_path(path: &Path) -> IngestionResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| IngestionError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{infer_format_from_path, IngestionFormat};

    #[test]
    fn extension_detection_is_case_insensitive() {
        assert_eq!(IngestionFormat::from_extension("CSV"), Some(IngestionFormat::Csv));
        assert_eq!(IngestionFormat::from_extension("ndjson"), Some(IngestionFormat::Json));
        assert_eq!(IngestionFormat::from_extension("parquet"), None);
    }

    #[test]
    fn infer_format_rejects_unknown_or_missing_extension() {
        let err = infer_format_from_path(Path::new("data")).unwrap_err();
        assert!(err.to_string().contains("path has no extension"));
        let err = infer_format_from_path(Path::new("data.xlsx")).unwrap_err();
        assert!(err.to_string().contains("extension 'xlsx'"));
    }
}
