//! Dataset ingestion entrypoints and implementations.
//!
//! Most callers should use [`load_dataset`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - loads the file into an in-memory [`crate::types::Dataset`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]
//!
//! [`sample_dataset`] returns the built-in four-county dataset used when no file is given.

pub mod csv;
pub mod json;
pub mod sample;
pub mod unified;

pub use sample::sample_dataset;
pub use unified::{load_dataset, IngestionFormat, IngestionOptions};
