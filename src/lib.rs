//! `county-demographics` runs small operation files over an in-memory dataset of county
//! demographic records.
//!
//! An operations file holds one `:`-separated instruction per line. Filters narrow a working
//! subset (the filtered view) of the dataset and aggregates summarize it:
//!
//! ```text
//! filter-state:CA
//! filter-gt:Income.Persons Below Poverty Level:12
//! population-total
//! percent:Education.Bachelor's Degree or Higher
//! ```
//!
//! ## Operations
//!
//! | keyword | arguments | effect |
//! |---|---|---|
//! | `display` | | print county, state and population of every record in the view |
//! | `filter-state` | state | view = full dataset records with that state |
//! | `filter-gt` | field, number | keep view records with `field > number` |
//! | `filter-lt` | field, number | keep view records with `field < number` |
//! | `population-total` | | sum of `2014 Population` over the view |
//! | `population` | field | `sum(population * field / 100)` over the view |
//! | `percent` | field | population-weighted percentage of `field` over the view |
//!
//! `filter-state` always starts over from the full dataset; the numeric filters narrow whatever
//! the view currently holds.
//!
//! ## Example
//!
//! ```rust
//! use county_demographics::ingestion::sample_dataset;
//! use county_demographics::interpreter::Interpreter;
//! use county_demographics::store::RecordStore;
//!
//! let ops = "filter-state:CA\npercent:Education.Bachelor's Degree or Higher\n";
//! let mut out = Vec::new();
//! Interpreter::new(RecordStore::new(sample_dataset()))
//!     .run(ops.as_bytes(), &mut out)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("percentage: 53.33\n"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: built-in sample dataset plus JSON / CSV loading
//! - [`types`]: record and dataset types
//! - [`processing`]: pure filter and aggregate functions
//! - [`store`]: the dataset plus its current filtered view
//! - [`interpreter`]: operation parsing and the per-line run loop
//! - [`report`]: rendered operation results
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod interpreter;
pub mod processing;
pub mod report;
pub mod store;
pub mod types;

pub use error::{IngestionError, IngestionResult, LineError, RunError, StoreError, StoreResult};
