//! In-memory record transformations.
//!
//! The processing layer is pure: it reads a [`crate::types::Dataset`] and a set of positions
//! into it, and returns new positions or aggregate values. State lives in
//! [`crate::store::RecordStore`].
//!
//! - [`filter()`]: keep positions by fallible predicate
//! - [`filter_by_state`], [`filter_by_threshold`]: the two filter shapes the operations use
//! - [`aggregate`]: population totals and population-weighted percentages
//!
//! ## Example
//!
//! ```rust
//! use county_demographics::processing::aggregate::population_total;
//! use county_demographics::processing::filter_by_state;
//! use county_demographics::types::{Dataset, Record};
//!
//! let ds = Dataset::new(vec![
//!     Record::new("Alameda", "CA", "1500000", Vec::new()).with_field("edu", "40"),
//!     Record::new("Harris", "TX", "4500000", Vec::new()).with_field("edu", "50"),
//! ]);
//!
//! let ca = filter_by_state(&ds, "CA");
//! let records = ca.iter().filter_map(|&i| ds.get(i));
//! assert_eq!(population_total(records).unwrap(), 1_500_000);
//! ```

pub mod aggregate;
pub mod filter;

pub use filter::{filter, filter_by_state, filter_by_threshold, Comparison};
