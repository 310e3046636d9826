//! Record filtering over a [`crate::types::Dataset`].
//!
//! Filters work on positions into the dataset, so a filtered result always refers back to the
//! original records and keeps their relative order.

use crate::error::StoreResult;
use crate::types::{Dataset, Record};

/// Strict numeric comparison used by the threshold filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `value > threshold`
    GreaterThan,
    /// `value < threshold`
    LessThan,
}

impl Comparison {
    /// Short keyword used in reports (`gt` / `lt`).
    pub fn keyword(self) -> &'static str {
        match self {
            Comparison::GreaterThan => "gt",
            Comparison::LessThan => "lt",
        }
    }

    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterThan => value > threshold,
            Comparison::LessThan => value < threshold,
        }
    }
}

/// Keep the positions in `view` whose record satisfies `predicate`.
///
/// The first predicate error aborts the whole filter; no partial result is returned.
pub fn filter<F>(dataset: &Dataset, view: &[usize], mut predicate: F) -> StoreResult<Vec<usize>>
where
    F: FnMut(&Record) -> StoreResult<bool>,
{
    let mut out = Vec::with_capacity(view.len());
    for &idx in view {
        let Some(record) = dataset.get(idx) else {
            continue;
        };
        if predicate(record)? {
            out.push(idx);
        }
    }
    Ok(out)
}

/// Positions of every record in the full dataset whose state equals `state` (case-sensitive).
pub fn filter_by_state(dataset: &Dataset, state: &str) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.state() == state)
        .map(|(idx, _)| idx)
        .collect()
}

/// Keep the positions in `view` whose numeric `field` compares to `threshold` per `cmp`.
pub fn filter_by_threshold(
    dataset: &Dataset,
    view: &[usize],
    field: &str,
    cmp: Comparison,
    threshold: f64,
) -> StoreResult<Vec<usize>> {
    filter(dataset, view, |r| Ok(cmp.holds(r.numeric(field)?, threshold)))
}
