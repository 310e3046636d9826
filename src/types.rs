//! Core data model types.
//!
//! A [`Dataset`] is an ordered list of immutable county [`Record`]s. Every value is kept as the
//! text it was loaded from; numeric interpretation happens when an operation needs it, so a bad
//! value only fails the operation that touches it.

use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};

/// Field name of the county name.
pub const COUNTY: &str = "County";
/// Field name of the two-letter state abbreviation.
pub const STATE: &str = "State";
/// Field name of the total population count.
pub const POPULATION: &str = "2014 Population";

/// One county's demographic data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    county: String,
    state: String,
    population: String,
    /// Every other field (mostly percentages in `[0, 100]`), keyed by dotted field name.
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Create a record from its known fields and any extra named fields.
    pub fn new(
        county: impl Into<String>,
        state: impl Into<String>,
        population: impl Into<String>,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            county: county.into(),
            state: state.into(),
            population: population.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// Builder-style helper for adding one extra field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Raw population text.
    pub fn population(&self) -> &str {
        &self.population
    }

    /// Strict lookup of a field by name, including the known fields.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            COUNTY => Some(&self.county),
            STATE => Some(&self.state),
            POPULATION => Some(&self.population),
            _ => self.fields.get(name).map(String::as_str),
        }
    }

    /// Iterate the extra (non-known) field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Numeric value of `name` as a float.
    pub fn numeric(&self, name: &str) -> StoreResult<f64> {
        let raw = self.get(name).ok_or_else(|| StoreError::UnknownField {
            field: name.to_owned(),
        })?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| StoreError::InvalidNumber {
                field: name.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            })
    }

    /// Population as an integer count.
    pub fn population_count(&self) -> StoreResult<i64> {
        self.population
            .trim()
            .parse::<i64>()
            .map_err(|e| StoreError::InvalidNumber {
                field: POPULATION.to_owned(),
                raw: self.population.clone(),
                message: e.to_string(),
            })
    }
}

/// The complete, immutable set of records loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
