//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"County":"Alameda", ...}, ...]`
//! - A single JSON object
//! - Newline-delimited JSON (NDJSON)
//!
//! Nested objects are flattened into dotted field names, so
//! `{"Education": {"Bachelor's Degree or Higher": 40}}` yields the field
//! `Education.Bachelor's Degree or Higher`. The population may be given either as a top-level
//! `2014 Population` or nested as `Population.2014 Population`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Dataset, Record, COUNTY, POPULATION, STATE};

const NESTED_POPULATION: &str = "Population.2014 Population";

/// Load a JSON file into an in-memory [`Dataset`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Load JSON from an in-memory string into a [`Dataset`].
pub fn ingest_json_from_str(input: &str) -> IngestionResult<Dataset> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => ingest_json_values(&items),
            serde_json::Value::Object(_) => ingest_json_values(std::slice::from_ref(&v)),
            _ => Err(IngestionError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                IngestionError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        ingest_json_values(&values)
    }
}

fn ingest_json_values(values: &[serde_json::Value]) -> IngestionResult<Dataset> {
    let mut records = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row_num = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!("row {row_num} is not a json object"),
        })?;

        let mut fields = BTreeMap::new();
        flatten_into("", obj, &mut fields);

        let mut take = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| fields.remove(*name))
                .ok_or_else(|| IngestionError::SchemaMismatch {
                    message: format!("row {row_num} missing required field '{}'", names[0]),
                })
        };
        let county = take(&[COUNTY])?;
        let state = take(&[STATE])?;
        let population = take(&[POPULATION, NESTED_POPULATION])?;

        records.push(Record::new(county, state, population, fields));
    }

    Ok(Dataset::new(records))
}

fn flatten_into(
    prefix: &str,
    obj: &serde_json::Map<String, serde_json::Value>,
    out: &mut BTreeMap<String, String>,
) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            serde_json::Value::Object(nested) => flatten_into(&path, nested, out),
            other => {
                out.insert(path, scalar_text(other));
            }
        }
    }
}

fn scalar_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.trim().to_owned(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{flatten_into, scalar_text};

    #[test]
    fn flatten_joins_nested_keys_with_dots() {
        let v: serde_json::Value = serde_json::from_str(
            r#"{"County":"Alameda","Income":{"Persons Below Poverty Level":15.5,"Median":{"Household":70000}}}"#,
        )
        .unwrap();
        let mut out = BTreeMap::new();
        flatten_into("", v.as_object().unwrap(), &mut out);
        assert_eq!(out.get("County").map(String::as_str), Some("Alameda"));
        assert_eq!(
            out.get("Income.Persons Below Poverty Level").map(String::as_str),
            Some("15.5")
        );
        assert_eq!(
            out.get("Income.Median.Household").map(String::as_str),
            Some("70000")
        );
    }

    #[test]
    fn scalars_render_as_plain_text() {
        assert_eq!(scalar_text(&serde_json::json!(" CA ")), "CA");
        assert_eq!(scalar_text(&serde_json::json!(40)), "40");
        assert_eq!(scalar_text(&serde_json::json!(null)), "");
        assert_eq!(scalar_text(&serde_json::json!(true)), "true");
    }
}
