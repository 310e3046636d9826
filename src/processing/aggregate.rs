//! Population aggregates over a set of records.

use crate::error::{StoreError, StoreResult};
use crate::types::{Record, POPULATION};

/// Integer sum of the population field. Empty input sums to 0.
pub fn population_total<'r, I>(records: I) -> StoreResult<i64>
where
    I: IntoIterator<Item = &'r Record>,
{
    records.into_iter().try_fold(0i64, |acc, r| {
        let n = r.population_count()?;
        acc.checked_add(n).ok_or_else(|| StoreError::InvalidNumber {
            field: POPULATION.to_owned(),
            raw: r.population().to_owned(),
            message: "population total overflows a 64-bit integer".to_string(),
        })
    })
}

/// `sum(population * field / 100)`: the head count a percentage field represents.
pub fn field_population<'r, I>(records: I, field: &str) -> StoreResult<f64>
where
    I: IntoIterator<Item = &'r Record>,
{
    records.into_iter().try_fold(0.0, |acc, r| {
        Ok(acc + r.numeric(POPULATION)? * r.numeric(field)? / 100.0)
    })
}

/// `100 * field_population / population_total`.
///
/// Fails with [`StoreError::DivisionByZero`] when the total population is zero (including empty
/// input).
pub fn field_percent<'r, I>(records: I, field: &str) -> StoreResult<f64>
where
    I: IntoIterator<Item = &'r Record> + Clone,
{
    let total: f64 = records
        .clone()
        .into_iter()
        .try_fold(0.0, |acc, r| Ok::<_, StoreError>(acc + r.numeric(POPULATION)?))?;
    let part = field_population(records, field)?;
    if total == 0.0 {
        return Err(StoreError::DivisionByZero {
            field: field.to_owned(),
        });
    }
    Ok(part / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::{field_percent, field_population, population_total};
    use crate::error::StoreError;
    use crate::types::Record;

    fn records() -> Vec<Record> {
        vec![
            Record::new("A", "CA", "1500000", Vec::new()).with_field("edu", "40"),
            Record::new("B", "CA", "3000000", Vec::new()).with_field("edu", "60"),
        ]
    }

    #[test]
    fn population_total_sums_integers() {
        let rs = records();
        assert_eq!(population_total(&rs), Ok(4_500_000));
    }

    #[test]
    fn field_population_weights_by_population() {
        let rs = records();
        assert_eq!(field_population(&rs, "edu"), Ok(2_400_000.0));
    }

    #[test]
    fn field_percent_is_population_weighted() {
        let rs = records();
        let pct = field_percent(&rs, "edu").unwrap();
        assert!((pct - 53.333_333).abs() < 1e-4);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        let rs: Vec<Record> = Vec::new();
        assert_eq!(population_total(&rs), Ok(0));
        assert_eq!(field_population(&rs, "edu"), Ok(0.0));
    }

    #[test]
    fn field_percent_over_zero_population_is_an_error() {
        let rs = vec![Record::new("Empty", "CA", "0", Vec::new()).with_field("edu", "50")];
        assert_eq!(
            field_percent(&rs, "edu"),
            Err(StoreError::DivisionByZero {
                field: "edu".to_string()
            })
        );
        let none: Vec<Record> = Vec::new();
        assert!(matches!(
            field_percent(&none, "edu"),
            Err(StoreError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn unknown_field_fails_the_aggregate() {
        let rs = records();
        assert_eq!(
            field_percent(&rs, "nope"),
            Err(StoreError::UnknownField {
                field: "nope".to_string()
            })
        );
    }
}
