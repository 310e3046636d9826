//! Built-in demo dataset.

use crate::types::{Dataset, Record};

const EDUCATION: &str = "Education.Bachelor's Degree or Higher";
const POVERTY: &str = "Income.Persons Below Poverty Level";

/// Four demo counties with education and poverty percentages.
pub fn sample_dataset() -> Dataset {
    let rows = [
        ("Alameda", "CA", "1500000", "40", "15"),
        ("Orange", "CA", "3000000", "60", "10"),
        ("Miami-Dade", "FL", "2800000", "30", "22"),
        ("Harris", "TX", "4500000", "50", "18"),
    ];
    Dataset::new(
        rows.into_iter()
            .map(|(county, state, population, edu, poverty)| {
                Record::new(county, state, population, Vec::new())
                    .with_field(EDUCATION, edu)
                    .with_field(POVERTY, poverty)
            })
            .collect(),
    )
}
