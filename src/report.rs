//! Rendered results of executed operations.

use std::fmt;

use crate::processing::Comparison;

/// The outcome of one successful [`crate::store::RecordStore`] operation.
///
/// `Display` produces the exact console text, one line per record for [`Report::Records`].
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// `display` over an empty view.
    NoData,
    /// `display` rows: `(county, state, population)`.
    Records(Vec<(String, String, String)>),
    FilterState { state: String, count: usize },
    FilterThreshold {
        field: String,
        cmp: Comparison,
        threshold: f64,
        count: usize,
    },
    PopulationTotal(i64),
    FieldPopulation { field: String, value: f64 },
    FieldPercent { field: String, value: f64 },
}

/// Shortest round-trip text of a float in the classic `repr` style.
///
/// Integral values keep a trailing `.0`; magnitudes below `1e-4` or from `1e16` up use a signed,
/// two-digit exponent (`1e-05`, `1.5e+16`); NaN renders as `nan`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{v:e}");
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    let fixed = v.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        format!("{fixed}.0")
    }
}

/// Two-decimal rendering used for percentages.
fn format_percent(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.2}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoData => write!(f, "No data available to display."),
            Report::Records(rows) => {
                for (i, (county, state, population)) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "County: {county}, State: {state}, Population: {population}")?;
                }
                Ok(())
            }
            Report::FilterState { state, count } => {
                write!(f, "Filter: state == {state} ({count} entries)")
            }
            Report::FilterThreshold {
                field,
                cmp,
                threshold,
                count,
            } => write!(
                f,
                "Filter: {field} {} {} ({count} entries)",
                cmp.keyword(),
                format_float(*threshold)
            ),
            Report::PopulationTotal(total) => write!(f, "2014 population: {total}"),
            Report::FieldPopulation { field, value } => {
                write!(f, "2014 {field} population: {}", format_float(*value))
            }
            Report::FieldPercent { field, value } => {
                write!(f, "2014 {field} percentage: {}", format_percent(*value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_float, Report};
    use crate::processing::Comparison;

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(format_float(40.0), "40.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(2_400_000.0), "2400000.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn floats_outside_fixed_range_use_signed_exponent() {
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e100), "-2.5e+100");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn threshold_reports_use_classic_float_text() {
        let r = Report::FilterThreshold {
            field: "edu".to_string(),
            cmp: Comparison::LessThan,
            threshold: f64::NAN,
            count: 0,
        };
        assert_eq!(r.to_string(), "Filter: edu lt nan (0 entries)");
        let r = Report::FilterThreshold {
            field: "edu".to_string(),
            cmp: Comparison::GreaterThan,
            threshold: 0.00001,
            count: 4,
        };
        assert_eq!(r.to_string(), "Filter: edu gt 1e-05 (4 entries)");
        let r = Report::FieldPercent {
            field: "edu".to_string(),
            value: f64::NAN,
        };
        assert_eq!(r.to_string(), "2014 edu percentage: nan");
    }

    #[test]
    fn filter_reports_render_like_the_console() {
        let r = Report::FilterThreshold {
            field: "Income.Persons Below Poverty Level".to_string(),
            cmp: Comparison::GreaterThan,
            threshold: 15.0,
            count: 2,
        };
        assert_eq!(
            r.to_string(),
            "Filter: Income.Persons Below Poverty Level gt 15.0 (2 entries)"
        );
        let r = Report::FilterState {
            state: "CA".to_string(),
            count: 0,
        };
        assert_eq!(r.to_string(), "Filter: state == CA (0 entries)");
    }

    #[test]
    fn records_render_one_line_each() {
        let r = Report::Records(vec![
            ("Alameda".into(), "CA".into(), "1500000".into()),
            ("Orange".into(), "CA".into(), "3000000".into()),
        ]);
        assert_eq!(
            r.to_string(),
            "County: Alameda, State: CA, Population: 1500000\n\
             County: Orange, State: CA, Population: 3000000"
        );
        assert_eq!(Report::NoData.to_string(), "No data available to display.");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        let r = Report::FieldPercent {
            field: "edu".to_string(),
            value: 53.333_333_33,
        };
        assert_eq!(r.to_string(), "2014 edu percentage: 53.33");
    }
}
