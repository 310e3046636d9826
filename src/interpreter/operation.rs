//! Parsing of single operation lines.

use crate::error::LineError;

/// The fixed set of recognized operation keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Display,
    FilterState,
    FilterGt,
    FilterLt,
    PopulationTotal,
    Population,
    Percent,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Display,
        OperationKind::FilterState,
        OperationKind::FilterGt,
        OperationKind::FilterLt,
        OperationKind::PopulationTotal,
        OperationKind::Population,
        OperationKind::Percent,
    ];

    /// Keyword as written in an operations file.
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Display => "display",
            OperationKind::FilterState => "filter-state",
            OperationKind::FilterGt => "filter-gt",
            OperationKind::FilterLt => "filter-lt",
            OperationKind::PopulationTotal => "population-total",
            OperationKind::Population => "population",
            OperationKind::Percent => "percent",
        }
    }

    /// Exact, case-sensitive keyword match.
    pub fn from_keyword(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == token)
    }

    /// Number of arguments the operation needs. Extra arguments are ignored.
    pub fn arity(self) -> usize {
        match self {
            OperationKind::Display | OperationKind::PopulationTotal => 0,
            OperationKind::FilterState | OperationKind::Population | OperationKind::Percent => 1,
            OperationKind::FilterGt | OperationKind::FilterLt => 2,
        }
    }
}

/// A parsed instruction with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Display,
    FilterState { state: String },
    FilterGt { field: String, threshold: f64 },
    FilterLt { field: String, threshold: f64 },
    PopulationTotal,
    Population { field: String },
    Percent { field: String },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Display => OperationKind::Display,
            Operation::FilterState { .. } => OperationKind::FilterState,
            Operation::FilterGt { .. } => OperationKind::FilterGt,
            Operation::FilterLt { .. } => OperationKind::FilterLt,
            Operation::PopulationTotal => OperationKind::PopulationTotal,
            Operation::Population { .. } => OperationKind::Population,
            Operation::Percent { .. } => OperationKind::Percent,
        }
    }
}

/// Parse one raw line from an operations file.
///
/// Returns `Ok(None)` for blank lines. `line` is the 1-based line number used in errors.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Operation>, LineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.split(':');
    let token = parts.next().unwrap_or_default();
    let kind =
        OperationKind::from_keyword(token).ok_or(LineError::UnknownOperation { line })?;

    let args: Vec<&str> = parts.take(kind.arity()).collect();
    if args.len() < kind.arity() {
        return Err(LineError::MalformedOperation { line });
    }

    let op = match kind {
        OperationKind::Display => Operation::Display,
        OperationKind::PopulationTotal => Operation::PopulationTotal,
        OperationKind::FilterState => Operation::FilterState {
            state: args[0].to_owned(),
        },
        OperationKind::Population => Operation::Population {
            field: args[0].to_owned(),
        },
        OperationKind::Percent => Operation::Percent {
            field: args[0].to_owned(),
        },
        OperationKind::FilterGt => Operation::FilterGt {
            field: args[0].to_owned(),
            threshold: parse_threshold(args[1], line)?,
        },
        OperationKind::FilterLt => Operation::FilterLt {
            field: args[0].to_owned(),
            threshold: parse_threshold(args[1], line)?,
        },
    };
    Ok(Some(op))
}

fn parse_threshold(raw: &str, line: usize) -> Result<f64, LineError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| LineError::InvalidValue {
            line,
            detail: format!("could not convert '{raw}' to a number: {e}"),
        })
}
