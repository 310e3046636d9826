use thiserror::Error;

/// Convenience result type for dataset ingestion.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type returned while loading a dataset.
///
/// Shared across JSON and CSV ingestion. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the shape of a county dataset (missing columns, bad JSON, ...).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

/// Error raised by a [`crate::store::RecordStore`] operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The field name is not present on a record.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// The field exists but its text does not parse as a number.
    #[error("could not convert field '{field}' value '{raw}' to a number: {message}")]
    InvalidNumber {
        field: String,
        raw: String,
        message: String,
    },

    /// A percentage was requested over a view whose total population is zero.
    #[error("total 2014 population is 0, cannot compute percentage of '{field}'")]
    DivisionByZero { field: String },
}

/// A per-line failure reported by the interpreter. Never aborts the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("Unknown operation at line {line}")]
    UnknownOperation { line: usize },

    /// A recognized operation was given fewer arguments than it needs.
    #[error("Malformed operation at line {line}")]
    MalformedOperation { line: usize },

    #[error("Invalid value in operation at line {line}: {detail}")]
    InvalidValue { line: usize, detail: String },

    #[error("Division by zero at line {line}: {detail}")]
    DivisionByZero { line: usize, detail: String },
}

impl LineError {
    /// Classify a store failure at the given 1-based line number.
    pub fn from_store(line: usize, err: StoreError) -> Self {
        match err {
            StoreError::DivisionByZero { .. } => LineError::DivisionByZero {
                line,
                detail: err.to_string(),
            },
            StoreError::UnknownField { .. } | StoreError::InvalidNumber { .. } => {
                LineError::InvalidValue {
                    line,
                    detail: err.to_string(),
                }
            }
        }
    }

    /// 1-based line number the error was reported at.
    pub fn line(&self) -> usize {
        match self {
            LineError::UnknownOperation { line }
            | LineError::MalformedOperation { line }
            | LineError::InvalidValue { line, .. }
            | LineError::DivisionByZero { line, .. } => *line,
        }
    }
}

/// Fatal error for a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("The operations file could not be found.")]
    OperationsFileNotFound,

    /// Reading the operations file (or writing a report) failed part-way.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
