//! Line-oriented command interpreter driving a [`RecordStore`].
//!
//! Each non-blank line is parsed into an [`Operation`], executed against the store, and its
//! outcome written to the output sink: the [`Report`] text on success, or `Error: <cause>` on a
//! per-line failure. Per-line failures never stop the run. Only failing to open or read the
//! operations file is fatal.
//!
//! ```rust
//! use county_demographics::ingestion::sample_dataset;
//! use county_demographics::interpreter::Interpreter;
//! use county_demographics::store::RecordStore;
//!
//! let ops = "filter-state:CA\npopulation-total\n";
//! let mut out = Vec::new();
//! let mut interp = Interpreter::new(RecordStore::new(sample_dataset()));
//! let summary = interp.run(ops.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(summary.errors, 0);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Filter: state == CA (2 entries)\n2014 population: 4500000\n"
//! );
//! ```

pub mod operation;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{LineError, RunError};
use crate::report::Report;
use crate::store::RecordStore;

pub use operation::{parse_line, Operation, OperationKind};

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, blank lines included.
    pub lines: usize,
    /// Operations that produced a report.
    pub executed: usize,
    /// Lines that reported an error.
    pub errors: usize,
}

/// Owns the record store for the duration of a run.
#[derive(Debug, Clone)]
pub struct Interpreter {
    store: RecordStore,
}

impl Interpreter {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Execute an already parsed operation. `line` is used for error classification only.
    pub fn execute(&mut self, op: &Operation, line: usize) -> Result<Report, LineError> {
        debug!("line {line}: {}", op.kind().keyword());
        let store = &mut self.store;
        let result = match op {
            Operation::Display => Ok(store.display()),
            Operation::FilterState { state } => Ok(store.filter_state(state)),
            Operation::FilterGt { field, threshold } => store.filter_gt(field, *threshold),
            Operation::FilterLt { field, threshold } => store.filter_lt(field, *threshold),
            Operation::PopulationTotal => store.population_total(),
            Operation::Population { field } => store.population_field(field),
            Operation::Percent { field } => store.percent_field(field),
        };
        result.map_err(|e| LineError::from_store(line, e))
    }

    /// Parse and execute one raw line. Returns `None` for blank lines.
    pub fn execute_line(&mut self, raw: &str, line: usize) -> Option<Result<Report, LineError>> {
        match parse_line(raw, line) {
            Ok(None) => None,
            Ok(Some(op)) => Some(self.execute(&op, line)),
            Err(e) => Some(Err(e)),
        }
    }

    /// Run every line of `input`, writing one result or error line per operation to `out`.
    ///
    /// A line that is not valid UTF-8 is reported as an invalid value; only a failing read or
    /// write aborts the run.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = summary.lines + 1;
            summary.lines = line;
            let outcome = match std::str::from_utf8(&buf) {
                Ok(raw) => self.execute_line(raw, line),
                Err(e) => Some(Err(LineError::InvalidValue {
                    line,
                    detail: format!("line is not valid UTF-8: {e}"),
                })),
            };
            match outcome {
                None => {}
                Some(Ok(report)) => {
                    summary.executed += 1;
                    writeln!(out, "{report}")?;
                }
                Some(Err(err)) => {
                    summary.errors += 1;
                    warn!("{err}");
                    writeln!(out, "Error: {err}")?;
                }
            }
        }
        info!(
            "processed {} lines: {} executed, {} errors",
            summary.lines, summary.executed, summary.errors
        );
        Ok(summary)
    }

    /// Open the operations file at `path` and [`run`](Self::run) it.
    ///
    /// A missing file is reported as [`RunError::OperationsFileNotFound`].
    pub fn run_file<W: Write>(&mut self, path: impl AsRef<Path>, out: &mut W) -> Result<RunSummary, RunError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RunError::OperationsFileNotFound,
            _ => RunError::Io(e),
        })?;
        info!("running operations from {}", path.display());
        self.run(BufReader::new(file), out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Interpreter, RunSummary};
    use crate::error::{LineError, RunError};
    use crate::ingestion::sample_dataset;
    use crate::report::Report;
    use crate::store::RecordStore;

    fn interpreter() -> Interpreter {
        Interpreter::new(RecordStore::new(sample_dataset()))
    }

    fn run(ops: &str) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = interpreter().run(ops.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn execute_line_skips_blank_lines() {
        let mut interp = interpreter();
        assert!(interp.execute_line("   ", 1).is_none());
        assert_eq!(
            interp.execute_line("population-total", 2),
            Some(Ok(Report::PopulationTotal(11_800_000)))
        );
    }

    #[test]
    fn store_errors_become_line_errors() {
        let mut interp = interpreter();
        let err = interp.execute_line("population:Nope", 9).unwrap().unwrap_err();
        assert!(matches!(err, LineError::InvalidValue { line: 9, .. }));
        assert!(err.to_string().contains("unknown field 'Nope'"));

        interp.execute_line("filter-state:NY", 10);
        let err = interp.execute_line("percent:Income.Persons Below Poverty Level", 11);
        assert!(matches!(
            err,
            Some(Err(LineError::DivisionByZero { line: 11, .. }))
        ));
    }

    #[test]
    fn run_continues_after_errors() {
        let (summary, out) = run("foo:bar\n\nfilter-gt:Income.Persons Below Poverty Level\nfilter-state:FL\ndisplay\n");
        assert_eq!(
            out,
            "Error: Unknown operation at line 1\n\
             Error: Malformed operation at line 3\n\
             Filter: state == FL (1 entries)\n\
             County: Miami-Dade, State: FL, Population: 2800000\n"
        );
        assert_eq!(
            summary,
            RunSummary {
                lines: 5,
                executed: 2,
                errors: 2
            }
        );
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_run_continues() {
        let mut out = Vec::new();
        let summary = interpreter()
            .run(
                &b"population-total\nfilter-state:\xff\xfe\r\npopulation-total"[..],
                &mut out,
            )
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "2014 population: 11800000");
        assert!(lines[1].starts_with("Error: Invalid value in operation at line 2: line is not valid UTF-8"));
        assert_eq!(lines[2], "2014 population: 11800000");
        assert_eq!(
            summary,
            RunSummary {
                lines: 3,
                executed: 2,
                errors: 1
            }
        );
    }

    #[test]
    fn crlf_and_missing_final_newline_are_accepted() {
        let (summary, out) = run("filter-state:TX\r\npopulation-total");
        assert_eq!(out, "Filter: state == TX (1 entries)\n2014 population: 4500000\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn missing_file_is_fatal() {
        let mut out = Vec::new();
        let err = interpreter()
            .run_file("tests/fixtures/definitely_missing.ops", &mut out)
            .unwrap_err();
        assert!(matches!(err, RunError::OperationsFileNotFound));
        assert_eq!(err.to_string(), "The operations file could not be found.");
        assert!(out.is_empty());
    }
}
