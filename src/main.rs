use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use county_demographics::ingestion::{load_dataset, sample_dataset, IngestionFormat, IngestionOptions};
use county_demographics::interpreter::Interpreter;
use county_demographics::store::RecordStore;

#[derive(Parser, Debug)]
#[command(name = "county-ops", version, about = "Run filter/aggregate operations over county demographics")]
struct Cli {
    /// Operations file, one `keyword:arg:arg` instruction per line.
    operations: PathBuf,

    /// Dataset file (.json, .ndjson or .csv). Uses the built-in sample when omitted.
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Force the dataset format instead of inferring it from the extension.
    #[arg(long, value_enum, requires = "data")]
    format: Option<IngestionFormat>,

    #[arg(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(LevelFilter::Warn))
        .target(env_logger::Target::Stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("run failed: {e}");
            let _ = writeln!(out, "Error: {e}").and_then(|_| out.flush());
            ExitCode::FAILURE
        }
    }
}

/// Load the dataset, run the operations file and flush `out`.
///
/// Per-line errors are part of the output; only fatal conditions (dataset load, opening or
/// reading the operations file, writing or flushing `out`) come back as `Err`.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), String> {
    let dataset = match &cli.data {
        Some(path) => {
            let opts = IngestionOptions { format: cli.format };
            load_dataset(path, &opts).map_err(|e| e.to_string())?
        }
        None => sample_dataset(),
    };

    let mut interpreter = Interpreter::new(RecordStore::new(dataset));
    interpreter
        .run_file(&cli.operations, out)
        .map_err(|e| e.to_string())?;
    out.flush().map_err(|e| format!("io error: {e}"))
}
