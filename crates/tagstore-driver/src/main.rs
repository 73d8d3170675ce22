//! # tagstore-driver
//!
//! ## Usage
//! ```bash
//! # Run a script file
//! cargo run -p tagstore-driver -- scripts/sample.txt
//!
//! # Read from stdin, print every result, JSON summary
//! cat scripts/sample.txt | cargo run -p tagstore-driver -- --echo --json
//!
//! # More logging
//! RUST_LOG=tagstore_core=debug cargo run -p tagstore-driver -- scripts/sample.txt
//! ```

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use std::time::Instant;

use tagstore_driver::config::USAGE;
use tagstore_driver::{DriverConfig, DriverResult, OutputFormat, RunSummary, Runner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let mut config = match DriverConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match config.apply_args(env::args().skip(1)) {
        Ok(true) => {}
        Ok(false) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    }

    init_tracing(&config.log_filter);

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - Otherwise the configured filter (`TAGSTORE_LOG` / `--log`, default `info`)
/// - Logs go to stderr so stdout stays clean for results
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &DriverConfig) -> DriverResult<RunSummary> {
    let started = Instant::now();
    let mut runner = Runner::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &config.input {
        Some(path) => {
            info!(path = %path.display(), "Running script");
            let reader = BufReader::new(File::open(path)?);
            runner.run_script(reader, &mut out, config.echo)?
        }
        None => {
            info!("Running script from stdin");
            runner.run_script(io::stdin().lock(), &mut out, config.echo)?
        }
    };

    match config.output {
        OutputFormat::Text => writeln!(out, "{}", summary)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
    }

    info!(elapsed = ?started.elapsed(), "Done");
    Ok(summary)
}
