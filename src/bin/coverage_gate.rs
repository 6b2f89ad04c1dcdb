//! Fail a CI job when Cobertura line coverage is below a minimum.
//!
//! Usage: `coverage-gate <xml-path> [min-percent]`
//! Exit status 0 means the gate passed, 1 means coverage is too low or the
//! report could not be read.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ci_metrics::coverage::{self, DEFAULT_MIN_PERCENT};
use ci_metrics::logging;

#[derive(Parser)]
#[command(name = "coverage-gate")]
#[command(about = "Check Cobertura line coverage against a minimum percentage")]
#[command(version)]
struct Cli {
    /// Cobertura XML report
    report: PathBuf,

    /// Minimum line coverage, in percent
    #[arg(default_value_t = DEFAULT_MIN_PERCENT, allow_negative_numbers = true)]
    min_percent: f64,
}

fn main() {
    logging::init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => logging::exit_with_error(e),
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let rates = coverage::parse_cobertura(&cli.report)?;
    tracing::debug!(line_rate = rates.line_rate, "read coverage report");

    let result = coverage::validate_threshold(&rates, cli.min_percent);
    result.print_summary();

    Ok(result.exit_code())
}
