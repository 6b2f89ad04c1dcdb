//! Extract Cobertura line/branch rates into a two-field JSON summary.
//!
//! Usage: `coverage-to-json <xml-path> <out-json-path>`

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ci_metrics::coverage::{self, CoverageSummary};
use ci_metrics::logging;

#[derive(Parser)]
#[command(name = "coverage-to-json")]
#[command(about = "Convert a Cobertura XML report into {\"line_rate\", \"branch_rate\"} JSON")]
#[command(version)]
struct Cli {
    /// Cobertura XML report
    report: PathBuf,

    /// Output JSON file (overwritten if it exists)
    out: PathBuf,
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        logging::exit_with_error(e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let rates = coverage::parse_cobertura(&cli.report)?;
    CoverageSummary::from(rates).write(&cli.out)?;

    println!("Wrote {}", cli.out.display());
    Ok(())
}
