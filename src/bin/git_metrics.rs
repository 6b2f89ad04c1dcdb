//! Collect commit cadence and churn metrics from git history.
//!
//! Usage: `git-metrics [--window-days N] [--out path]`
//! Regional benchmarks are read from `SP_COMMITS_WK`, `EU_COMMITS_WK`,
//! `US_COMMITS_WK`, `EU_TIME_BETWEEN_H` and `US_TIME_BETWEEN_H`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ci_metrics::git::{Git, Window};
use ci_metrics::logging;
use ci_metrics::metrics::{Benchmarks, MetricsReport, TimeBenchmarkLookup};

const DEFAULT_OUT: &str = "metrics.json";

#[derive(Parser)]
#[command(name = "git-metrics")]
#[command(about = "Commit cadence, authors, scopes, churn and hot files over a git history window")]
#[command(version)]
struct Cli {
    /// Days of history to scan (0 scans all history)
    #[arg(long, default_value = "90")]
    window_days: u32,

    /// Output JSON file
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,

    /// Repository to scan (default: current directory)
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Read SP's time-between benchmark from SP_TIME_BETWEEN_H instead of EU_TIME_BETWEEN_H
    #[arg(long)]
    per_region_time_benchmarks: bool,
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        logging::exit_with_error(e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let lookup = if cli.per_region_time_benchmarks {
        TimeBenchmarkLookup::PerRegion
    } else {
        TimeBenchmarkLookup::Shared
    };
    let benchmarks = Benchmarks::from_env(lookup)?;

    let git = Git::new(&cli.repo);
    let window = Window::new(cli.window_days);
    tracing::info!(repo = %cli.repo.display(), days = window.days, "collecting git metrics");

    let report = MetricsReport::collect(&git, window, &benchmarks)?;
    report.write(&cli.out)?;

    println!("Wrote {}", cli.out.display());
    Ok(())
}
