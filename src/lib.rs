//! ci-metrics - CI pipeline helpers
//!
//! A library shared by three standalone tools:
//! - `coverage-gate`: fail the build when Cobertura line coverage is too low
//! - `coverage-to-json`: extract Cobertura line/branch rates into JSON
//! - `git-metrics`: commit cadence, authors, scopes, churn, and hot files
//!   over a git history window, compared against regional benchmarks

pub mod coverage;
pub mod git;
pub mod logging;
pub mod metrics;

pub use coverage::{parse_cobertura, validate_threshold, CoverageRates, CoverageSummary};
pub use git::{Git, Window};
pub use metrics::{Benchmarks, MetricsReport, TimeBenchmarkLookup};
