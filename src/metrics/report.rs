//! Metrics report assembly and output

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::{average_gap_hours, commits_per_week, round2, Benchmarks, Comparisons, Tally};
use crate::git::{self, CommitRecord, Git, NumstatSummary, Scope, Window};

/// Authors listed in `authors_top`.
pub const TOP_AUTHORS: usize = 10;
/// Files listed in `hot_files`.
pub const HOT_FILES: usize = 20;

/// The JSON report written by `git-metrics`. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub window_days: u32,
    pub commits_total: usize,
    pub commits_per_week: f64,
    pub avg_gap_hours: Option<f64>,
    pub authors_top: Vec<(String, u64)>,
    pub scope_counts: Tally<Scope>,
    pub added_lines: u64,
    pub deleted_lines: u64,
    pub hot_files: Vec<(String, u64)>,
    pub comparisons: Comparisons,
}

impl MetricsReport {
    /// Run both git passes over the window and build the report.
    pub fn collect(git: &Git, window: Window, benchmarks: &Benchmarks) -> Result<Self> {
        let commits = git::get_commits(git, &window).context("Failed to list commits")?;
        let numstat = git::get_numstat(git, &window).context("Failed to collect line stats")?;
        Ok(Self::build(window, &commits, &numstat, benchmarks))
    }

    /// Aggregate already-collected commits and numstat totals.
    pub fn build(
        window: Window,
        commits: &[CommitRecord],
        numstat: &NumstatSummary,
        benchmarks: &Benchmarks,
    ) -> Self {
        let timestamps: Vec<i64> = commits.iter().map(|c| c.timestamp).collect();
        let avg_gap = average_gap_hours(&timestamps);
        let per_week = commits_per_week(commits.len(), window.days);

        let authors: Tally<String> = commits.iter().map(|c| c.author.clone()).collect();
        let scope_counts: Tally<Scope> = commits.iter().map(|c| c.scope).collect();

        Self {
            window_days: window.days,
            commits_total: commits.len(),
            commits_per_week: round2(per_week),
            avg_gap_hours: avg_gap.map(round2),
            authors_top: authors.most_common(TOP_AUTHORS),
            scope_counts,
            added_lines: numstat.added,
            deleted_lines: numstat.deleted,
            hot_files: numstat.file_hits.most_common(HOT_FILES),
            comparisons: benchmarks.compare(per_week, avg_gap),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize metrics report")
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write metrics report: {}", path.display()))
    }
}
