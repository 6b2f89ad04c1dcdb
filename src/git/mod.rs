//! Git operations module
//!
//! Provides:
//! - `git` command invocation
//! - Commit log enumeration with scope classification
//! - Numstat line-change accounting

pub mod commits;
pub mod numstat;

pub use commits::{classify_scope, get_commits, parse_commit_line, CommitRecord, Scope};
pub use numstat::{get_numstat, parse_numstat, NumstatSummary};

use anyhow::{Context, Result};
use chrono::{Duration, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs the `git` executable inside a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Run `git <args>` and return its trimmed stdout.
    ///
    /// A non-zero exit status is an error carrying git's stderr.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(dir = %self.dir.display(), ?args, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run `git log` with `extra` arguments over the trailing window.
    pub fn log(&self, window: &Window, extra: &[&str]) -> Result<String> {
        let since = window.since_arg()?;
        let mut args = vec!["log"];
        if let Some(ref since) = since {
            args.push(since);
        }
        args.extend_from_slice(extra);
        args.push("--no-merges");
        self.run(&args)
    }
}

/// Trailing observation window, in days. Zero covers all history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub days: u32,
}

impl Window {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn is_all_history(&self) -> bool {
        self.days == 0
    }

    /// `--since=<ISO-8601>` for `git log`, or `None` for all history.
    ///
    /// A window reaching before the earliest representable date is an error.
    pub fn since_arg(&self) -> Result<Option<String>> {
        if self.is_all_history() {
            return Ok(None);
        }
        let since = Utc::now()
            .checked_sub_signed(Duration::days(i64::from(self.days)))
            .with_context(|| format!("window too large: {} days", self.days))?;
        Ok(Some(format!(
            "--since={}",
            since.to_rfc3339_opts(SecondsFormat::Secs, false)
        )))
    }
}
