//! Git commit enumeration and scope classification

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use super::{Git, Window};

/// `git log` pretty format: hash, committer epoch, author name, subject.
pub const LOG_FORMAT: &str = "--pretty=format:%H|%ct|%an|%s";

/// Which side of the monorepo a commit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Frontend,
    Backend,
    Mixed,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Frontend => "frontend",
            Scope::Backend => "backend",
            Scope::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commit from the observation window
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub hash: String,
    pub timestamp: i64,
    pub author: String,
    pub subject: String,
    pub scope: Scope,
}

/// Header fields of one `git log` line, before scope is known.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine<'a> {
    pub hash: &'a str,
    pub timestamp: i64,
    pub author: &'a str,
    pub subject: &'a str,
}

/// Parse a `hash|epoch|author|subject` line.
///
/// The subject may itself contain `|`. Returns `None` when there are fewer
/// than four fields or the timestamp is not an integer.
pub fn parse_commit_line(line: &str) -> Option<LogLine<'_>> {
    let mut parts = line.splitn(4, '|');
    let hash = parts.next()?;
    let timestamp = parts.next()?;
    let author = parts.next()?;
    let subject = parts.next()?;

    Some(LogLine {
        hash,
        timestamp: timestamp.trim().parse().ok()?,
        author,
        subject,
    })
}

/// Classify a commit by the paths it changed. `frontend/` is checked first,
/// so a commit touching both sides counts as frontend.
pub fn classify_scope<'a, I>(paths: I) -> Scope
where
    I: IntoIterator<Item = &'a str>,
{
    let paths: Vec<&str> = paths.into_iter().collect();

    if paths.iter().any(|p| p.starts_with("frontend/")) {
        Scope::Frontend
    } else if paths.iter().any(|p| p.starts_with("backend/")) {
        Scope::Backend
    } else {
        Scope::Mixed
    }
}

/// List non-merge commits in the window, newest first, with their scope.
///
/// Malformed log lines and commits whose file list cannot be read are
/// skipped; a failing `git log` is an error.
pub fn get_commits(git: &Git, window: &Window) -> Result<Vec<CommitRecord>> {
    let out = git.log(window, &[LOG_FORMAT])?;

    let mut commits = Vec::new();
    for line in out.lines() {
        let Some(entry) = parse_commit_line(line) else {
            tracing::debug!(line, "skipping malformed log line");
            continue;
        };

        let files = match changed_files(git, entry.hash) {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!(hash = entry.hash, error = %e, "skipping commit");
                continue;
            }
        };

        commits.push(CommitRecord {
            hash: entry.hash.to_string(),
            timestamp: entry.timestamp,
            author: entry.author.to_string(),
            subject: entry.subject.to_string(),
            scope: classify_scope(files.lines()),
        });
    }

    tracing::debug!(count = commits.len(), "collected commits");
    Ok(commits)
}

fn changed_files(git: &Git, hash: &str) -> Result<String> {
    git.run(&["diff-tree", "--no-commit-id", "--name-only", "-r", hash])
}
