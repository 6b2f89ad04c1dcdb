//! Added/deleted line accounting from `git log --numstat`

use anyhow::Result;

use super::{Git, Window};
use crate::metrics::Tally;

/// Marker line written before each commit's numstat block.
const COMMIT_MARKER: &str = "COMMIT:";

/// Line totals and per-file touch counts over a window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumstatSummary {
    pub added: u64,
    pub deleted: u64,
    pub file_hits: Tally<String>,
}

/// Run the numstat log over the window and summarize it.
pub fn get_numstat(git: &Git, window: &Window) -> Result<NumstatSummary> {
    let out = git.log(
        window,
        &["--numstat", &format!("--pretty=format:{}%H", COMMIT_MARKER)],
    )?;
    Ok(parse_numstat(&out))
}

/// Summarize `added<TAB>deleted<TAB>path` lines.
///
/// Lines without exactly three tab-separated fields are ignored. A field
/// that is not all digits (binary files report `-`) adds nothing to its
/// total, but the file is still counted as touched.
pub fn parse_numstat(output: &str) -> NumstatSummary {
    let mut summary = NumstatSummary::default();

    for line in output.lines() {
        if line.is_empty() || line.starts_with(COMMIT_MARKER) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [added, deleted, path] = fields.as_slice() else {
            continue;
        };

        if let Some(n) = parse_count(added) {
            summary.added += n;
        }
        if let Some(n) = parse_count(deleted) {
            summary.deleted += n;
        }
        summary.file_hits.add(path.to_string());
    }

    summary
}

fn parse_count(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
