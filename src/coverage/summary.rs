//! Coverage summary conversion (Cobertura rates to JSON)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::CoverageRates;

/// Two-field summary written by the converter. Values are fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub line_rate: f64,
    pub branch_rate: f64,
}

impl From<CoverageRates> for CoverageSummary {
    fn from(rates: CoverageRates) -> Self {
        Self {
            line_rate: rates.line_rate,
            branch_rate: rates.branch_rate,
        }
    }
}

impl CoverageSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize coverage summary")
    }

    /// Write the summary to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write coverage summary: {}", path.display()))
    }
}
