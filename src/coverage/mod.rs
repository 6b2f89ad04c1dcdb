//! Coverage module
//!
//! Provides:
//! - Cobertura XML root-rate extraction
//! - Threshold gate
//! - JSON summary conversion

mod cobertura;
mod summary;
mod threshold;

pub use cobertura::*;
pub use summary::*;
pub use threshold::*;

/// Aggregate rates read from the root element of a Cobertura report.
///
/// Both values are fractions in `[0, 1]`, exactly as the report states them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoverageRates {
    pub line_rate: f64,
    pub branch_rate: f64,
}

impl CoverageRates {
    pub fn line_percentage(&self) -> f64 {
        self.line_rate * 100.0
    }
}
