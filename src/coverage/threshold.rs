//! Coverage threshold validation

use colored::Colorize;

use super::CoverageRates;

/// Minimum line coverage, in percent, when none is given.
pub const DEFAULT_MIN_PERCENT: f64 = 85.0;

/// Result of threshold validation
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdResult {
    pub passed: bool,
    pub line_coverage: f64,
    pub line_threshold: f64,
}

impl ThresholdResult {
    /// The one-line verdict the gate prints on stdout.
    pub fn message(&self) -> String {
        format!(
            "Cobertura: {:.2}% (mínimo {}%)",
            self.line_coverage,
            format_threshold(self.line_threshold)
        )
    }

    /// Process exit code for this verdict.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }

    pub fn print_summary(&self) {
        println!("{}", self.message());

        let delta = self.line_coverage - self.line_threshold;
        let status = if self.passed { "✓".green() } else { "✗".red() };
        let delta_str = if delta >= 0.0 {
            format!("+{:.2}%", delta).green()
        } else {
            format!("{:.2}%", delta).red()
        };
        eprintln!("  {} Line coverage vs threshold: {}", status, delta_str);
    }
}

/// Validate line coverage against a minimum percentage.
///
/// Passes when the percentage is at least the threshold; equality passes.
pub fn validate_threshold(rates: &CoverageRates, line_threshold: f64) -> ThresholdResult {
    let line_coverage = rates.line_percentage();

    ThresholdResult {
        passed: line_coverage >= line_threshold,
        line_coverage,
        line_threshold,
    }
}

/// Render a threshold in shortest round-trip form with a fractional part
/// (`85.0`, `72.5`). Magnitudes that switch to exponent notation print as
/// `1e16`, without the `+` some other float printers emit.
pub fn format_threshold(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(line_rate: f64) -> CoverageRates {
        CoverageRates {
            line_rate,
            branch_rate: 0.0,
        }
    }

    #[test]
    fn test_threshold_validation() {
        // Passing case
        let result = validate_threshold(&rates(0.9), 85.0);
        assert!(result.passed);
        assert_eq!(result.exit_code(), 0);

        // Failing case
        let result = validate_threshold(&rates(0.84), 85.0);
        assert!(!result.passed);
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_equal_coverage_passes() {
        let result = validate_threshold(&rates(0.5), 50.0);
        assert!(result.passed);
    }

    #[test]
    fn test_missing_rate_fails_default_threshold() {
        let result = validate_threshold(&CoverageRates::default(), DEFAULT_MIN_PERCENT);
        assert!(!result.passed);
        assert_eq!(result.message(), "Cobertura: 0.00% (mínimo 85.0%)");
    }

    #[test]
    fn test_message_format() {
        let result = validate_threshold(&rates(0.9), 85.0);
        assert_eq!(result.message(), "Cobertura: 90.00% (mínimo 85.0%)");

        let result = validate_threshold(&rates(0.7234), 72.5);
        assert_eq!(result.message(), "Cobertura: 72.34% (mínimo 72.5%)");
    }

    #[test]
    fn test_format_threshold() {
        assert_eq!(format_threshold(85.0), "85.0");
        assert_eq!(format_threshold(0.0), "0.0");
        assert_eq!(format_threshold(99.95), "99.95");
        assert_eq!(format_threshold(1e16), "1e16");
    }
}
