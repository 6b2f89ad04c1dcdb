//! Commit cadence calculations

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Mean gap between consecutive commits, in hours.
///
/// Timestamps need not be sorted. `None` with fewer than two commits.
pub fn average_gap_hours(timestamps: &[i64]) -> Option<f64> {
    if timestamps.len() < 2 {
        return None;
    }

    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let total: i64 = sorted.windows(2).map(|w| w[1] - w[0]).sum();
    let gaps = (sorted.len() - 1) as f64;
    Some(total as f64 / gaps / SECONDS_PER_HOUR)
}

/// Commits per week over a window. Windows shorter than a week (including
/// the all-history window, `0`) count as one week.
pub fn commits_per_week(commits: usize, window_days: u32) -> f64 {
    let weeks = (f64::from(window_days) / 7.0).max(1.0);
    commits as f64 / weeks
}

/// Round to two decimals, ties to even on the exact binary value.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_needs_two_commits() {
        assert_eq!(average_gap_hours(&[]), None);
        assert_eq!(average_gap_hours(&[1_700_000_000]), None);
    }

    #[test]
    fn test_gap_of_one_hour() {
        assert_eq!(average_gap_hours(&[1_700_003_600, 1_700_000_000]), Some(1.0));
    }

    #[test]
    fn test_gap_is_mean_of_sorted_differences() {
        // gaps of 1h and 3h, given out of order
        let ts = [14_400, 0, 3_600];
        assert_eq!(average_gap_hours(&ts), Some(2.0));
    }

    #[test]
    fn test_identical_timestamps_give_zero_gap() {
        assert_eq!(average_gap_hours(&[5, 5, 5]), Some(0.0));
    }

    #[test]
    fn test_commits_per_week() {
        assert_eq!(commits_per_week(14, 7), 2.0);
        assert_eq!(commits_per_week(26, 91), 2.0);
        assert_eq!(commits_per_week(0, 90), 0.0);
    }

    #[test]
    fn test_short_windows_count_as_one_week() {
        assert_eq!(commits_per_week(5, 0), 5.0);
        assert_eq!(commits_per_week(5, 3), 5.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(10.0), 10.0);
    }
}
