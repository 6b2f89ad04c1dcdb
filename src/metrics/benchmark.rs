//! Regional benchmark comparison
//!
//! Benchmarks come from environment variables, one commits-per-week value
//! and one hours-between-commits value per region. By default SP reads its
//! time-between value from `EU_TIME_BETWEEN_H`, which is how the pipeline
//! has always resolved it; [`TimeBenchmarkLookup::PerRegion`] switches SP to
//! `SP_TIME_BETWEEN_H`.

use anyhow::{Context, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::round2;

/// Region codes compared against, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Sp,
    Eu,
    Us,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Sp, Region::Eu, Region::Us];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Sp => "SP",
            Region::Eu => "EU",
            Region::Us => "US",
        }
    }

    pub fn commits_wk_var(&self) -> &'static str {
        match self {
            Region::Sp => "SP_COMMITS_WK",
            Region::Eu => "EU_COMMITS_WK",
            Region::Us => "US_COMMITS_WK",
        }
    }

    pub fn time_between_var(&self, lookup: TimeBenchmarkLookup) -> &'static str {
        match (self, lookup) {
            (Region::Sp, TimeBenchmarkLookup::Shared) => "EU_TIME_BETWEEN_H",
            (Region::Sp, TimeBenchmarkLookup::PerRegion) => "SP_TIME_BETWEEN_H",
            (Region::Eu, _) => "EU_TIME_BETWEEN_H",
            (Region::Us, _) => "US_TIME_BETWEEN_H",
        }
    }
}

/// How the SP time-between benchmark variable is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBenchmarkLookup {
    /// SP shares `EU_TIME_BETWEEN_H`.
    #[default]
    Shared,
    /// Every region reads `<CODE>_TIME_BETWEEN_H`.
    PerRegion,
}

/// Reference values for one region. `None` when the variable is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionBenchmark {
    pub commits_wk: Option<f64>,
    pub time_between_h: Option<f64>,
}

/// Benchmarks for every region in [`Region::ALL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Benchmarks {
    regions: Vec<(Region, RegionBenchmark)>,
}

impl Benchmarks {
    /// Read benchmarks from the process environment.
    pub fn from_env(lookup: TimeBenchmarkLookup) -> Result<Self> {
        Self::from_lookup(lookup, |key| std::env::var(key).ok())
    }

    /// Read benchmarks through `var`, which maps a variable name to its value.
    ///
    /// Unset and empty variables give `None`; anything else must parse as a
    /// number.
    pub fn from_lookup<F>(lookup: TimeBenchmarkLookup, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> Result<Option<f64>> {
            match var(key) {
                Some(v) if !v.is_empty() => {
                    let value = v
                        .trim()
                        .parse::<f64>()
                        .with_context(|| format!("{} is not a number: {:?}", key, v))?;
                    tracing::debug!(key, value, "benchmark");
                    Ok(Some(value))
                }
                _ => Ok(None),
            }
        };

        let mut regions = Vec::with_capacity(Region::ALL.len());
        for region in Region::ALL {
            regions.push((
                region,
                RegionBenchmark {
                    commits_wk: read(region.commits_wk_var())?,
                    time_between_h: read(region.time_between_var(lookup))?,
                },
            ));
        }

        Ok(Self { regions })
    }

    pub fn get(&self, region: Region) -> RegionBenchmark {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, b)| *b)
            .unwrap_or_default()
    }

    /// Compare computed cadence against every region.
    ///
    /// Inputs are the unrounded metrics; each delta is rounded to two
    /// decimals and is `None` when either side is missing.
    pub fn compare(&self, commits_per_week: f64, avg_gap_hours: Option<f64>) -> Comparisons {
        let regions = Region::ALL
            .into_iter()
            .map(|region| {
                let bench = self.get(region);
                (
                    region,
                    Comparison {
                        commits_wk_delta: delta(Some(commits_per_week), bench.commits_wk),
                        time_between_delta_h: delta(avg_gap_hours, bench.time_between_h),
                    },
                )
            })
            .collect();
        Comparisons { regions }
    }
}

fn delta(value: Option<f64>, bench: Option<f64>) -> Option<f64> {
    Some(round2(value? - bench?))
}

/// Per-region deltas, `computed - benchmark`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub commits_wk_delta: Option<f64>,
    pub time_between_delta_h: Option<f64>,
}

/// Comparisons keyed by region code, serialized in [`Region::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparisons {
    regions: Vec<(Region, Comparison)>,
}

impl Comparisons {
    #[cfg(test)]
    pub fn get(&self, region: Region) -> Option<&Comparison> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, c)| c)
    }
}

impl Serialize for Comparisons {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.regions.len()))?;
        for (region, comparison) in &self.regions {
            map.serialize_entry(region.code(), comparison)?;
        }
        map.end()
    }
}
