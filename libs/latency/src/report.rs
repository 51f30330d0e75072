//! Latency statistics
//!
//! Percentiles use the rank formula `sorted[floor(q × n)]` without
//! interpolation. For five samples `[1, 2, 3, 4, 5]` that gives median
//! `sorted[2] = 3`, p99 `sorted[floor(4.95)] = sorted[4] = 5` and p99.9
//! `sorted[floor(4.995)] = sorted[4] = 5`. Small sample counts therefore
//! report the maximum for both tail percentiles.

use crate::clock::TscCalibration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics over a set of samples, in sample units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p50: u64,
    pub p99: u64,
    pub p999: u64,
}

/// The same statistics converted to nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyNanos {
    pub count: usize,
    pub min_ns: f64,
    pub max_ns: f64,
    pub mean_ns: f64,
    pub p50_ns: f64,
    pub p99_ns: f64,
    pub p999_ns: f64,
}

/// Outcome of analyzing a recorder or a sample slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LatencyReport {
    /// Nothing was recorded (or a count of zero was requested)
    NoData,
    /// Statistics over at least one sample
    Stats(LatencyStats),
}

impl LatencyReport {
    /// Statistics, if any samples were analyzed
    pub fn stats(&self) -> Option<&LatencyStats> {
        match self {
            LatencyReport::NoData => None,
            LatencyReport::Stats(stats) => Some(stats),
        }
    }

    /// True for [`LatencyReport::NoData`]
    pub fn is_empty(&self) -> bool {
        matches!(self, LatencyReport::NoData)
    }
}

impl LatencyStats {
    /// Convert tick statistics to nanoseconds
    pub fn in_nanos(&self, calibration: &TscCalibration) -> LatencyNanos {
        LatencyNanos {
            count: self.count,
            min_ns: calibration.to_nanos(self.min),
            max_ns: calibration.to_nanos(self.max),
            mean_ns: calibration.to_nanos_f64(self.mean),
            p50_ns: calibration.to_nanos(self.p50),
            p99_ns: calibration.to_nanos(self.p99),
            p999_ns: calibration.to_nanos(self.p999),
        }
    }
}

/// Analyze an arbitrary slice of samples
///
/// The slice is copied and sorted; the input is left untouched.
pub fn analyze_samples(samples: &[u64]) -> LatencyReport {
    if samples.is_empty() {
        return LatencyReport::NoData;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let total: u128 = sorted.iter().map(|&sample| u128::from(sample)).sum();

    LatencyReport::Stats(LatencyStats {
        count: n,
        min: sorted[0],
        max: sorted[n - 1],
        mean: total as f64 / n as f64,
        p50: rank(&sorted, 0.50),
        p99: rank(&sorted, 0.99),
        p999: rank(&sorted, 0.999),
    })
}

/// `sorted[floor(quantile × n)]`, clamped to the last element
#[inline]
fn rank(sorted: &[u64], quantile: f64) -> u64 {
    let index = (quantile * sorted.len() as f64) as usize;
    sorted[index.min(sorted.len() - 1)]
}

impl fmt::Display for LatencyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Median: {}", self.p50)?;
        writeln!(f, "Avg: {:.2}", self.mean)?;
        writeln!(f, "99th percentile: {}", self.p99)?;
        writeln!(f, "99.9th percentile: {}", self.p999)?;
        write!(f, "Max: {}", self.max)
    }
}

impl fmt::Display for LatencyNanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Min: {:.1} ns", self.min_ns)?;
        writeln!(f, "Median: {:.1} ns", self.p50_ns)?;
        writeln!(f, "Avg: {:.1} ns", self.mean_ns)?;
        writeln!(f, "99th percentile: {:.1} ns", self.p99_ns)?;
        writeln!(f, "99.9th percentile: {:.1} ns", self.p999_ns)?;
        write!(f, "Max: {:.1} ns", self.max_ns)
    }
}

impl fmt::Display for LatencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatencyReport::NoData => write!(f, "No latency data recorded."),
            LatencyReport::Stats(stats) => stats.fmt(f),
        }
    }
}
