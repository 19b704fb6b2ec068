//! Cumulative-size percentile tables (N50/L50 style).
//!
//! Lengths are walked from largest to smallest while their running sum is
//! compared against each threshold of the total. A row is emitted the first
//! time the running sum is strictly greater than `threshold * total`, and one
//! final row for the last threshold is always appended after the walk.

use serde::Serialize;
use thiserror::Error;

/// Default spacing between thresholds, in percent
pub const DEFAULT_STEP_PERCENT: u32 = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("threshold step must be between 1 and 100 percent, got {0}")]
pub struct InvalidStep(pub u32);

/// Ascending percentile thresholds, held as whole percents and always ending at 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    percents: Vec<u32>,
}

impl Thresholds {
    /// Thresholds at `step`, `2 * step`, ... below 100, followed by 100.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` unless `1 <= step <= 100`.
    pub fn with_step(step: u32) -> Result<Self, InvalidStep> {
        if !(1..=100).contains(&step) {
            return Err(InvalidStep(step));
        }
        let percents = (1..)
            .map(|k| k * step)
            .take_while(|&p| p < 100)
            .chain(std::iter::once(100))
            .collect();
        Ok(Self { percents })
    }

    #[must_use]
    pub fn percents(&self) -> &[u32] {
        &self.percents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.percents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }
}

impl Default for Thresholds {
    /// 5%, 10%, ..., 100%
    fn default() -> Self {
        Self {
            percents: (1..=20).map(|k| k * DEFAULT_STEP_PERCENT).collect(),
        }
    }
}

/// One breakpoint of the cumulative size distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileRow {
    /// Threshold as a fraction of the total (0.05 for 5%)
    pub percentile: f64,

    /// Running sum of lengths when the threshold was crossed
    pub cumulative_size: u64,

    /// Number of sequences strictly before the one that crossed the
    /// threshold; for the final row, the total number of sequences
    pub rank: usize,

    /// Length of the sequence that crossed the threshold; for the final row,
    /// the smallest length
    pub critical_size: u64,
}

impl PercentileRow {
    fn new(percent: u32, cumulative_size: u64, rank: usize, critical_size: u64) -> Self {
        Self {
            percentile: f64::from(percent) / 100.0,
            cumulative_size,
            rank,
            critical_size,
        }
    }
}

/// `cumulative > percent% of total`, evaluated exactly
fn exceeds(cumulative: u64, total: u64, percent: u32) -> bool {
    u128::from(cumulative) * 100 > u128::from(percent) * u128::from(total)
}

/// Compute percentile rows for a set of lengths.
///
/// Rows come out in increasing threshold order and no threshold is reported
/// twice. An empty input produces no rows.
#[must_use]
pub fn report(lengths: &[u64], thresholds: &Thresholds) -> Vec<PercentileRow> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let (Some(&smallest), Some(&last_percent)) = (sorted.last(), thresholds.percents.last())
    else {
        return Vec::new();
    };

    let total: u64 = sorted.iter().sum();
    let last = thresholds.len() - 1;
    let mut rows = Vec::with_capacity(thresholds.len());
    let mut next = 0;
    let mut cumulative = 0;

    for (rank, &length) in sorted.iter().enumerate() {
        cumulative += length;
        while next < last && exceeds(cumulative, total, thresholds.percents[next]) {
            rows.push(PercentileRow::new(
                thresholds.percents[next],
                cumulative,
                rank,
                length,
            ));
            next += 1;
        }
    }

    rows.push(PercentileRow::new(
        last_percent,
        cumulative,
        sorted.len(),
        smallest,
    ));
    rows
}

/// Percentile table for one class of sequences together with its totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeReport {
    /// Sum of all lengths
    pub total_size: u64,

    /// Number of sequences
    pub count: usize,

    pub rows: Vec<PercentileRow>,
}

impl SizeReport {
    #[must_use]
    pub fn from_lengths(lengths: &[u64], thresholds: &Thresholds) -> Self {
        Self {
            total_size: lengths.iter().sum(),
            count: lengths.len(),
            rows: report(lengths, thresholds),
        }
    }
}
