//! Distribution analysis of one integer log field
//!
//! Computes count/min/max/mean, an interpolated percentile, and an
//! equal-width histogram whose weights are fractions of ALL values.
//!
//! Weight denominator policy: the denominator is the full value count even
//! when an explicit range excludes some values. A weight therefore reads as
//! "share of all observed data", and clipped values show up as a weight
//! deficit (sum < 1.0) instead of being redistributed over the in-range bins.

use super::types::{DistributionReport, DistributionSummary, Histogram};
use crate::errors::{AppError, AppResult};
use crate::reader::{LogReader, SecondToLastInteger};
use crate::utils::math::percentile_linear;
use std::path::Path;
use tracing::{debug, info};

/// Upper bound on the histogram bin count
pub const MAX_HISTOGRAM_BINS: usize = 10_000_000;

/// Histogram and percentile parameters
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramOptions {
    pub bins: usize,
    /// Explicit histogram domain; values outside it are excluded from every bin
    pub range: Option<(f64, f64)>,
    /// Percentile to report, in [0, 100]
    pub percentile: f64,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 50,
            range: None,
            percentile: 99.0,
        }
    }
}

impl HistogramOptions {
    /// Build options from optional range bounds; a range applies only when both are given
    pub fn new(bins: usize, range_min: Option<f64>, range_max: Option<f64>, percentile: f64) -> Self {
        let range = match (range_min, range_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };
        Self {
            bins,
            range,
            percentile,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.bins == 0 {
            return Err(AppError::Config(
                "Histogram bin count must be at least 1".to_string(),
            ));
        }
        if self.bins > MAX_HISTOGRAM_BINS {
            return Err(AppError::Config(format!(
                "Histogram bin count must be at most {}, got {}",
                MAX_HISTOGRAM_BINS, self.bins
            )));
        }
        if !(0.0..=100.0).contains(&self.percentile) {
            return Err(AppError::Config(format!(
                "Percentile must be within [0, 100], got {}",
                self.percentile
            )));
        }
        if let Some((min, max)) = self.range {
            if !min.is_finite() || !max.is_finite() {
                return Err(AppError::Config(format!(
                    "Histogram range must be finite, got [{}, {}]",
                    min, max
                )));
            }
            if min > max {
                return Err(AppError::Config(format!(
                    "Histogram range minimum {} exceeds maximum {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Distribution analyser for integer log fields
pub struct DistributionAnalyser;

impl DistributionAnalyser {
    /// Read the second-to-last field of every qualifying line and analyse it
    pub fn analyse_file(path: &Path, options: &HistogramOptions) -> AppResult<DistributionReport> {
        options.validate()?;
        let values = LogReader::read_records(path, SecondToLastInteger)?;
        Self::analyse(&values, options)
    }

    /// Compute summary statistics and the weighted histogram
    ///
    /// # Errors
    /// * `AppError::EmptyInput` - `values` is empty
    /// * `AppError::Config` - invalid bin count, percentile or range
    pub fn analyse(values: &[i64], options: &HistogramOptions) -> AppResult<DistributionReport> {
        options.validate()?;
        if values.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        sorted.sort_unstable_by(f64::total_cmp);

        let summary = Self::summarise(values, &sorted, options.percentile)?;

        let domain = match options.range {
            Some(range) => range,
            None => (summary.min as f64, summary.max as f64),
        };
        let histogram = Self::build_histogram(&sorted, options.bins, domain);
        let in_range_count = histogram.counts.iter().sum();

        info!(
            "Analysed {} values: min={}, max={}, mean={:.2}, p{}={:.2}",
            summary.count,
            summary.min,
            summary.max,
            summary.mean,
            summary.percentile,
            summary.percentile_value
        );
        debug!(
            "{} of {} values inside histogram domain [{}, {}]",
            in_range_count, summary.count, domain.0, domain.1
        );

        Ok(DistributionReport {
            summary,
            histogram,
            range: options.range,
            in_range_count,
        })
    }

    fn summarise(values: &[i64], sorted: &[f64], percentile: f64) -> AppResult<DistributionSummary> {
        let count = values.len();
        let min = values.iter().copied().min().ok_or(AppError::EmptyInput)?;
        let max = values.iter().copied().max().ok_or(AppError::EmptyInput)?;
        // i128 keeps the sum exact for any realistic log size
        let sum: i128 = values.iter().map(|&v| v as i128).sum();
        let mean = sum as f64 / count as f64;
        let percentile_value =
            percentile_linear(sorted, percentile).ok_or(AppError::EmptyInput)?;

        Ok(DistributionSummary {
            count,
            min,
            max,
            mean,
            percentile,
            percentile_value,
        })
    }

    /// Bin `values` into `bins` equal-width bins over `domain`
    ///
    /// Bins are [e_i, e_{i+1}) except the last, which includes its upper edge.
    /// A degenerate domain is widened by 0.5 on each side.
    fn build_histogram(values: &[f64], bins: usize, domain: (f64, f64)) -> Histogram {
        let (mut lo, mut hi) = domain;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lo + step * i as f64).collect();
        edges[bins] = hi;

        let mut counts = vec![0usize; bins];
        for &value in values {
            if value < lo || value > hi {
                continue;
            }
            counts[Self::assign_bin(value, &edges)] += 1;
        }

        let total = values.len() as f64;
        let weights = counts.iter().map(|&c| c as f64 / total).collect();

        Histogram {
            edges,
            weights,
            counts,
        }
    }

    /// Bin index for a value already known to lie within [edges[0], edges[last]]
    fn assign_bin(value: f64, edges: &[f64]) -> usize {
        let bins = edges.len() - 1;
        let lo = edges[0];
        let hi = edges[bins];

        let mut idx = if value >= hi {
            bins - 1
        } else {
            (((value - lo) / (hi - lo)) * bins as f64) as usize
        };
        idx = idx.min(bins - 1);

        // Correct floating-point drift against the materialised edges
        if value < edges[idx] && idx > 0 {
            idx -= 1;
        } else if idx + 1 < bins && value >= edges[idx + 1] {
            idx += 1;
        }
        idx
    }
}
