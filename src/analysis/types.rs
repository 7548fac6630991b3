//! Analysis result types and data structures
//!
//! Reports returned by the distribution and throughput pipelines. All of them
//! serialise to JSON and are consumed by the report formatter and renderer.

use serde::{Deserialize, Serialize};

/// Summary statistics over every extracted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    /// Requested percentile in [0, 100]
    pub percentile: f64,
    /// Linearly interpolated value at `percentile`
    pub percentile_value: f64,
}

/// Equal-width histogram with percentage-style weights
///
/// `edges` has one more element than `weights`. Each weight is the bin count
/// divided by the total number of values, including values outside an
/// explicit range, so weights sum to less than 1.0 when a range clips data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub weights: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.weights.len()
    }

    /// Sum of all bin weights (share of all values that landed in a bin)
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Bin midpoints, used as bar positions by renderers
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Bin widths
    pub fn widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Complete result of the distribution pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub summary: DistributionSummary,
    pub histogram: Histogram,
    /// Explicit histogram domain, if one was supplied
    pub range: Option<(f64, f64)>,
    /// Values that fell inside the histogram domain
    pub in_range_count: usize,
}

/// Elapsed time and throughput samples of a single flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSeries {
    pub flow_id: i64,
    /// Nanoseconds since the configured epoch offset
    pub elapsed_ns: Vec<i64>,
    /// Rate in the unit selected by the configured scale (Gbps by default)
    pub throughput: Vec<f64>,
}

impl FlowSeries {
    pub fn new(flow_id: i64) -> Self {
        Self {
            flow_id,
            elapsed_ns: Vec::new(),
            throughput: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elapsed_ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed_ns.is_empty()
    }

    /// Peak throughput, `None` for an empty series
    pub fn peak(&self) -> Option<f64> {
        self.throughput.iter().copied().reduce(f64::max)
    }

    /// Mean throughput, `None` for an empty series
    pub fn mean(&self) -> Option<f64> {
        if self.throughput.is_empty() {
            None
        } else {
            Some(self.throughput.iter().sum::<f64>() / self.throughput.len() as f64)
        }
    }
}

/// Complete result of the throughput pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputReport {
    /// One series per requested flow, in request order
    pub flows: Vec<FlowSeries>,
    pub epoch_offset_ns: i64,
    pub rate_unit_scale: f64,
    pub stride: usize,
    /// Samples belonging to a requested flow (before subsampling)
    pub matched_samples: usize,
    /// Samples belonging to flows that were not requested
    pub ignored_samples: usize,
}

impl ThroughputReport {
    /// Look up the series of one flow
    pub fn flow(&self, flow_id: i64) -> Option<&FlowSeries> {
        self.flows.iter().find(|f| f.flow_id == flow_id)
    }

    pub fn flow_ids(&self) -> Vec<i64> {
        self.flows.iter().map(|f| f.flow_id).collect()
    }
}
