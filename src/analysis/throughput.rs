//! Per-flow throughput extraction from sampled byte counters
//!
//! Each sample is `(timestamp_ns, flow_id, bytes)`. For the requested flows the
//! extractor produces `elapsed = timestamp - epoch_offset` and
//! `rate = bytes * 8 / rate_unit_scale`, accumulating samples in input order.
//! Subsampling by stride happens after a flow's series is fully assembled.

use super::types::{FlowSeries, ThroughputReport};
use crate::config::{ThroughputConfig, DEFAULT_EPOCH_OFFSET_NS, DEFAULT_RATE_UNIT_SCALE};
use crate::errors::{AppError, AppResult};
use crate::reader::{LogReader, ThroughputSample, ThroughputTriple};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Flow selection and unit conversion parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputOptions {
    /// Flows to extract, in output order
    pub flow_ids: Vec<i64>,
    /// Nanoseconds subtracted from every timestamp
    pub epoch_offset_ns: i64,
    /// Divisor applied to `bytes * 8`. The default of 1e5 yields Gbps for the
    /// simulator's byte counters, which are sampled on a fixed interval.
    pub rate_unit_scale: f64,
    /// Keep every k-th sample of each flow; 1 keeps all
    pub stride: usize,
}

impl Default for ThroughputOptions {
    fn default() -> Self {
        Self {
            flow_ids: vec![0, 1],
            epoch_offset_ns: DEFAULT_EPOCH_OFFSET_NS,
            rate_unit_scale: DEFAULT_RATE_UNIT_SCALE,
            stride: 1,
        }
    }
}

impl From<&ThroughputConfig> for ThroughputOptions {
    fn from(config: &ThroughputConfig) -> Self {
        Self {
            flow_ids: config.flow_ids.clone(),
            epoch_offset_ns: config.epoch_offset_ns,
            rate_unit_scale: config.rate_unit_scale,
            stride: config.stride,
        }
    }
}

impl ThroughputOptions {
    pub fn validate(&self) -> AppResult<()> {
        if self.stride == 0 {
            return Err(AppError::Config("Stride must be at least 1".to_string()));
        }
        if !(self.rate_unit_scale.is_finite() && self.rate_unit_scale > 0.0) {
            return Err(AppError::Config(format!(
                "Rate unit scale must be a positive number, got {}",
                self.rate_unit_scale
            )));
        }
        Ok(())
    }
}

/// Throughput extractor for a fixed set of flows
pub struct ThroughputExtractor {
    options: ThroughputOptions,
}

impl ThroughputExtractor {
    pub fn new(options: ThroughputOptions) -> AppResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ThroughputOptions {
        &self.options
    }

    /// Read every `<timestamp> <flow_id> <bytes>` line of `path` and extract
    pub fn extract_file(&self, path: &Path) -> AppResult<ThroughputReport> {
        let samples = LogReader::read_records(path, ThroughputTriple)?;
        self.extract(samples)
    }

    /// Bucket samples per requested flow and convert them to elapsed time and rate
    pub fn extract<I>(&self, samples: I) -> AppResult<ThroughputReport>
    where
        I: IntoIterator<Item = ThroughputSample>,
    {
        // Duplicate ids collapse onto their first position
        let mut flows: Vec<FlowSeries> = Vec::with_capacity(self.options.flow_ids.len());
        let mut index: HashMap<i64, usize> = HashMap::new();
        for &flow_id in &self.options.flow_ids {
            index.entry(flow_id).or_insert_with(|| {
                flows.push(FlowSeries::new(flow_id));
                flows.len() - 1
            });
        }

        let mut matched_samples = 0usize;
        let mut ignored_samples = 0usize;

        for sample in samples {
            let Some(&slot) = index.get(&sample.flow_id) else {
                ignored_samples += 1;
                continue;
            };
            let series = &mut flows[slot];
            series.elapsed_ns.push(self.elapsed_ns(sample.timestamp_ns)?);
            series.throughput.push(self.rate(sample.bytes));
            matched_samples += 1;
        }

        for series in &mut flows {
            Self::subsample(series, self.options.stride);
            if series.is_empty() {
                warn!("No samples found for flow {}", series.flow_id);
            }
        }

        info!(
            "Extracted {} samples for {} flows ({} samples from other flows ignored)",
            matched_samples,
            flows.len(),
            ignored_samples
        );

        Ok(ThroughputReport {
            flows,
            epoch_offset_ns: self.options.epoch_offset_ns,
            rate_unit_scale: self.options.rate_unit_scale,
            stride: self.options.stride,
            matched_samples,
            ignored_samples,
        })
    }

    /// Elapsed time since the configured epoch offset, in nanoseconds
    pub fn elapsed_ns(&self, timestamp_ns: i64) -> AppResult<i64> {
        timestamp_ns
            .checked_sub(self.options.epoch_offset_ns)
            .ok_or_else(|| {
                AppError::InvalidData(format!(
                    "Timestamp {} minus epoch offset {} overflows",
                    timestamp_ns, self.options.epoch_offset_ns
                ))
            })
    }

    /// Convert a per-sample byte count to a bit rate in the configured unit
    pub fn rate(&self, bytes: f64) -> f64 {
        bytes * 8.0 / self.options.rate_unit_scale
    }

    /// Keep positions 0, k, 2k, ... of an assembled series
    fn subsample(series: &mut FlowSeries, stride: usize) {
        if stride <= 1 {
            return;
        }
        series.elapsed_ns = series.elapsed_ns.iter().copied().step_by(stride).collect();
        series.throughput = series.throughput.iter().copied().step_by(stride).collect();
    }
}

/// Unit produced by `bytes * 8 / scale` for the simulator's 100 us byte
/// counter interval; other scales are labelled by the raw divisor
pub fn rate_unit_label(scale: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e5, "Gbps"), (1e2, "Mbps"), (1e-1, "Kbps"), (1e-4, "bps")];
    UNITS
        .iter()
        .find(|(unit_scale, _)| ((scale - unit_scale) / unit_scale).abs() < 1e-9)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("bits / {}", scale))
}
