//! Analysis pipelines for network simulation logs
//!
//! - **Distribution Analysis** - summary statistics, interpolated percentile and
//!   a percentage-weighted histogram of one integer field (e.g. flow completion times)
//! - **Throughput Extraction** - per-flow elapsed time / bit-rate series from
//!   sampled byte counters
//! - **Report Generation** - console, JSON, Plotly and CSV output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use netsim_log_analyser::analysis::{
//!     DistributionAnalyser, HistogramOptions, ThroughputExtractor, ThroughputOptions,
//! };
//! use netsim_log_analyser::errors::AppResult;
//! use std::path::Path;
//!
//! fn example() -> AppResult<()> {
//!     let fct = DistributionAnalyser::analyse_file(
//!         Path::new("fct_topology_flow_dcqcn.txt"),
//!         &HistogramOptions::new(5000, Some(0.0), Some(5_000_000.0), 99.0),
//!     )?;
//!     println!("p99 = {:.2}", fct.summary.percentile_value);
//!
//!     let extractor = ThroughputExtractor::new(ThroughputOptions::default())?;
//!     let throughput = extractor.extract_file(Path::new("throughput.txt"))?;
//!     println!("{} flows", throughput.flows.len());
//!     Ok(())
//! }
//! ```

pub mod distribution;
pub mod reports;
pub mod throughput;
pub mod types;

// Re-export main types and interfaces
pub use distribution::{DistributionAnalyser, HistogramOptions};
pub use reports::{OutputFormat, ReportFormatter};
pub use throughput::{rate_unit_label, ThroughputExtractor, ThroughputOptions};
pub use types::{
    DistributionReport, DistributionSummary, FlowSeries, Histogram, ThroughputReport,
};
