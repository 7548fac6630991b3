//! Report formatting and output generation
//!
//! Provides formatting for analysis results via the [`ReportFormatter`] facade.
//! Supports Console, JSON, Plotly and CSV output formats.

pub mod distribution;
pub mod throughput;
pub mod utils;

use crate::analysis::types::{DistributionReport, ThroughputReport};
use crate::errors::AppResult;
use std::str::FromStr;

/// Output format options for analysis reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Plotly,
    Csv,
}

impl OutputFormat {
    /// Formats that produce a file artifact rather than terminal text
    pub fn is_artifact(&self) -> bool {
        !matches!(self, OutputFormat::Console)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Console => "txt",
            OutputFormat::Json | OutputFormat::Plotly => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "plotly" => Ok(OutputFormat::Plotly),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}' (expected console, json, plotly or csv)",
                other
            )),
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_number(n: usize) -> String {
        utils::format_number(n)
    }

    pub fn format_distribution(r: &DistributionReport, f: &OutputFormat) -> AppResult<String> {
        distribution::format_distribution(r, f)
    }

    pub fn format_throughput(r: &ThroughputReport, f: &OutputFormat) -> AppResult<String> {
        throughput::format_throughput(r, f)
    }
}
