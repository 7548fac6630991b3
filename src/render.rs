//! Chart rendering for analysis results
//!
//! A renderer is an explicit value handed the histogram or flow series; it
//! carries its own titles and keeps no process-wide drawing state, so any
//! number of charts can be produced in one process.

use crate::analysis::throughput::rate_unit_label;
use crate::analysis::types::{DistributionReport, ThroughputReport};
use crate::errors::{AppError, AppResult};
use crate::types::visualisation::{
    flow_colour, PlotlyAnnotation, PlotlyChart, PlotlyLayout, PlotlyLegend, PlotlyTrace,
};
use std::path::Path;
use tracing::info;

/// Turns analysis results into a saved chart artifact
pub trait ChartRenderer {
    fn render_histogram(&self, report: &DistributionReport, output: &Path) -> AppResult<()>;

    fn render_throughput(&self, report: &ThroughputReport, output: &Path) -> AppResult<()>;
}

/// Renders Plotly JSON charts (`{data, layout}`)
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    pub histogram_title: String,
    pub throughput_title: String,
    /// Throughput axis unit; `None` derives it from the report's rate scale
    pub rate_unit_label: Option<String>,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self {
            histogram_title: "Histogram of Second Last Numbers (Percentage)".to_string(),
            throughput_title: "Throughput over Time".to_string(),
            rate_unit_label: None,
        }
    }
}

impl PlotlyRenderer {
    /// Bar chart of bin weights at bin centres, y axis shown as percentages
    pub fn histogram_chart(&self, report: &DistributionReport) -> PlotlyChart {
        let histogram = &report.histogram;
        let trace = PlotlyTrace::bar(
            histogram.centres(),
            histogram.weights.clone(),
            histogram.widths(),
            "Share of values",
            "#3498DB",
        )
        .with_hovertemplate("%{x}: %{y:.2%}<extra></extra>");

        let summary = &report.summary;
        let stats = [
            format!("n = {}", summary.count),
            format!("min = {}", summary.min),
            format!("max = {}", summary.max),
            format!("mean = {:.2}", summary.mean),
            format!("P{} = {:.2}", summary.percentile, summary.percentile_value),
        ];

        let mut layout = PlotlyLayout::new(&self.histogram_title, "Value", "Percentage");
        layout.annotations.push(PlotlyAnnotation::summary_box(&stats));
        layout.yaxis.tickformat = Some(".0%".to_string());
        layout.bargap = Some(0.0);
        layout.xaxis.range = report.range.map(|(min, max)| [min, max]);

        PlotlyChart {
            data: vec![trace],
            layout,
        }
    }

    /// One line per flow, in request order
    pub fn throughput_chart(&self, report: &ThroughputReport) -> PlotlyChart {
        let traces = report
            .flows
            .iter()
            .enumerate()
            .map(|(position, flow)| {
                PlotlyTrace::line(
                    flow.elapsed_ns.iter().map(|&t| t as f64).collect(),
                    flow.throughput.clone(),
                    &format!("Flow {}", flow.flow_id),
                    flow_colour(position),
                )
            })
            .collect();

        let unit = self
            .rate_unit_label
            .clone()
            .unwrap_or_else(|| rate_unit_label(report.rate_unit_scale));
        let mut layout = PlotlyLayout::new(
            &self.throughput_title,
            "Time (ns)",
            &format!("Throughput ({})", unit),
        );
        layout.legend = Some(PlotlyLegend::default());

        PlotlyChart {
            data: traces,
            layout,
        }
    }

    fn write_chart(chart: &PlotlyChart, output: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(chart)?;
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
            }
        }
        std::fs::write(output, json).map_err(|e| AppError::io(output, e))?;
        info!("Chart written to {}", output.display());
        Ok(())
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render_histogram(&self, report: &DistributionReport, output: &Path) -> AppResult<()> {
        Self::write_chart(&self.histogram_chart(report), output)
    }

    fn render_throughput(&self, report: &ThroughputReport, output: &Path) -> AppResult<()> {
        Self::write_chart(&self.throughput_chart(report), output)
    }
}
