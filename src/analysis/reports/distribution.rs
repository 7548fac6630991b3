//! Distribution report formatter
//!
//! Console output mirrors the quick summary analysts read off the terminal:
//! count, min/max/mean and the requested percentile, followed by the
//! histogram domain and the heaviest bins.

use super::utils::{export_csv, export_json, format_number};
use super::OutputFormat;
use crate::analysis::types::DistributionReport;
use crate::errors::AppResult;
use crate::render::PlotlyRenderer;
use crate::utils::math::safe_percentage;
use serde::Serialize;

/// Number of heaviest bins listed in console output
const TOP_BINS: usize = 10;

#[derive(Serialize)]
struct HistogramRow {
    bin_start: f64,
    bin_end: f64,
    count: usize,
    weight: f64,
}

/// Format a distribution report
pub fn format_distribution(report: &DistributionReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&PlotlyRenderer::default().histogram_chart(report)),
        OutputFormat::Csv => export_csv(&histogram_rows(report)),
        OutputFormat::Console => Ok(format_console(report)),
    }
}

fn histogram_rows(report: &DistributionReport) -> Vec<HistogramRow> {
    let histogram = &report.histogram;
    histogram
        .edges
        .windows(2)
        .zip(histogram.counts.iter().zip(histogram.weights.iter()))
        .map(|(edge, (&count, &weight))| HistogramRow {
            bin_start: edge[0],
            bin_end: edge[1],
            count,
            weight,
        })
        .collect()
}

fn format_console(report: &DistributionReport) -> String {
    let summary = &report.summary;
    let histogram = &report.histogram;
    let mut output = String::new();

    output.push_str("\n=== DISTRIBUTION SUMMARY ===\n\n");
    output.push_str(&format!("Total values: {}\n", format_number(summary.count)));
    output.push_str(&format!(
        "Min: {}, Max: {}, Mean: {:.2}\n",
        summary.min, summary.max, summary.mean
    ));
    output.push_str(&format!(
        "P{} (linear interpolation): {:.2}\n\n",
        summary.percentile, summary.percentile_value
    ));

    let (lo, hi) = match (histogram.edges.first(), histogram.edges.last()) {
        (Some(lo), Some(hi)) => (*lo, *hi),
        _ => (0.0, 0.0),
    };
    output.push_str("HISTOGRAM:\n");
    output.push_str(&format!(
        "  {} bins over [{}, {}]{}\n",
        format_number(histogram.bin_count()),
        lo,
        hi,
        if report.range.is_some() {
            " (explicit range)"
        } else {
            ""
        }
    ));
    output.push_str(&format!(
        "  In range: {} of {} values ({:.2}%), total weight {:.4}\n\n",
        format_number(report.in_range_count),
        format_number(summary.count),
        safe_percentage(report.in_range_count, summary.count),
        histogram.total_weight()
    ));

    let mut rows: Vec<HistogramRow> = histogram_rows(report)
        .into_iter()
        .filter(|row| row.count > 0)
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(TOP_BINS);

    if !rows.is_empty() {
        output.push_str(&format!("HEAVIEST BINS (top {}):\n", rows.len()));
        output.push_str(&format!(
            "  {:<32} │ {:>12} │ {:>8} │\n",
            "Range", "Count", "%"
        ));
        output.push_str("  ─────────────────────────────────┼──────────────┼──────────┤\n");
        for row in rows {
            output.push_str(&format!(
                "  {:<32} │ {:>12} │ {:>7.2}% │\n",
                format!("[{:.2}, {:.2})", row.bin_start, row.bin_end),
                format_number(row.count),
                row.weight * 100.0
            ));
        }
        output.push('\n');
    }

    output
}
