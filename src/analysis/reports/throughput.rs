//! Throughput report formatter

use super::utils::{export_csv, export_json, format_ns, format_number};
use super::OutputFormat;
use crate::analysis::throughput::rate_unit_label;
use crate::analysis::types::ThroughputReport;
use crate::errors::AppResult;
use crate::render::PlotlyRenderer;
use serde::Serialize;

#[derive(Serialize)]
struct SampleRow {
    flow_id: i64,
    elapsed_ns: i64,
    throughput: f64,
}

/// Format a throughput report
pub fn format_throughput(report: &ThroughputReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&PlotlyRenderer::default().throughput_chart(report)),
        OutputFormat::Csv => export_csv(&sample_rows(report)),
        OutputFormat::Console => Ok(format_console(report)),
    }
}

fn sample_rows(report: &ThroughputReport) -> Vec<SampleRow> {
    report
        .flows
        .iter()
        .flat_map(|flow| {
            flow.elapsed_ns
                .iter()
                .zip(flow.throughput.iter())
                .map(move |(&elapsed_ns, &throughput)| SampleRow {
                    flow_id: flow.flow_id,
                    elapsed_ns,
                    throughput,
                })
        })
        .collect()
}

fn format_console(report: &ThroughputReport) -> String {
    let mut output = String::new();

    output.push_str("\n=== PER-FLOW THROUGHPUT ===\n\n");
    output.push_str(&format!(
        "Epoch offset: {} ns, rate = bytes * 8 / {} ({}), stride: {}\n",
        report.epoch_offset_ns,
        report.rate_unit_scale,
        rate_unit_label(report.rate_unit_scale),
        report.stride
    ));
    output.push_str(&format!(
        "Samples matched: {}, ignored (other flows): {}\n\n",
        format_number(report.matched_samples),
        format_number(report.ignored_samples)
    ));

    output.push_str(&format!(
        "  {:>8} │ {:>10} │ {:>14} │ {:>14} │ {:>10} │ {:>10} │\n",
        "Flow", "Samples", "First", "Last", "Mean", "Peak"
    ));
    output.push_str(
        "  ─────────┼────────────┼────────────────┼────────────────┼────────────┼────────────┤\n",
    );

    for flow in &report.flows {
        let first = flow.elapsed_ns.first().map(|&t| format_ns(t));
        let last = flow.elapsed_ns.last().map(|&t| format_ns(t));
        output.push_str(&format!(
            "  {:>8} │ {:>10} │ {:>14} │ {:>14} │ {:>10} │ {:>10} │\n",
            flow.flow_id,
            format_number(flow.len()),
            first.unwrap_or_else(|| "-".to_string()),
            last.unwrap_or_else(|| "-".to_string()),
            flow.mean()
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string()),
            flow.peak()
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    output.push('\n');

    output
}
