//! End-to-end pipelines: log file -> analysis -> formatted report / chart

use netsim_log_analyser::analysis::{
    DistributionAnalyser, HistogramOptions, OutputFormat, ReportFormatter, ThroughputExtractor,
    ThroughputOptions,
};
use netsim_log_analyser::render::{ChartRenderer, PlotlyRenderer};
use std::fs;
use tempfile::TempDir;

use crate::common::{write_fct_log, write_throughput_log};

#[test]
fn test_distribution_pipeline_to_plotly_chart() {
    let temp_dir = TempDir::new().unwrap();
    let fcts: Vec<i64> = (1..=200).map(|i| i * 1_000).collect();
    let path = write_fct_log(&temp_dir, &fcts);

    let options = HistogramOptions::new(20, None, None, 99.0);
    let report = DistributionAnalyser::analyse_file(&path, &options).unwrap();
    assert_eq!(report.summary.count, 200);
    assert_eq!(report.histogram.bin_count(), 20);
    assert!(report.histogram.counts.iter().all(|&c| c == 10));

    let chart_path = temp_dir.path().join("plots/fct_histogram.json");
    PlotlyRenderer::default()
        .render_histogram(&report, &chart_path)
        .unwrap();

    let chart: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&chart_path).unwrap()).unwrap();
    let trace = &chart["data"][0];
    assert_eq!(trace["type"], "bar");
    assert_eq!(trace["y"].as_array().unwrap().len(), 20);
}

#[test]
fn test_distribution_pipeline_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fct_log(&temp_dir, &[5, 10, 15, 20]);

    let report = DistributionAnalyser::analyse_file(&path, &HistogramOptions::default()).unwrap();
    let json = ReportFormatter::format_distribution(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["count"], 4);
    assert_eq!(value["summary"]["min"], 5);
    assert_eq!(value["summary"]["max"], 20);
}

#[test]
fn test_throughput_pipeline_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_throughput_log(&temp_dir, &[0, 1], 6);

    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![1],
        stride: 2,
        ..ThroughputOptions::default()
    })
    .unwrap();
    let report = extractor.extract_file(&path).unwrap();
    assert_eq!(report.flow(1).unwrap().elapsed_ns, vec![0, 2000, 4000]);

    let csv = ReportFormatter::format_throughput(&report, &OutputFormat::Csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "flow_id,elapsed_ns,throughput");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,0,"));
}

#[test]
fn test_throughput_pipeline_to_plotly_chart() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_throughput_log(&temp_dir, &[0, 1, 2], 4);

    let report = ThroughputExtractor::new(ThroughputOptions::default())
        .unwrap()
        .extract_file(&path)
        .unwrap();

    let chart_path = temp_dir.path().join("throughput.json");
    PlotlyRenderer::default()
        .render_throughput(&report, &chart_path)
        .unwrap();

    let chart: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&chart_path).unwrap()).unwrap();
    let data = chart["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["x"].as_array().unwrap().len(), 4);
}
