//! Unit tests for per-flow throughput extraction

use netsim_log_analyser::analysis::{ThroughputExtractor, ThroughputOptions};
use netsim_log_analyser::reader::ThroughputSample;
use tempfile::TempDir;

use crate::common::{write_log, write_throughput_log};

fn sample(timestamp_ns: i64, flow_id: i64, bytes: f64) -> ThroughputSample {
    ThroughputSample {
        timestamp_ns,
        flow_id,
        bytes,
    }
}

#[test]
fn test_selection_keeps_only_requested_flows() {
    let samples = vec![
        sample(2_000_000_100, 0, 1000.0),
        sample(2_000_000_200, 1, 500.0),
        sample(2_000_000_300, 2, 999.0),
    ];
    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![0, 1],
        ..ThroughputOptions::default()
    })
    .unwrap();
    let report = extractor.extract(samples).unwrap();

    assert_eq!(report.flow_ids(), vec![0, 1]);
    assert_eq!(report.flow(0).unwrap().len(), 1);
    assert_eq!(report.flow(1).unwrap().len(), 1);
    assert!(report.flow(2).is_none());
}

#[test]
fn test_stride_three_over_ten_samples() {
    let samples: Vec<ThroughputSample> = (0..10).map(|i| sample(i * 10, 7, i as f64)).collect();
    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![7],
        epoch_offset_ns: 0,
        rate_unit_scale: 8.0,
        stride: 3,
    })
    .unwrap();
    let flow = extractor.extract(samples).unwrap().flows.remove(0);

    assert_eq!(flow.elapsed_ns, vec![0, 30, 60, 90]);
    assert_eq!(flow.throughput, vec![0.0, 3.0, 6.0, 9.0]);
}

#[test]
fn test_elapsed_time_is_exact_for_any_offset() {
    for offset in [0i64, 1, 2_000_000_000, -7, 1_234_567_890_123] {
        let extractor = ThroughputExtractor::new(ThroughputOptions {
            flow_ids: vec![0],
            epoch_offset_ns: offset,
            ..ThroughputOptions::default()
        })
        .unwrap();
        for timestamp in [0i64, 2_000_000_100, 9_007_199_254_740_993] {
            assert_eq!(extractor.elapsed_ns(timestamp).unwrap(), timestamp - offset);
        }
    }
}

#[test]
fn test_elapsed_overflow_is_reported() {
    let extractor = ThroughputExtractor::new(ThroughputOptions {
        epoch_offset_ns: -1,
        ..ThroughputOptions::default()
    })
    .unwrap();
    assert!(extractor.elapsed_ns(i64::MAX).is_err());
}

#[test]
fn test_rate_uses_configured_scale() {
    let gbps = ThroughputExtractor::new(ThroughputOptions::default()).unwrap();
    assert!((gbps.rate(125_000.0) - 10.0).abs() < 1e-12);

    let mbps = ThroughputExtractor::new(ThroughputOptions {
        rate_unit_scale: 1e2,
        ..ThroughputOptions::default()
    })
    .unwrap();
    assert!((mbps.rate(125_000.0) - 10_000.0).abs() < 1e-9);
}

#[test]
fn test_extract_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_throughput_log(&temp_dir, &[0, 1, 2], 5);

    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![2, 0],
        ..ThroughputOptions::default()
    })
    .unwrap();
    let report = extractor.extract_file(&path).unwrap();

    assert_eq!(report.flow_ids(), vec![2, 0]);
    assert_eq!(report.matched_samples, 10);
    assert_eq!(report.ignored_samples, 5);

    let flow_two = report.flow(2).unwrap();
    assert_eq!(flow_two.elapsed_ns, vec![0, 1000, 2000, 3000, 4000]);
    // 3000 bytes * 8 / 1e5
    assert!((flow_two.throughput[0] - 0.24).abs() < 1e-12);
}

#[test]
fn test_unrequested_integer_flow_ids_are_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "other_flows.txt",
        &[
            "2000000100 0 1000",
            "2000000150 -1 10",
            "2000000200 1 500",
            "2000000300 5000000000 7",
        ],
    );

    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![0, 1],
        ..ThroughputOptions::default()
    })
    .unwrap();
    let report = extractor.extract_file(&path).unwrap();

    assert_eq!(report.flow_ids(), vec![0, 1]);
    assert_eq!(report.flow(0).unwrap().len(), 1);
    assert_eq!(report.flow(1).unwrap().len(), 1);
    assert_eq!(report.matched_samples, 2);
    assert_eq!(report.ignored_samples, 2);
}

#[test]
fn test_negative_flow_id_can_be_requested() {
    let samples = vec![sample(2_000_000_100, -1, 125_000.0), sample(2_000_000_200, 0, 1.0)];
    let extractor = ThroughputExtractor::new(ThroughputOptions {
        flow_ids: vec![-1],
        ..ThroughputOptions::default()
    })
    .unwrap();
    let report = extractor.extract(samples).unwrap();
    assert_eq!(report.flow(-1).unwrap().throughput, vec![10.0]);
}
