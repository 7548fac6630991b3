//! Unit tests for the whitespace-delimited log reader
//!
//! Covers the two-tier tolerance policy: short lines are skipped silently,
//! unparseable numeric fields in qualifying lines abort the read.

use netsim_log_analyser::errors::AppError;
use netsim_log_analyser::reader::{LogReader, SecondToLastInteger, ThroughputTriple};
use tempfile::TempDir;

use crate::common::write_log;

#[test]
fn test_contributing_records_match_lines_with_two_or_more_fields() {
    let temp_dir = TempDir::new().unwrap();
    let lines = [
        "",
        "single",
        "a 1 b",
        "   ",
        "2 x",
        "p q r s 3 t",
        "\t4\tend",
        "lonely-again",
    ];
    let path = write_log(&temp_dir, "mixed.txt", &lines);

    let qualifying = lines
        .iter()
        .filter(|l| l.split_whitespace().count() >= 2)
        .count();
    let values = LogReader::read_records(&path, SecondToLastInteger).unwrap();

    assert_eq!(values.len(), qualifying);
    assert_eq!(values, vec![1, 2, 3, 4]);
}

#[test]
fn test_throughput_lines_need_exactly_three_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "throughput.txt",
        &[
            "2000000100 0 1000",
            "2000000200 1",
            "2000000300 1 500 extra",
            "2000000400 1 500.5",
        ],
    );

    let samples = LogReader::read_records(&path, ThroughputTriple).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[1].bytes, 500.5);
}

#[test]
fn test_malformed_record_reports_line_number_and_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(
        &temp_dir,
        "bad.txt",
        &["2000000100 0 1000", "short", "2000000300 zero 10"],
    );

    match LogReader::read_records(&path, ThroughputTriple) {
        Err(AppError::MalformedRecord { line, content, reason }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "2000000300 zero 10");
            assert!(reason.contains("flow id"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let err = LogReader::read_records(&missing, SecondToLastInteger).unwrap_err();
    assert!(matches!(err, AppError::Io { .. }));
}

#[test]
fn test_lazy_iterator_counts_skipped_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_log(&temp_dir, "lazy.txt", &["x", "1 2 3", "y", "4 5 6"]);

    let mut iter = LogReader::records(&path, ThroughputTriple).unwrap();
    assert_eq!(iter.next().unwrap().unwrap().flow_id, 2);
    assert_eq!(iter.skipped_lines(), 1);
    assert_eq!(iter.next().unwrap().unwrap().flow_id, 5);
    assert!(iter.next().is_none());
    assert_eq!(iter.lines_read(), 4);
    assert_eq!(iter.skipped_lines(), 2);
}
