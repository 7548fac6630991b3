//! Common Test Utilities
//!
//! Shared helpers for writing simulation log fixtures into temporary
//! directories so every test works on its own files.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `lines` (newline-terminated) to `name` inside `temp_dir`
pub fn write_log(temp_dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = temp_dir.path().join(name);
    let mut file = File::create(&path).expect("Failed to create log fixture");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write log line");
    }
    path
}

/// Flow completion time log in the simulator's format:
/// `<sip> <dip> <sport> <dport> <size> <start_ns> <fct_ns> <standalone_fct_ns>`
pub fn write_fct_log(temp_dir: &TempDir, fcts: &[i64]) -> PathBuf {
    let lines: Vec<String> = fcts
        .iter()
        .enumerate()
        .map(|(i, fct)| {
            format!(
                "0b000{:03x}01 0b000f0101 {} 100 1000000 2000000000 {} 80000",
                i,
                10000 + i,
                fct
            )
        })
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_log(temp_dir, "fct.txt", &refs)
}

/// Throughput log with `samples_per_flow` samples for each flow, interleaved
/// in time order; sample `i` of flow `f` carries `1000 * (f + 1) + i` bytes
pub fn write_throughput_log(temp_dir: &TempDir, flows: &[i64], samples_per_flow: usize) -> PathBuf {
    let mut lines = Vec::new();
    for i in 0..samples_per_flow {
        for &flow in flows {
            let timestamp = 2_000_000_000i64 + (i as i64) * 1000;
            let bytes = 1000 * (flow + 1) + i as i64;
            lines.push(format!("{} {} {}", timestamp, flow, bytes));
        }
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_log(temp_dir, "throughput.txt", &refs)
}
