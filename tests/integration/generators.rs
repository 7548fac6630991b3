//! Integration tests for the simulator input generators
//!
//! Files are written through `write_to_file` and parsed back line by line.

use netsim_log_analyser::generate::{
    self, FatTreeDciGenerator, FlowListGenerator, TraceGenerator,
};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_dc_topology_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/topology.txt");

    let generator = FatTreeDciGenerator::new(4, 1).unwrap();
    let summary = generate::write_to_file(&path, |w| generator.write(w)).unwrap();
    assert_eq!(summary.hosts, 16);
    assert_eq!(summary.switches, 20);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "36 20 48");

    let switch_ids: Vec<u64> = lines[1]
        .split_whitespace()
        .map(|id| id.parse().unwrap())
        .collect();
    assert_eq!(switch_ids, (16..36).collect::<Vec<u64>>());
    assert_eq!(lines.len(), 2 + 48);
}

#[test]
fn test_multi_dc_topology_links_are_unique_and_in_range() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("topology.txt");

    let generator = FatTreeDciGenerator::new(4, 2).unwrap();
    generate::write_to_file(&path, |w| generator.write(w)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("74 42 105"));
    lines.next();

    let mut seen = HashSet::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 5, "link line {:?}", line);
        let u: u64 = fields[0].parse().unwrap();
        let v: u64 = fields[1].parse().unwrap();
        assert!(u < 74 && v < 74);
        assert_ne!(u, v);
        assert!(seen.insert((u.min(v), u.max(v))), "duplicate link {:?}", line);
    }
    assert_eq!(seen.len(), 105);
}

#[test]
fn test_odd_arity_is_rejected() {
    assert!(FatTreeDciGenerator::new(3, 1).is_err());
}

#[test]
fn test_incast_flow_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flow.txt");

    let generator = FlowListGenerator::new(4).unwrap();
    let count = generate::write_to_file(&path, |w| generator.write(w)).unwrap();
    assert_eq!(count, 3);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "3");
    assert_eq!(lines[1], "0 3 3 5000 100000 0.1");
    assert_eq!(lines.len(), 4);
    assert!(lines[1..].iter().all(|l| l.split_whitespace().nth(1) == Some("3")));
}

#[test]
fn test_trace_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trace.txt");

    let generator = TraceGenerator::new(3).unwrap();
    generate::write_to_file(&path, |w| generator.write(w)).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "3\n0 1 2\n");
}
