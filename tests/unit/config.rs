//! Unit tests for configuration layering (defaults, file, environment)

use netsim_log_analyser::config::AppConfig;
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    env::set_var("NETSIM_THROUGHPUT__STRIDE", "25");
    env::set_var("NETSIM_DISTRIBUTION__BINS", "5000");

    let result = AppConfig::load();

    env::remove_var("NETSIM_THROUGHPUT__STRIDE");
    env::remove_var("NETSIM_DISTRIBUTION__BINS");

    let config = result.unwrap();
    assert_eq!(config.throughput.stride, 25);
    assert_eq!(config.distribution.bins, 5000);
    assert_eq!(config.throughput.epoch_offset_ns, 2_000_000_000);
}

#[test]
#[serial]
fn test_get_defaults_never_fails() {
    let config = AppConfig::get_defaults();
    assert!(config.distribution.bins > 0);
    assert!(config.throughput.stride >= 1);
    assert!(config.throughput.rate_unit_scale > 0.0);
}
