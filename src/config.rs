use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simulation warm-up boundary subtracted from raw timestamps (nanoseconds)
pub const DEFAULT_EPOCH_OFFSET_NS: i64 = 2_000_000_000;

/// Divisor turning `bytes * 8` into Gbps for the simulator's sampling interval
pub const DEFAULT_RATE_UNIT_SCALE: f64 = 1e5;

/// Application configuration loaded from netsim.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub distribution: DistributionConfig,
    pub throughput: ThroughputConfig,
    pub output: OutputConfig,
}

/// Histogram and percentile parameters for the distribution pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub bins: usize,
    /// Lower bound of an explicit histogram domain (both bounds must be set)
    pub range_min: Option<f64>,
    /// Upper bound of an explicit histogram domain (both bounds must be set)
    pub range_max: Option<f64>,
    /// Percentile to report, in [0, 100]
    pub percentile: f64,
}

/// Flow selection and unit conversion for the throughput pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputConfig {
    #[serde(default = "default_flow_ids")]
    pub flow_ids: Vec<i64>,
    /// Subtracted from every timestamp; elapsed time keeps nanosecond units
    pub epoch_offset_ns: i64,
    /// Divisor applied to `bytes * 8`; encodes the sampling interval of the byte counters
    pub rate_unit_scale: f64,
    /// Keep every k-th sample of each flow (1 keeps all)
    pub stride: usize,
    /// Axis label for the rate unit; derived from `rate_unit_scale` when unset
    #[serde(default)]
    pub rate_unit_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for chart artifacts when no explicit output path is given
    pub plot_dir: PathBuf,
}

fn default_flow_ids() -> Vec<i64> {
    vec![0, 1]
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            bins: 50,
            range_min: None,
            range_max: None,
            percentile: 99.0,
        }
    }
}

impl Default for ThroughputConfig {
    fn default() -> Self {
        Self {
            flow_ids: default_flow_ids(),
            epoch_offset_ns: DEFAULT_EPOCH_OFFSET_NS,
            rate_unit_scale: DEFAULT_RATE_UNIT_SCALE,
            stride: 1,
            rate_unit_label: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot_dir: PathBuf::from("./output_data/plots"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            distribution: DistributionConfig::default(),
            throughput: ThroughputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from netsim.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of ./netsim.toml when given
    ///
    /// Environment variables use the `NETSIM_` prefix with `__` between nested
    /// keys, e.g. `NETSIM_THROUGHPUT__STRIDE=10`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let distribution = DistributionConfig::default();
        let throughput = ThroughputConfig::default();
        let output = OutputConfig::default();

        let file_source = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name("netsim").required(false),
        };

        let config = Config::builder()
            .set_default("distribution.bins", distribution.bins as i64)?
            .set_default("distribution.percentile", distribution.percentile)?
            .set_default("throughput.epoch_offset_ns", throughput.epoch_offset_ns)?
            .set_default("throughput.rate_unit_scale", throughput.rate_unit_scale)?
            .set_default("throughput.stride", throughput.stride as i64)?
            .set_default(
                "output.plot_dir",
                output.plot_dir.to_string_lossy().to_string(),
            )?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("NETSIM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("throughput.flow_ids"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                // Passes the default `error` filter installed by the CLI
                tracing::error!("Ignoring invalid configuration, using built-in defaults: {}", e);
                Self::default()
            }
        }
    }
}
