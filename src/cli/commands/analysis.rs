use crate::analysis::{
    DistributionAnalyser, HistogramOptions, OutputFormat, ReportFormatter, ThroughputExtractor,
    ThroughputOptions,
};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::render::{ChartRenderer, PlotlyRenderer};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

// ===== Helper Functions =====

/// Parse output format string to OutputFormat enum
fn parse_format(format_str: &str) -> AppResult<OutputFormat> {
    format_str.parse::<OutputFormat>().map_err(AppError::Config)
}

/// Write output to file with safe directory creation
fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
    }
    std::fs::write(path, content).map_err(|e| AppError::io(path, e))?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Explicit output path, or `<plot_dir>/<stem>.<ext>` for artifact formats
fn resolve_output_path(
    output_path: &Option<PathBuf>,
    format: &OutputFormat,
    stem: &str,
    app_config: &AppConfig,
) -> Option<PathBuf> {
    match output_path {
        Some(path) => Some(path.clone()),
        None if format.is_artifact() => Some(
            app_config
                .output
                .plot_dir
                .join(format!("{}.{}", stem, format.extension())),
        ),
        None => None,
    }
}

// ===== Command Definitions =====

/// Analysis commands for simulation logs
#[derive(Args)]
pub struct AnalyseCommand {
    #[command(subcommand)]
    pub analysis_type: AnalysisCommands,
}

impl AnalyseCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        run_analysis(&self.analysis_type, app_config)
    }
}

/// Analysis command types
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Distribution of the second-to-last field (e.g. flow completion times)
    Distribution {
        /// Log file to analyse
        input: PathBuf,

        /// Number of equal-width histogram bins (overrides config)
        #[arg(long)]
        bins: Option<usize>,

        /// Histogram domain lower bound; applies only together with --range-max
        #[arg(long, allow_hyphen_values = true)]
        range_min: Option<f64>,

        /// Histogram domain upper bound; applies only together with --range-min
        #[arg(long, allow_hyphen_values = true)]
        range_max: Option<f64>,

        /// Percentile to report, 0-100 (overrides config)
        #[arg(long)]
        percentile: Option<f64>,

        /// Output format (console, json, plotly or csv)
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (defaults to the plot directory for non-console formats)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Per-flow throughput over time from a `<time> <flow> <bytes>` log
    Throughput {
        /// Log file to analyse
        input: PathBuf,

        /// Flow ids to plot, comma separated (overrides config)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        flow_ids: Option<Vec<i64>>,

        /// Nanoseconds subtracted from every timestamp (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        epoch_offset_ns: Option<i64>,

        /// Divisor applied to bytes * 8; 1e5 yields Gbps for the simulator's sampling interval
        #[arg(long)]
        rate_unit_scale: Option<f64>,

        /// Keep every k-th sample of each flow (overrides config)
        #[arg(long)]
        stride: Option<usize>,

        /// Chart axis unit, e.g. "Gbps" (derived from the rate scale when unset)
        #[arg(long)]
        rate_unit_label: Option<String>,

        /// Output format (console, json, plotly or csv)
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (defaults to the plot directory for non-console formats)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Merge CLI overrides onto the configured histogram parameters
pub fn distribution_options(
    app_config: &AppConfig,
    bins: Option<usize>,
    range_min: Option<f64>,
    range_max: Option<f64>,
    percentile: Option<f64>,
) -> HistogramOptions {
    let config = &app_config.distribution;
    HistogramOptions::new(
        bins.unwrap_or(config.bins),
        range_min.or(config.range_min),
        range_max.or(config.range_max),
        percentile.unwrap_or(config.percentile),
    )
}

/// Merge CLI overrides onto the configured throughput parameters
pub fn throughput_options(
    app_config: &AppConfig,
    flow_ids: &Option<Vec<i64>>,
    epoch_offset_ns: Option<i64>,
    rate_unit_scale: Option<f64>,
    stride: Option<usize>,
) -> ThroughputOptions {
    let mut options = ThroughputOptions::from(&app_config.throughput);
    if let Some(ids) = flow_ids {
        options.flow_ids = ids.clone();
    }
    if let Some(offset) = epoch_offset_ns {
        options.epoch_offset_ns = offset;
    }
    if let Some(scale) = rate_unit_scale {
        options.rate_unit_scale = scale;
    }
    if let Some(k) = stride {
        options.stride = k;
    }
    options
}

/// Chart renderer with the throughput unit label from CLI or config
pub fn chart_renderer(app_config: &AppConfig, rate_unit_label: &Option<String>) -> PlotlyRenderer {
    PlotlyRenderer {
        rate_unit_label: rate_unit_label
            .clone()
            .or_else(|| app_config.throughput.rate_unit_label.clone()),
        ..PlotlyRenderer::default()
    }
}

fn run_analysis(command: &AnalysisCommands, app_config: &AppConfig) -> AppResult<()> {

    match command {
        AnalysisCommands::Distribution {
            input,
            bins,
            range_min,
            range_max,
            percentile,
            format,
            output,
        } => {
            let format = parse_format(format)?;
            let options =
                distribution_options(app_config, *bins, *range_min, *range_max, *percentile);
            info!("Distribution analysis of {} ({:?})", input.display(), options);

            let renderer = chart_renderer(app_config, &None);
            let report = DistributionAnalyser::analyse_file(input, &options)?;
            let destination = resolve_output_path(output, &format, "fct_histogram", app_config);

            match (&format, destination) {
                (OutputFormat::Plotly, Some(path)) => {
                    // Summary still goes to the terminal alongside the chart
                    print!(
                        "{}",
                        ReportFormatter::format_distribution(&report, &OutputFormat::Console)?
                    );
                    renderer.render_histogram(&report, &path)?;
                    println!("Histogram chart written to: {}", path.display());
                }
                (_, Some(path)) => {
                    let content = ReportFormatter::format_distribution(&report, &format)?;
                    write_output_to_file(&path, &content, "Distribution report")?;
                }
                (_, None) => {
                    print!("{}", ReportFormatter::format_distribution(&report, &format)?);
                }
            }
            Ok(())
        }

        AnalysisCommands::Throughput {
            input,
            flow_ids,
            epoch_offset_ns,
            rate_unit_scale,
            stride,
            rate_unit_label,
            format,
            output,
        } => {
            let format = parse_format(format)?;
            let options = throughput_options(
                app_config,
                flow_ids,
                *epoch_offset_ns,
                *rate_unit_scale,
                *stride,
            );
            info!("Throughput extraction from {} ({:?})", input.display(), options);

            let renderer = chart_renderer(app_config, rate_unit_label);
            let report = ThroughputExtractor::new(options)?.extract_file(input)?;
            let destination = resolve_output_path(output, &format, "throughput", app_config);

            match (&format, destination) {
                (OutputFormat::Plotly, Some(path)) => {
                    renderer.render_throughput(&report, &path)?;
                    println!("Throughput chart written to: {}", path.display());
                }
                (_, Some(path)) => {
                    let content = ReportFormatter::format_throughput(&report, &format)?;
                    write_output_to_file(&path, &content, "Throughput report")?;
                }
                (_, None) => {
                    print!("{}", ReportFormatter::format_throughput(&report, &format)?);
                }
            }
            Ok(())
        }
    }
}
