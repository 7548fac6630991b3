use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Network Simulation Log Analyser
#[derive(Parser)]
#[command(name = "netsim-log-analyser")]
#[command(about = "Flow completion time distributions and per-flow throughput from network simulation logs")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./netsim.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a simulation log
    Analyse(commands::analysis::AnalyseCommand),
    /// Generate simulator input files (topology, flows, trace)
    Generate(commands::generate::GenerateCommand),
}

/// Load configuration: an explicit file must exist, otherwise fall back to defaults
pub fn load_config(path: Option<&std::path::Path>) -> AppResult<AppConfig> {
    match path {
        Some(p) => Ok(AppConfig::load_from(Some(p))?),
        None => Ok(AppConfig::get_defaults()),
    }
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let app_config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyse(command) => command.run(&app_config),
        Commands::Generate(command) => command.run(),
    }
}
