//! Network Simulation Log Analyser
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod generate;
pub mod reader;
pub mod render;
pub mod types;
pub mod utils;
