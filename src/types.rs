//! Network Simulation Log Analyser - Shared types
//!
//! - `visualisation`: Plotly chart types consumed by the renderer

pub mod visualisation;
