//! Unit tests for the log reader, analysers and configuration

pub mod config;
pub mod reader;
pub mod throughput;
