//! Incast flow list generator
//!
//! Every server except the last sends one flow to the last server. Output:
//! line 1 is the flow count, then one
//! `<src> <dst> <priority_group> <dst_port> <max_packets> <start_time>` line per flow.

use crate::errors::{AppError, AppResult};
use std::io::Write;

/// Parameters shared by every generated flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowListGenerator {
    pub servers: u32,
    pub priority_group: u32,
    pub dst_port: u16,
    pub max_packets: u64,
    /// Flow start time in seconds
    pub start_time: f64,
}

impl FlowListGenerator {
    pub fn new(servers: u32) -> AppResult<Self> {
        if servers < 2 {
            return Err(AppError::Config(format!(
                "Incast flow list needs at least 2 servers, got {}",
                servers
            )));
        }
        Ok(Self {
            servers,
            priority_group: 3,
            dst_port: 5000,
            max_packets: 100_000,
            start_time: 0.1,
        })
    }

    /// The receiving server (the last one)
    pub fn destination(&self) -> u32 {
        self.servers - 1
    }

    pub fn flow_count(&self) -> u32 {
        self.servers - 1
    }

    /// Write the flow file, returning the number of flows written
    pub fn write<W: Write>(&self, out: &mut W) -> AppResult<u32> {
        let dst = self.destination();
        writeln!(out, "{}", self.flow_count())?;
        for src in (0..self.servers).filter(|&s| s != dst) {
            writeln!(
                out,
                "{} {} {} {} {} {}",
                src, dst, self.priority_group, self.dst_port, self.max_packets, self.start_time
            )?;
        }
        Ok(self.flow_count())
    }
}
