//! Trace node list generator: line 1 is the node count, line 2 the node ids

use crate::errors::{AppError, AppResult};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceGenerator {
    pub nodes: u32,
}

impl TraceGenerator {
    pub fn new(nodes: u32) -> AppResult<Self> {
        if nodes == 0 {
            return Err(AppError::Config(
                "Trace needs at least one node".to_string(),
            ));
        }
        Ok(Self { nodes })
    }

    pub fn write<W: Write>(&self, out: &mut W) -> AppResult<u32> {
        writeln!(out, "{}", self.nodes)?;
        let ids: Vec<String> = (0..self.nodes).map(|id| id.to_string()).collect();
        writeln!(out, "{}", ids.join(" "))?;
        Ok(self.nodes)
    }
}
