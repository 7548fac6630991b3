//! Field extractors for the two log shapes produced by the simulator

use super::{FieldCount, FieldExtractor};
use serde::Serialize;

/// Integer in the second-to-last field (flow completion time logs)
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondToLastInteger;

impl FieldExtractor for SecondToLastInteger {
    type Record = i64;

    fn field_count(&self) -> FieldCount {
        FieldCount::AtLeast(2)
    }

    fn extract(&self, fields: &[&str]) -> Result<i64, String> {
        let raw = fields[fields.len() - 2];
        raw.parse::<i64>()
            .map_err(|e| format!("second-to-last field {:?} is not an integer: {}", raw, e))
    }
}

/// One sample of a flow's byte counter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputSample {
    pub timestamp_ns: i64,
    pub flow_id: i64,
    pub bytes: f64,
}

/// `<timestamp:int> <flow_id:int> <byte_count:float-or-int>` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ThroughputTriple;

impl FieldExtractor for ThroughputTriple {
    type Record = ThroughputSample;

    fn field_count(&self) -> FieldCount {
        FieldCount::Exactly(3)
    }

    fn extract(&self, fields: &[&str]) -> Result<ThroughputSample, String> {
        let timestamp_ns = fields[0]
            .parse::<i64>()
            .map_err(|e| format!("timestamp {:?} is not an integer: {}", fields[0], e))?;
        let flow_id = fields[1]
            .parse::<i64>()
            .map_err(|e| format!("flow id {:?} is not an integer: {}", fields[1], e))?;
        let bytes = fields[2]
            .parse::<f64>()
            .map_err(|e| format!("byte count {:?} is not a number: {}", fields[2], e))?;

        Ok(ThroughputSample {
            timestamp_ns,
            flow_id,
            bytes,
        })
    }
}
