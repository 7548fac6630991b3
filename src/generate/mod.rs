//! Generators for the network simulator's input files
//!
//! - `topology`: fat-tree with optional data-centre interconnect
//! - `flows`: incast flow list
//! - `trace`: node list for packet tracing

pub mod flows;
pub mod topology;
pub mod trace;

pub use flows::FlowListGenerator;
pub use topology::{FatTreeDciGenerator, TopologySummary};
pub use trace::TraceGenerator;

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create `path` (and its parent directories) and hand a buffered writer to `write_fn`
pub fn write_to_file<T, F>(path: &Path, write_fn: F) -> AppResult<T>
where
    F: FnOnce(&mut BufWriter<File>) -> AppResult<T>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
    }
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let result = write_fn(&mut writer)?;
    writer.flush().map_err(|e| AppError::io(path, e))?;
    Ok(result)
}
