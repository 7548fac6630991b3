//! Whitespace-delimited simulation log reader
//!
//! Lines are split on runs of whitespace and handed to a [`FieldExtractor`].
//! Two tolerance tiers apply:
//! - lines whose field count does not qualify are skipped silently
//!   (interleaved or truncated writes from the simulator)
//! - qualifying lines with unparseable numeric fields abort the read with
//!   [`AppError::MalformedRecord`], since the log format itself is wrong

pub mod extractors;

pub use extractors::{SecondToLastInteger, ThroughputSample, ThroughputTriple};

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Field count a line must have before conversion is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCount {
    AtLeast(usize),
    Exactly(usize),
}

impl FieldCount {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            FieldCount::AtLeast(n) => count >= n,
            FieldCount::Exactly(n) => count == n,
        }
    }
}

/// Extraction rule turning the fields of one qualifying line into a record
pub trait FieldExtractor {
    type Record;

    fn field_count(&self) -> FieldCount;

    /// Convert fields to a record; the error string explains the failed conversion
    fn extract(&self, fields: &[&str]) -> Result<Self::Record, String>;
}

/// Entry point for reading log files with a given extractor
pub struct LogReader;

impl LogReader {
    /// Open `path` and return a lazy iterator over its qualifying records
    ///
    /// Every call reopens the file, so the sequence can always be restarted.
    pub fn records<E: FieldExtractor>(path: &Path, extractor: E) -> AppResult<RecordIter<E>> {
        let file = File::open(path).map_err(|e| AppError::io(path, e))?;
        Ok(RecordIter {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            extractor,
            line_number: 0,
            skipped: 0,
            failed: false,
        })
    }

    /// Read every qualifying record of `path` into memory
    pub fn read_records<E: FieldExtractor>(path: &Path, extractor: E) -> AppResult<Vec<E::Record>> {
        let mut iter = Self::records(path, extractor)?;
        let records = iter.by_ref().collect::<AppResult<Vec<_>>>()?;

        info!(
            "Read {} records from {} ({} lines, {} skipped)",
            records.len(),
            path.display(),
            iter.lines_read(),
            iter.skipped_lines()
        );
        Ok(records)
    }
}

/// Lazy record sequence over one open log file
pub struct RecordIter<E: FieldExtractor> {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    extractor: E,
    line_number: usize,
    skipped: usize,
    failed: bool,
}

impl<E: FieldExtractor> RecordIter<E> {
    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Number of lines skipped by the field-count filter so far
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

impl<E: FieldExtractor> Iterator for RecordIter<E> {
    type Item = AppResult<E::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        // Errors are fatal for the whole read
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(AppError::io(&self.path, e)));
                }
            };
            self.line_number += 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if !self.extractor.field_count().accepts(fields.len()) {
                self.skipped += 1;
                debug!(
                    "Skipping line {} with {} fields",
                    self.line_number,
                    fields.len()
                );
                continue;
            }

            return Some(match self.extractor.extract(&fields) {
                Ok(record) => Ok(record),
                Err(reason) => {
                    self.failed = true;
                    Err(AppError::MalformedRecord {
                        line: self.line_number,
                        content: line.clone(),
                        reason,
                    })
                }
            });
        }
    }
}
