//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use netsim_log_analyser::analysis::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format a nanosecond duration with the largest fitting unit
pub fn format_ns(ns: i64) -> String {
    let abs = ns.unsigned_abs() as f64;
    let sign = if ns < 0 { "-" } else { "" };
    if abs >= 1e9 {
        format!("{}{:.3} s", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.3} ms", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.3} us", sign, abs / 1e3)
    } else {
        format!("{}{} ns", sign, abs)
    }
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::InvalidData(format!("JSON export failed: {}", e)))
}

/// Export rows as CSV with a header derived from the row type
pub fn export_csv<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InvalidData(format!("CSV export failed: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::InvalidData(format!("CSV export produced invalid UTF-8: {}", e)))
}
