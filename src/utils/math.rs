//! Mathematical utility functions for statistical analysis
//!
//! Percentage and percentile helpers shared by the analysis and report modules.

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use netsim_log_analyser::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Percentile of already-sorted data using linear interpolation between ranks
///
/// rank = p / 100 * (n - 1); the result interpolates between
/// `sorted[floor(rank)]` and `sorted[ceil(rank)]`. Returns `None` for empty
/// input or `p` outside [0, 100].
///
/// # Examples
/// ```
/// use netsim_log_analyser::utils::math::percentile_linear;
///
/// let data: Vec<f64> = (1..=100).map(f64::from).collect();
/// let p99 = percentile_linear(&data, 99.0).unwrap();
/// assert!((p99 - 99.01).abs() < 1e-9);
/// ```
pub fn percentile_linear(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = rank.ceil() as usize;
    let lower = sorted[lower_idx];
    let upper = sorted[upper_idx];

    Some(lower + (rank - rank.floor()) * (upper - lower))
}
