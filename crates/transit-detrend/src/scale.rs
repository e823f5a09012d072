//! Robust location and scale estimates
//!
//! The cleaning stages rate deviations against the median absolute
//! deviation rather than the standard deviation, so a handful of deep
//! transits or cosmic-ray hits cannot inflate the clipping threshold.

use transit_core::{Error, Result};

/// Consistency factor making the MAD comparable to a standard deviation
/// for normally distributed data.
pub const MAD_CONSISTENCY: f64 = 1.4826;

/// Median of the given values.
///
/// The input is copied and sorted; non-finite values must be filtered out
/// by the caller.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::empty_input("median"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Median absolute deviation about the median.
pub fn mad(values: &[f64]) -> Result<f64> {
    let center = median(values)?;
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

/// MAD scaled by [`MAD_CONSISTENCY`], a robust stand-in for the standard
/// deviation.
pub fn standardized_mad(values: &[f64]) -> Result<f64> {
    Ok(MAD_CONSISTENCY * mad(values)?)
}
