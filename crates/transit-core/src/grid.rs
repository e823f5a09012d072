//! Trial period grids
//!
//! The periodogram scans an ordered, linearly spaced set of candidate
//! periods. The grid is built once per search call and shared by every
//! prewhitening iteration.

use crate::error::{Error, Result};

/// Default number of grid points for a period scan.
pub const DEFAULT_GRID_POINTS: usize = 10_000;

/// An ordered set of candidate periods, linearly spaced and bounded by the
/// configured range.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGrid {
    periods: Vec<f64>,
}

impl PeriodGrid {
    /// Build a linearly spaced grid of `points` periods spanning
    /// `[min_period, max_period]`, both endpoints included.
    pub fn linear(min_period: f64, max_period: f64, points: usize) -> Result<Self> {
        if !min_period.is_finite() || !max_period.is_finite() {
            return Err(Error::InvalidParameter(
                "period range must be finite".to_string(),
            ));
        }
        if min_period <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "minimum period must be positive, got {min_period}"
            )));
        }
        if max_period <= min_period {
            return Err(Error::InvalidParameter(format!(
                "period range is empty: ({min_period}, {max_period})"
            )));
        }
        if points < 2 {
            return Err(Error::InvalidParameter(format!(
                "period grid needs at least 2 points, got {points}"
            )));
        }
        let step = (max_period - min_period) / (points - 1) as f64;
        let periods = (0..points)
            .map(|i| min_period + step * i as f64)
            .collect();
        Ok(Self { periods })
    }

    /// Build a grid over `range` with the default cardinality.
    pub fn from_range(range: (f64, f64)) -> Result<Self> {
        Self::linear(range.0, range.1, DEFAULT_GRID_POINTS)
    }

    /// The candidate periods, ascending.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Number of candidate periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the grid is empty (never true for a constructed grid).
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Shortest candidate period.
    pub fn min_period(&self) -> f64 {
        self.periods[0]
    }

    /// Longest candidate period.
    pub fn max_period(&self) -> f64 {
        self.periods[self.periods.len() - 1]
    }
}
