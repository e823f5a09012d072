//! Pipeline configuration

use serde::{Deserialize, Serialize};
use transit_core::{Error, Result, DEFAULT_GRID_POINTS};
use transit_detrend::DEFAULT_SIGMA;

/// Configuration for one end-to-end target search.
///
/// Defaults mirror a typical short-period survey search: periods between
/// 1 and 20 time units on a 10,000-point grid, a 901-sample smoothing
/// window, 500 phase bins, and two prewhitening iterations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate period range (min, max)
    pub period_range: (f64, f64),
    /// Number of points on the period grid
    pub grid_points: usize,
    /// Smoothing window for the moving-median flatten; positive odd
    pub window_length: usize,
    /// Phase-bin resolution of the periodogram fold
    pub resolution: usize,
    /// Number of detect-and-subtract iterations to run
    pub max_signals: usize,
    /// Outlier clipping threshold, in robust sigmas
    pub clip_sigma: f64,
    /// Half-width of the folded views kept for display, in time units
    pub fold_half_width: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            period_range: (1.0, 20.0),
            grid_points: DEFAULT_GRID_POINTS,
            window_length: 901,
            resolution: 500,
            max_signals: 2,
            clip_sigma: DEFAULT_SIGMA,
            fold_half_width: 1.0,
        }
    }
}

impl SearchConfig {
    /// Check the whole parameter surface before any work happens.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.period_range;
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || hi <= lo {
            return Err(Error::InvalidParameter(format!(
                "period range must satisfy 0 < min < max, got ({lo}, {hi})"
            )));
        }
        if self.grid_points < 2 {
            return Err(Error::InvalidParameter(format!(
                "period grid needs at least 2 points, got {}",
                self.grid_points
            )));
        }
        if self.window_length < 3 || self.window_length % 2 == 0 {
            return Err(Error::InvalidParameter(format!(
                "smoothing window must be odd and at least 3, got {}",
                self.window_length
            )));
        }
        if self.resolution < 10 {
            return Err(Error::InvalidParameter(format!(
                "resolution must be at least 10 phase bins, got {}",
                self.resolution
            )));
        }
        if !self.clip_sigma.is_finite() || self.clip_sigma <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "clipping threshold must be finite and positive, got {}",
                self.clip_sigma
            )));
        }
        if !self.fold_half_width.is_finite() || self.fold_half_width <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "fold half-width must be finite and positive, got {}",
                self.fold_half_width
            )));
        }
        Ok(())
    }
}
