//! Sigma clipping on a robust scale
//!
//! Deviations are measured against the median in units of the
//! standardized MAD. Non-finite samples (gaps) are dropped
//! unconditionally; everything farther than `sigma` scales from the
//! median goes with them.

use crate::scale::{median, standardized_mad};
use crate::traits::{CleaningStageProperties, OutlierFilter};
use transit_core::{Error, LightCurve, Result};

/// Default clipping threshold, in robust sigmas.
pub const DEFAULT_SIGMA: f64 = 5.0;

/// Robust sigma-clipping outlier filter.
///
/// When the scale estimate collapses to zero (constant flux), nothing can
/// be rated as deviant and all finite samples survive.
#[derive(Debug, Clone, Copy)]
pub struct SigmaClip {
    sigma: f64,
}

impl SigmaClip {
    /// Create a filter clipping at `sigma` robust standard deviations.
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "clipping threshold must be finite and positive, got {sigma}"
            )));
        }
        Ok(Self { sigma })
    }

    /// The configured threshold.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for SigmaClip {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl CleaningStageProperties for SigmaClip {
    fn name(&self) -> &'static str {
        "sigma clip"
    }

    fn is_robust(&self) -> bool {
        true
    }
}

impl OutlierFilter for SigmaClip {
    fn clean(&self, lc: &LightCurve) -> Result<LightCurve> {
        let finite: Vec<usize> = (0..lc.len())
            .filter(|&i| lc.flux()[i].is_finite())
            .collect();
        if finite.is_empty() {
            // Leave the empty-signal failure to the next stage, which
            // knows its own sample-size requirement
            return lc.select(&finite);
        }

        let values: Vec<f64> = finite.iter().map(|&i| lc.flux()[i]).collect();
        let center = median(&values)?;
        let scale = standardized_mad(&values)?;
        if scale == 0.0 {
            return lc.select(&finite);
        }

        let threshold = self.sigma * scale;
        let kept: Vec<usize> = finite
            .into_iter()
            .filter(|&i| (lc.flux()[i] - center).abs() <= threshold)
            .collect();
        lc.select(&kept)
    }
}
