//! Box transit model
//!
//! The synthetic signal subtracted during prewhitening. The model sits at
//! 0 out of transit and at `-depth` inside the periodic transit window, so
//! subtracting it from the observed curve fills the dip while leaving the
//! baseline untouched.

use crate::types::TransitFit;
use transit_core::{Error, LightCurve, Result};

/// Evaluate the box model implied by `fit` on the timestamps of `lc`.
///
/// The model carries no uncertainties; subtraction keeps the observed
/// ones.
pub fn box_model(lc: &LightCurve, fit: &TransitFit) -> Result<LightCurve> {
    if !fit.period.is_finite() || fit.period <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "model period must be finite and positive, got {}",
            fit.period
        )));
    }
    if !fit.duration.is_finite() || fit.duration <= 0.0 || fit.duration >= fit.period {
        return Err(Error::InvalidParameter(format!(
            "model duration must lie in (0, period), got {}",
            fit.duration
        )));
    }
    if !fit.epoch.is_finite() || !fit.depth.is_finite() {
        return Err(Error::InvalidParameter(
            "model epoch and depth must be finite".to_string(),
        ));
    }

    let half_period = fit.period / 2.0;
    let half_duration = fit.duration / 2.0;
    let flux = lc
        .time()
        .iter()
        .map(|&t| {
            let dphase = (t - fit.epoch + half_period).rem_euclid(fit.period) - half_period;
            if dphase.abs() < half_duration {
                -fit.depth
            } else {
                0.0
            }
        })
        .collect();
    LightCurve::new(lc.time().to_vec(), flux)
}
