//! Moving-median flattening
//!
//! Long-timescale instrumental drifts and stellar variability sit under
//! the transit signal as a slowly varying trend. Dividing by a centered
//! moving-median estimate of that trend leaves relative flux near 1 while
//! a narrow transit dip, much shorter than the window, passes through
//! almost untouched.

use crate::scale::median;
use crate::traits::{CleaningStageProperties, Detrender};
use transit_core::{Error, LightCurve, Result};

/// Parameters for moving-median flattening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParameters {
    /// Smoothing window length in samples; must be odd so the window is
    /// centered
    pub window_length: usize,
}

impl Default for FlattenParameters {
    fn default() -> Self {
        Self { window_length: 901 }
    }
}

/// Centered moving-median detrender.
///
/// Windows are truncated at the edges of the series. Samples whose window
/// contains no finite flux come out as gaps (NaN) and are left for the
/// outlier filter to drop.
#[derive(Debug, Clone)]
pub struct MovingMedianFlatten {
    params: FlattenParameters,
}

impl MovingMedianFlatten {
    /// Create a flattener with the given window length.
    ///
    /// The window must be odd and at least 3 samples wide.
    pub fn new(window_length: usize) -> Result<Self> {
        if window_length < 3 {
            return Err(Error::InvalidParameter(format!(
                "smoothing window must span at least 3 samples, got {window_length}"
            )));
        }
        if window_length % 2 == 0 {
            return Err(Error::InvalidParameter(format!(
                "smoothing window must be odd so it can be centered, got {window_length}"
            )));
        }
        Ok(Self {
            params: FlattenParameters { window_length },
        })
    }

    /// The configured parameters.
    pub fn parameters(&self) -> &FlattenParameters {
        &self.params
    }

    fn trend_at(&self, flux: &[f64], index: usize) -> Result<f64> {
        let half = self.params.window_length / 2;
        let lo = index.saturating_sub(half);
        let hi = (index + half + 1).min(flux.len());
        let window: Vec<f64> = flux[lo..hi].iter().copied().filter(|f| f.is_finite()).collect();
        if window.is_empty() {
            // Nothing to estimate from; the sample becomes a gap
            return Ok(f64::NAN);
        }
        let trend = median(&window)?;
        if trend == 0.0 {
            return Err(Error::Computation(
                "trend estimate vanished inside smoothing window".to_string(),
            ));
        }
        Ok(trend)
    }
}

impl CleaningStageProperties for MovingMedianFlatten {
    fn name(&self) -> &'static str {
        "moving-median flatten"
    }

    fn is_robust(&self) -> bool {
        true
    }
}

impl Detrender for MovingMedianFlatten {
    fn detrend(&self, lc: &LightCurve) -> Result<LightCurve> {
        if lc.is_empty() {
            return Err(Error::empty_input("flatten"));
        }
        let flux = lc.flux();
        let mut relative = Vec::with_capacity(flux.len());
        let mut trends = Vec::with_capacity(flux.len());
        for i in 0..flux.len() {
            let trend = self.trend_at(flux, i)?;
            trends.push(trend);
            relative.push(flux[i] / trend);
        }
        let out = lc.with_flux(relative)?;
        match lc.flux_err() {
            Some(errs) => {
                let scaled = errs
                    .iter()
                    .zip(&trends)
                    .map(|(e, t)| e / t.abs())
                    .collect();
                LightCurve::with_errors(out.time().to_vec(), out.flux().to_vec(), scaled)
                    // Trend gaps turn uncertainties non-finite; drop the column
                    .or_else(|_| LightCurve::new(out.time().to_vec(), out.flux().to_vec()))
            }
            None => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear_trend_curve(n: usize) -> LightCurve {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let flux: Vec<f64> = (0..n).map(|i| 100.0 + 0.05 * i as f64).collect();
        LightCurve::new(time, flux).unwrap()
    }

    #[test]
    fn test_properties() {
        let flattener = MovingMedianFlatten::new(901).unwrap();
        assert_eq!(flattener.name(), "moving-median flatten");
        assert!(flattener.is_robust());
        assert_eq!(flattener.parameters().window_length, 901);
    }

    #[test]
    fn test_rejects_even_or_tiny_windows() {
        assert!(MovingMedianFlatten::new(900).is_err());
        assert!(MovingMedianFlatten::new(2).is_err());
        assert!(MovingMedianFlatten::new(1).is_err());
        assert!(MovingMedianFlatten::new(901).is_ok());
    }

    #[test]
    fn test_removes_linear_trend() {
        let lc = linear_trend_curve(500);
        let flattener = MovingMedianFlatten::new(51).unwrap();
        let flat = flattener.detrend(&lc).unwrap();

        // Away from the edges the relative flux sits on 1
        for &f in &flat.flux()[50..450] {
            assert_relative_eq!(f, 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_preserves_narrow_dip() {
        let n = 400;
        let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let mut flux: Vec<f64> = (0..n).map(|i| 50.0 + 0.01 * i as f64).collect();
        // A 5-sample dip, far narrower than the 101-sample window
        for f in flux.iter_mut().skip(200).take(5) {
            *f *= 0.98;
        }
        let lc = LightCurve::new(time, flux).unwrap();

        let flat = MovingMedianFlatten::new(101)
            .unwrap()
            .detrend(&lc)
            .unwrap();
        assert_relative_eq!(flat.flux()[202], 0.98, epsilon = 1e-3);
        assert_relative_eq!(flat.flux()[100], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_gaps_stay_gaps() {
        let time: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let mut flux = vec![10.0; 50];
        flux[25] = f64::NAN;
        let lc = LightCurve::new(time, flux).unwrap();

        let flat = MovingMedianFlatten::new(11).unwrap().detrend(&lc).unwrap();
        assert!(flat.flux()[25].is_nan());
        assert_relative_eq!(flat.flux()[10], 1.0);
    }

    #[test]
    fn test_empty_curve_is_an_error() {
        let lc = LightCurve::new(vec![], vec![]).unwrap();
        assert!(MovingMedianFlatten::new(11).unwrap().detrend(&lc).is_err());
    }
}
