//! The `LightCurve` sample container
//!
//! A light curve is an ordered sequence of (timestamp, brightness,
//! uncertainty) samples. Timestamps are strictly increasing and finite;
//! brightness values may still contain gaps (NaN) and outliers before the
//! cleaning stages run. All transformations produce a new curve, the
//! inputs are never mutated in place.

use crate::error::{Error, Result};

/// An ordered brightness-versus-time series.
///
/// Stored as parallel columns. Uncertainties are optional since many
/// photometry tables do not carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
    flux_err: Option<Vec<f64>>,
}

impl LightCurve {
    /// Create a light curve from time and flux columns.
    ///
    /// Timestamps must be finite and strictly increasing; flux values are
    /// accepted as-is (non-finite samples are legal until cleaning).
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Result<Self> {
        Self::build(time, flux, None)
    }

    /// Create a light curve with per-sample flux uncertainties.
    pub fn with_errors(time: Vec<f64>, flux: Vec<f64>, flux_err: Vec<f64>) -> Result<Self> {
        Self::build(time, flux, Some(flux_err))
    }

    fn build(time: Vec<f64>, flux: Vec<f64>, flux_err: Option<Vec<f64>>) -> Result<Self> {
        if time.len() != flux.len() {
            return Err(Error::size_mismatch(time.len(), flux.len(), "flux column"));
        }
        if let Some(errs) = &flux_err {
            if errs.len() != time.len() {
                return Err(Error::size_mismatch(
                    time.len(),
                    errs.len(),
                    "flux_err column",
                ));
            }
            if errs.iter().any(|&e| !e.is_finite() || e < 0.0) {
                return Err(Error::InvalidInput(
                    "flux uncertainties must be finite and non-negative".to_string(),
                ));
            }
        }
        if time.iter().any(|&t| !t.is_finite()) {
            return Err(Error::non_finite("time column"));
        }
        for i in 1..time.len() {
            if time[i] <= time[i - 1] {
                return Err(Error::nonmonotonic_time(i));
            }
        }
        Ok(Self {
            time,
            flux,
            flux_err,
        })
    }

    /// Timestamps, strictly increasing.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Brightness values, one per timestamp.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Per-sample uncertainties, when the source table carried them.
    pub fn flux_err(&self) -> Option<&[f64]> {
        self.flux_err.as_deref()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time covered by the curve (last minus first timestamp), 0 when
    /// fewer than two samples remain.
    pub fn span(&self) -> f64 {
        match (self.time.first(), self.time.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Mean of the finite flux values.
    pub fn mean_flux(&self) -> Result<f64> {
        let (sum, n) = self
            .flux
            .iter()
            .filter(|f| f.is_finite())
            .fold((0.0, 0usize), |(s, n), &f| (s + f, n + 1));
        if n == 0 {
            return Err(Error::empty_input("mean_flux"));
        }
        Ok(sum / n as f64)
    }

    /// Pointwise subtraction of a model evaluated on the same timestamps.
    ///
    /// The model must share this curve's exact time column; uncertainties
    /// of `self` are carried through unchanged (the model is treated as
    /// noise-free).
    pub fn subtract(&self, model: &LightCurve) -> Result<LightCurve> {
        if model.len() != self.len() {
            return Err(Error::size_mismatch(self.len(), model.len(), "model"));
        }
        if self.time != model.time {
            return Err(Error::InvalidInput(
                "model timestamps differ from observed timestamps".to_string(),
            ));
        }
        let flux = self
            .flux
            .iter()
            .zip(&model.flux)
            .map(|(o, m)| o - m)
            .collect();
        Ok(LightCurve {
            time: self.time.clone(),
            flux,
            flux_err: self.flux_err.clone(),
        })
    }

    /// Keep only the samples at the given (sorted, deduplicated) indices.
    ///
    /// Used by the cleaning stages; the index list must be increasing so
    /// the time invariant survives.
    pub fn select(&self, indices: &[usize]) -> Result<LightCurve> {
        if indices.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(
                "selection indices must be strictly increasing".to_string(),
            ));
        }
        if let Some(&last) = indices.last() {
            if last >= self.len() {
                return Err(Error::InvalidInput(format!(
                    "selection index {last} out of bounds for {} samples",
                    self.len()
                )));
            }
        }
        let time = indices.iter().map(|&i| self.time[i]).collect();
        let flux = indices.iter().map(|&i| self.flux[i]).collect();
        let flux_err = self
            .flux_err
            .as_ref()
            .map(|errs| indices.iter().map(|&i| errs[i]).collect());
        Ok(LightCurve {
            time,
            flux,
            flux_err,
        })
    }

    /// Replace the flux column, keeping timestamps and uncertainties.
    pub fn with_flux(&self, flux: Vec<f64>) -> Result<LightCurve> {
        if flux.len() != self.len() {
            return Err(Error::size_mismatch(self.len(), flux.len(), "flux column"));
        }
        Ok(LightCurve {
            time: self.time.clone(),
            flux,
            flux_err: self.flux_err.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> LightCurve {
        LightCurve::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn test_rejects_unsorted_time() {
        let result = LightCurve::new(vec![0.0, 2.0, 1.0], vec![1.0, 1.0, 1.0]);
        assert!(result.is_err());

        // Duplicates violate strict ordering too
        let result = LightCurve::new(vec![0.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_finite_time() {
        let result = LightCurve::new(vec![0.0, f64::NAN], vec![1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_non_finite_flux() {
        // Gaps in flux are legal before cleaning
        let lc = LightCurve::new(vec![0.0, 1.0], vec![1.0, f64::NAN]).unwrap();
        assert_eq!(lc.len(), 2);
    }

    #[test]
    fn test_mean_flux_skips_gaps() {
        let lc = LightCurve::new(vec![0.0, 1.0, 2.0], vec![1.0, f64::NAN, 3.0]).unwrap();
        assert_relative_eq!(lc.mean_flux().unwrap(), 2.0);
    }

    #[test]
    fn test_subtract_requires_matching_times() {
        let lc = curve();
        let model = LightCurve::new(vec![0.0, 1.0, 2.0, 3.5], vec![0.0; 4]).unwrap();
        assert!(lc.subtract(&model).is_err());

        let model = LightCurve::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.5; 4]).unwrap();
        let residual = lc.subtract(&model).unwrap();
        assert_relative_eq!(residual.flux()[0], 0.5);
        assert_relative_eq!(residual.flux()[3], 3.5);
        assert_eq!(residual.time(), lc.time());
    }

    #[test]
    fn test_select_preserves_columns() {
        let lc = LightCurve::with_errors(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![0.1, 0.2, 0.3, 0.4],
        )
        .unwrap();
        let picked = lc.select(&[0, 2]).unwrap();
        assert_eq!(picked.time(), &[0.0, 2.0]);
        assert_eq!(picked.flux(), &[1.0, 3.0]);
        assert_eq!(picked.flux_err().unwrap(), &[0.1, 0.3]);
    }

    #[test]
    fn test_select_rejects_unsorted_indices() {
        assert!(curve().select(&[2, 1]).is_err());
        assert!(curve().select(&[0, 9]).is_err());
    }

    #[test]
    fn test_empty_curve() {
        let lc = LightCurve::new(vec![], vec![]).unwrap();
        assert!(lc.is_empty());
        assert_eq!(lc.span(), 0.0);
        assert!(lc.mean_flux().is_err());
    }
}
