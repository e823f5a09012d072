//! Phase folding
//!
//! Folding wraps a light curve around a trial period so that every transit
//! lines up at phase zero. The folded view is a derived projection used for
//! inspection and display, it never feeds back into the search loop state.

use crate::error::{Error, Result};
use crate::lightcurve::LightCurve;

/// A phase-wrapped view of a light curve.
///
/// Phase is expressed in time units, centered on the epoch and wrapped into
/// `[-period/2, period/2)`, matching the x-axis of a folded transit plot.
/// Samples are ordered by phase.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedCurve {
    phase: Vec<f64>,
    flux: Vec<f64>,
}

impl FoldedCurve {
    /// Phase offsets from the epoch, ascending.
    pub fn phase(&self) -> &[f64] {
        &self.phase
    }

    /// Flux values reordered to match [`phase`](Self::phase).
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Number of folded samples.
    pub fn len(&self) -> usize {
        self.phase.len()
    }

    /// Whether the view holds no samples.
    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }

    /// Restrict the view to `|phase| <= half_width`, the folded equivalent
    /// of an x-axis limit on a transit plot.
    pub fn clipped(&self, half_width: f64) -> FoldedCurve {
        let (phase, flux) = self
            .phase
            .iter()
            .zip(&self.flux)
            .filter(|(p, _)| p.abs() <= half_width)
            .map(|(&p, &f)| (p, f))
            .unzip();
        FoldedCurve { phase, flux }
    }
}

impl LightCurve {
    /// Fold the curve about `period`, centering transits of the given
    /// `epoch` at phase zero.
    pub fn fold(&self, period: f64, epoch: f64) -> Result<FoldedCurve> {
        if !period.is_finite() || period <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "fold period must be finite and positive, got {period}"
            )));
        }
        if !epoch.is_finite() {
            return Err(Error::InvalidParameter(
                "fold epoch must be finite".to_string(),
            ));
        }
        let mut samples: Vec<(f64, f64)> = self
            .time()
            .iter()
            .zip(self.flux())
            .map(|(&t, &f)| {
                let phase = (t - epoch + period / 2.0).rem_euclid(period) - period / 2.0;
                (phase, f)
            })
            .collect();
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (phase, flux) = samples.into_iter().unzip();
        Ok(FoldedCurve { phase, flux })
    }
}
