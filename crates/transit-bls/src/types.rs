//! Types produced by a periodogram search

use serde::{Deserialize, Serialize};
use std::fmt;
use transit_core::{Detection, Error, Result};

/// The best-fit box transit found by a periodogram search.
///
/// Carries the detection triple (period, epoch, duration) plus the fitted
/// depth needed to build the subtraction model and the peak power the fit
/// scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitFit {
    /// Orbital period at maximum power
    pub period: f64,
    /// Mid-transit time of the first transit after the series start
    pub epoch: f64,
    /// Transit duration, in time units
    pub duration: f64,
    /// Fractional depth of the dip (positive for a dip)
    pub depth: f64,
    /// Peak periodogram power of this fit
    pub power: f64,
}

impl fmt::Display for TransitFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitFit {{ period: {:.6}, epoch: {:.6}, duration: {:.6}, depth: {:.6}, power: {:.3e} }}",
            self.period, self.epoch, self.duration, self.depth, self.power
        )
    }
}

impl From<TransitFit> for Detection {
    fn from(fit: TransitFit) -> Self {
        Detection::new(fit.period, fit.epoch, fit.duration)
    }
}

/// Power as a function of candidate period.
#[derive(Debug, Clone, PartialEq)]
pub struct Periodogram {
    periods: Vec<f64>,
    power: Vec<f64>,
}

impl Periodogram {
    /// Create a periodogram from matching period and power columns.
    pub fn new(periods: Vec<f64>, power: Vec<f64>) -> Result<Self> {
        if periods.len() != power.len() {
            return Err(Error::size_mismatch(
                periods.len(),
                power.len(),
                "power column",
            ));
        }
        Ok(Self { periods, power })
    }

    /// Candidate periods, ascending.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Power score per candidate period.
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    /// Number of scanned periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the periodogram is empty.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Index of the strongest peak; the earliest wins on ties.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.power.iter().enumerate() {
            if !p.is_finite() {
                continue;
            }
            match best {
                Some((_, bp)) if p <= bp => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Largest finite power value.
    pub fn max_power(&self) -> Option<f64> {
        self.argmax().map(|i| self.power[i])
    }

    /// Period of the strongest peak.
    pub fn period_at_max_power(&self) -> Option<f64> {
        self.argmax().map(|i| self.periods[i])
    }
}

/// Everything a periodogram search returns: the best fit plus the full
/// power curve for inspection.
#[derive(Debug, Clone)]
pub struct SearchResult {
    best: TransitFit,
    periodogram: Periodogram,
}

impl SearchResult {
    /// Assemble a search result.
    pub fn new(best: TransitFit, periodogram: Periodogram) -> Self {
        Self { best, periodogram }
    }

    /// The strongest fit across the whole grid.
    pub fn best(&self) -> &TransitFit {
        &self.best
    }

    /// The full power curve.
    pub fn periodogram(&self) -> &Periodogram {
        &self.periodogram
    }

    /// Split into fit and power curve.
    pub fn into_parts(self) -> (TransitFit, Periodogram) {
        (self.best, self.periodogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodogram_argmax_first_wins() {
        let pg = Periodogram::new(vec![1.0, 2.0, 3.0, 4.0], vec![0.5, 2.0, 2.0, 1.0]).unwrap();
        assert_eq!(pg.argmax(), Some(1));
        assert_eq!(pg.period_at_max_power(), Some(2.0));
        assert_eq!(pg.max_power(), Some(2.0));
    }

    #[test]
    fn test_periodogram_skips_non_finite() {
        let pg = Periodogram::new(vec![1.0, 2.0, 3.0], vec![f64::NAN, 1.0, f64::NAN]).unwrap();
        assert_eq!(pg.argmax(), Some(1));
    }

    #[test]
    fn test_periodogram_all_non_finite() {
        let pg = Periodogram::new(vec![1.0, 2.0], vec![f64::NAN, f64::INFINITY]).unwrap();
        assert_eq!(pg.argmax(), None);
    }

    #[test]
    fn test_periodogram_length_mismatch() {
        assert!(Periodogram::new(vec![1.0, 2.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_fit_to_detection() {
        let fit = TransitFit {
            period: 3.0,
            epoch: 1.0,
            duration: 0.2,
            depth: 0.01,
            power: 1e-5,
        };
        let detection: Detection = fit.into();
        assert_eq!(detection.period, 3.0);
        assert_eq!(detection.epoch, 1.0);
        assert_eq!(detection.duration, 0.2);
    }
}
