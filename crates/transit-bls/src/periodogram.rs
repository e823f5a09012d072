//! Box least squares periodogram
//!
//! For every candidate period the signal is folded, binned into a phase
//! histogram, and scanned with a circular sliding box over a grid of trial
//! durations. Each placement is scored with the signal-residue statistic
//!
//! ```text
//! SR = s^2 / (r (1 - r))
//! ```
//!
//! where `s` is the weighted in-box sum of mean-subtracted flux and `r`
//! the in-box weight fraction (uniform weights). The global maximum over
//! periods, phases and durations is the best fit; ties resolve to the
//! earliest candidate so repeated searches are deterministic.

use crate::traits::{PeriodSearch, PeriodSearchProperties};
use crate::types::{Periodogram, SearchResult, TransitFit};
use transit_core::{Error, LightCurve, PeriodGrid, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters for the BLS scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlsParameters {
    /// Number of phase bins per fold; the frequency-resolution factor of
    /// the scan
    pub resolution: usize,
    /// Trial durations as fractions of the candidate period
    pub duration_fractions: (f64, f64),
    /// Number of trial durations between the two fractions
    pub duration_steps: usize,
}

impl Default for BlsParameters {
    fn default() -> Self {
        Self {
            resolution: 500,
            duration_fractions: (0.01, 0.10),
            duration_steps: 10,
        }
    }
}

impl BlsParameters {
    fn validate(&self) -> Result<()> {
        if self.resolution < 10 {
            return Err(Error::InvalidParameter(format!(
                "resolution must be at least 10 phase bins, got {}",
                self.resolution
            )));
        }
        let (lo, hi) = self.duration_fractions;
        if !(lo.is_finite() && hi.is_finite()) || lo <= 0.0 || hi >= 0.5 || hi <= lo {
            return Err(Error::InvalidParameter(format!(
                "duration fractions must satisfy 0 < lo < hi < 0.5, got ({lo}, {hi})"
            )));
        }
        if self.duration_steps == 0 {
            return Err(Error::InvalidParameter(
                "duration grid needs at least one step".to_string(),
            ));
        }
        Ok(())
    }

    /// Box widths, in bins, implied by the duration grid. Deduplicated and
    /// ascending; widths that would cover the whole fold are dropped.
    fn box_widths(&self) -> Vec<usize> {
        let (lo, hi) = self.duration_fractions;
        let steps = self.duration_steps;
        let mut widths: Vec<usize> = (0..steps)
            .map(|j| {
                let q = if steps == 1 {
                    lo
                } else {
                    lo + (hi - lo) * j as f64 / (steps - 1) as f64
                };
                ((q * self.resolution as f64).round() as usize).max(1)
            })
            .filter(|&w| w < self.resolution)
            .collect();
        widths.sort_unstable();
        widths.dedup();
        widths
    }
}

/// Best box placement for one candidate period
#[derive(Debug, Clone, Copy)]
struct BoxPlacement {
    start_bin: usize,
    width: usize,
    in_box_sum: f64,
    in_box_fraction: f64,
    power: f64,
}

/// Box least squares periodogram search.
#[derive(Debug, Clone)]
pub struct BlsSearch {
    params: BlsParameters,
}

impl Default for BlsSearch {
    fn default() -> Self {
        Self {
            params: BlsParameters::default(),
        }
    }
}

impl BlsSearch {
    /// Create a search with explicit parameters.
    pub fn new(params: BlsParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Create a search with the given phase-bin resolution and default
    /// duration coverage.
    pub fn with_resolution(resolution: usize) -> Result<Self> {
        Self::new(BlsParameters {
            resolution,
            ..BlsParameters::default()
        })
    }

    /// The configured parameters.
    pub fn parameters(&self) -> &BlsParameters {
        &self.params
    }

    /// Scan one candidate period, returning the strongest placement.
    fn scan_period(
        &self,
        time: &[f64],
        centered: &[f64],
        t_ref: f64,
        period: f64,
        widths: &[usize],
    ) -> Option<BoxPlacement> {
        let n_bins = self.params.resolution;
        let weight = 1.0 / centered.len() as f64;

        let mut s_bin = vec![0.0; n_bins];
        let mut r_bin = vec![0.0; n_bins];
        for (&t, &x) in time.iter().zip(centered) {
            let phase = ((t - t_ref) % period) / period;
            let bin = ((phase * n_bins as f64) as usize).min(n_bins - 1);
            s_bin[bin] += weight * x;
            r_bin[bin] += weight;
        }

        let mut best: Option<BoxPlacement> = None;
        for &width in widths {
            let mut s: f64 = s_bin[..width].iter().sum();
            let mut r: f64 = r_bin[..width].iter().sum();
            for start in 0..n_bins {
                if r > 0.0 && r < 1.0 {
                    let power = s * s / (r * (1.0 - r));
                    if power.is_finite() && best.map_or(true, |b| power > b.power) {
                        best = Some(BoxPlacement {
                            start_bin: start,
                            width,
                            in_box_sum: s,
                            in_box_fraction: r,
                            power,
                        });
                    }
                }
                // Slide circularly: take in the bin entering on the right,
                // drop the one leaving on the left
                let entering = (start + width) % n_bins;
                s += s_bin[entering] - s_bin[start];
                r += r_bin[entering] - r_bin[start];
            }
        }
        best
    }

    fn fit_from_placement(&self, t_ref: f64, period: f64, placement: &BoxPlacement) -> TransitFit {
        let n_bins = self.params.resolution as f64;
        let r = placement.in_box_fraction;
        let denom = r * (1.0 - r);
        let depth = -placement.in_box_sum / denom;
        let duration = placement.width as f64 / n_bins * period;
        let center_bins = placement.start_bin as f64 + placement.width as f64 / 2.0;
        let center_phase = (center_bins % n_bins) / n_bins;
        TransitFit {
            period,
            epoch: t_ref + center_phase * period,
            duration,
            depth,
            power: placement.power,
        }
    }
}

impl PeriodSearchProperties for BlsSearch {
    fn algorithm_name(&self) -> &'static str {
        "BLS"
    }

    fn minimum_sample_size(&self) -> usize {
        20
    }
}

impl PeriodSearch for BlsSearch {
    fn search(&self, lc: &LightCurve, grid: &PeriodGrid) -> Result<SearchResult> {
        if lc.len() < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: lc.len(),
            });
        }
        if grid.is_empty() {
            return Err(Error::empty_input("period grid"));
        }
        if lc.flux().iter().any(|f| !f.is_finite()) {
            return Err(Error::non_finite("flux"));
        }

        let mean = lc.mean_flux()?;
        let centered: Vec<f64> = lc.flux().iter().map(|f| f - mean).collect();
        let time = lc.time();
        let t_ref = time[0];
        let widths = self.params.box_widths();
        if widths.is_empty() {
            return Err(Error::InvalidParameter(
                "duration grid produced no admissible box widths".to_string(),
            ));
        }

        let scan = |&period: &f64| self.scan_period(time, &centered, t_ref, period, &widths);

        #[cfg(feature = "parallel")]
        let placements: Vec<Option<BoxPlacement>> = grid.periods().par_iter().map(scan).collect();
        #[cfg(not(feature = "parallel"))]
        let placements: Vec<Option<BoxPlacement>> = grid.periods().iter().map(scan).collect();

        let power: Vec<f64> = placements
            .iter()
            .map(|p| p.map_or(0.0, |b| b.power))
            .collect();

        // Earliest strict maximum wins, keeping repeat searches
        // deterministic even on flat power curves
        let mut best: Option<(usize, BoxPlacement)> = None;
        for (i, placement) in placements.iter().enumerate() {
            if let Some(b) = placement {
                if best.map_or(true, |(_, cur)| b.power > cur.power) {
                    best = Some((i, *b));
                }
            }
        }

        let (index, placement) = best.ok_or_else(|| {
            Error::Computation("periodogram has no finite maximum".to_string())
        })?;
        if placement.power <= 0.0 {
            return Err(Error::Computation(
                "periodogram power is identically zero".to_string(),
            ));
        }

        let fit = self.fit_from_placement(t_ref, grid.periods()[index], &placement);
        let periodogram = Periodogram::new(grid.periods().to_vec(), power)?;
        Ok(SearchResult::new(fit, periodogram))
    }

    fn transit_model(&self, lc: &LightCurve, fit: &TransitFit) -> Result<LightCurve> {
        crate::model::box_model(lc, fit)
    }
}
