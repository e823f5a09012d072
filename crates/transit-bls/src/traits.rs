//! The periodogram backend seam
//!
//! The detect-and-subtract loop only ever talks to a backend through
//! [`PeriodSearch`], so any periodogram implementation can substitute for
//! the box least squares one without changing the loop.

use crate::types::{SearchResult, TransitFit};
use transit_core::{LightCurve, PeriodGrid, Result};

/// Properties of a periodogram backend that don't depend on the data
pub trait PeriodSearchProperties {
    /// Name of the search algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum number of samples the search needs to be meaningful
    fn minimum_sample_size(&self) -> usize;
}

/// A periodogram search oracle.
///
/// `search` scores every candidate period and identifies the single best
/// (period, epoch, duration) fit; `transit_model` materializes the
/// synthetic signal implied by such a fit on a curve's own timestamps, so
/// the caller can subtract it.
pub trait PeriodSearch: PeriodSearchProperties {
    /// Score the grid against the curve and return the best fit together
    /// with the full power curve.
    fn search(&self, lc: &LightCurve, grid: &PeriodGrid) -> Result<SearchResult>;

    /// Evaluate the box transit model implied by `fit` on the timestamps
    /// of `lc`.
    fn transit_model(&self, lc: &LightCurve, fit: &TransitFit) -> Result<LightCurve>;
}
