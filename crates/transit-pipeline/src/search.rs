//! The detect-and-subtract loop
//!
//! One iteration: search the periodogram, record the best fit, build the
//! implied box model, keep folded views of data and model for inspection,
//! then subtract the model so weaker signals become detectable on the next
//! pass (prewhitening).
//!
//! The loop runs exactly `max_signals` iterations. There is no
//! significance threshold and no duplicate suppression: once genuine
//! signals are exhausted the search will happily fit noise, and the
//! recorded peak power is the caller's only handle for telling the two
//! apart. This mirrors the exploratory tool the pipeline descends from.

use crate::config::SearchConfig;
use crate::loader;
use std::path::Path;
use transit_bls::{BlsSearch, PeriodSearch, Periodogram, TransitFit};
use transit_core::{Detection, FoldedCurve, LightCurve, PeriodGrid, Result};
use transit_detrend::{Detrender, MovingMedianFlatten, OutlierFilter, SigmaClip};

/// Everything one loop iteration produced, kept for inspection and
/// display. The folded views are clipped to the configured half-width,
/// the folded equivalent of the original plots' x-axis limit.
#[derive(Debug, Clone)]
pub struct IterationReport {
    /// The best fit of this iteration, including depth and peak power
    pub fit: TransitFit,
    /// The full power curve the fit was drawn from
    pub periodogram: Periodogram,
    /// The working signal folded about the detection
    pub folded_observed: FoldedCurve,
    /// The box model folded the same way
    pub folded_model: FoldedCurve,
}

/// Result of a full detect-and-subtract run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    detections: Vec<Detection>,
    residual: LightCurve,
    reports: Vec<IterationReport>,
}

impl SearchOutcome {
    /// Detected signals, in discovery order.
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// The working signal after all model subtractions.
    pub fn residual(&self) -> &LightCurve {
        &self.residual
    }

    /// Per-iteration reports, parallel to [`detections`](Self::detections).
    pub fn reports(&self) -> &[IterationReport] {
        &self.reports
    }
}

/// The iterative signal search, generic over the periodogram backend.
#[derive(Debug, Clone)]
pub struct SignalSearch<S: PeriodSearch> {
    backend: S,
    max_signals: usize,
    fold_half_width: f64,
}

impl<S: PeriodSearch> SignalSearch<S> {
    /// Create a search running `max_signals` detect-and-subtract
    /// iterations; folded views are clipped to `fold_half_width`.
    pub fn new(backend: S, max_signals: usize, fold_half_width: f64) -> Self {
        Self {
            backend,
            max_signals,
            fold_half_width,
        }
    }

    /// The configured backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Run the loop on a cleaned signal.
    ///
    /// Returns up to `max_signals` detections and the residual with every
    /// fitted model subtracted. With `max_signals = 0` the input comes
    /// back unchanged and no search runs. A failure on iteration *i*
    /// aborts the whole call; earlier detections are discarded with it.
    pub fn run(&self, lc: &LightCurve, grid: &PeriodGrid) -> Result<SearchOutcome> {
        tracing::debug!(
            algorithm = self.backend.algorithm_name(),
            iterations = self.max_signals,
            "starting signal search"
        );
        let mut current = lc.clone();
        let mut detections = Vec::with_capacity(self.max_signals);
        let mut reports = Vec::with_capacity(self.max_signals);

        for iteration in 1..=self.max_signals {
            let (fit, periodogram) = self.backend.search(&current, grid)?.into_parts();
            detections.push(Detection::from(fit));
            tracing::info!(
                iteration,
                period = fit.period,
                power = fit.power,
                "detected periodic signal"
            );

            let model = self.backend.transit_model(&current, &fit)?;
            let folded_observed = current
                .fold(fit.period, fit.epoch)?
                .clipped(self.fold_half_width);
            let folded_model = model
                .fold(fit.period, fit.epoch)?
                .clipped(self.fold_half_width);

            current = current.subtract(&model)?;
            reports.push(IterationReport {
                fit,
                periodogram,
                folded_observed,
                folded_model,
            });
        }

        Ok(SearchOutcome {
            detections,
            residual: current,
            reports,
        })
    }
}

/// Process one target from a photometry table on disk.
///
/// Load, flatten, clip, then run the detect-and-subtract loop with a BLS
/// backend, mirroring the classic script: load file, clean, search
/// `max_signals` times.
pub fn process_target<P: AsRef<Path>>(path: P, config: &SearchConfig) -> Result<SearchOutcome> {
    config.validate()?;
    tracing::info!(path = %path.as_ref().display(), "loading photometry table");
    let raw = loader::load_table(path.as_ref())?;

    let flat = MovingMedianFlatten::new(config.window_length)?.detrend(&raw)?;
    let cleaned = SigmaClip::new(config.clip_sigma)?.clean(&flat)?;
    tracing::debug!(
        raw = raw.len(),
        cleaned = cleaned.len(),
        "cleaned light curve"
    );

    let grid = PeriodGrid::linear(
        config.period_range.0,
        config.period_range.1,
        config.grid_points,
    )?;
    let backend = BlsSearch::with_resolution(config.resolution)?;
    SignalSearch::new(backend, config.max_signals, config.fold_half_width).run(&cleaned, &grid)
}
