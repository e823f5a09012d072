//! Iterative box least squares transit search for photometric time series
//!
//! This crate re-exports the workspace members as a single convenience
//! surface:
//!
//! - [`transit_core`] - light curve container, folding, period grid, errors
//! - [`transit_detrend`] - moving-median flattening and sigma clipping
//! - [`transit_bls`] - the box least squares periodogram and transit model
//! - [`transit_pipeline`] - the detect-and-subtract search loop and loader
//!
//! # Example
//!
//! ```rust
//! use transit_search::pipeline::SignalSearch;
//! use transit_search::bls::BlsSearch;
//! use transit_search::core::PeriodGrid;
//! use transit_search::pipeline::test_data::TestSignals;
//!
//! // A synthetic target with one injected box transit
//! let lc = TestSignals::single_transit(1000, 0.01, 3.0, 1.0, 0.2, 0.02, 0.003);
//!
//! let grid = PeriodGrid::linear(1.0, 5.0, 1000).unwrap();
//! let search = SignalSearch::new(BlsSearch::with_resolution(100).unwrap(), 1, 1.0);
//! let outcome = search.run(&lc, &grid).unwrap();
//!
//! assert_eq!(outcome.detections().len(), 1);
//! println!("{}", outcome.detections()[0]);
//! ```

pub use transit_bls as bls;
pub use transit_core as core;
pub use transit_detrend as detrend;
pub use transit_pipeline as pipeline;

// The types most callers need, flattened to the crate root
pub use transit_bls::{BlsSearch, PeriodSearch, Periodogram, SearchResult, TransitFit};
pub use transit_core::{Detection, Error, FoldedCurve, LightCurve, PeriodGrid, Result};
pub use transit_detrend::{MovingMedianFlatten, SigmaClip};
pub use transit_pipeline::{process_target, SearchConfig, SearchOutcome, SignalSearch};
