//! Box least squares periodogram for transit searches
//!
//! This crate scores a grid of candidate periods against a cleaned light
//! curve and extracts the best-fit box transit: fold, bin into a phase
//! histogram, slide a circular box over a grid of trial durations, and
//! rate every placement with the signal-residue statistic. The backend is
//! exposed through the [`PeriodSearch`] trait so the prewhitening loop
//! never depends on this particular implementation.
//!
//! # Usage
//!
//! ```rust
//! use transit_bls::{BlsSearch, PeriodSearch};
//! use transit_core::{LightCurve, PeriodGrid};
//!
//! // Relative flux with a 0.2-long, 2%-deep dip every 2.5 time units
//! let time: Vec<f64> = (0..1500).map(|i| i as f64 * 0.01).collect();
//! let flux: Vec<f64> = time
//!     .iter()
//!     .map(|&t| {
//!         let dphase = (t - 0.7 + 1.25).rem_euclid(2.5) - 1.25;
//!         if dphase.abs() < 0.1 { 0.98 } else { 1.0 }
//!     })
//!     .collect();
//! let lc = LightCurve::new(time, flux).unwrap();
//!
//! let grid = PeriodGrid::linear(1.0, 5.0, 2000).unwrap();
//! let search = BlsSearch::with_resolution(200).unwrap();
//! let result = search.search(&lc, &grid).unwrap();
//!
//! assert!((result.best().period - 2.5).abs() < 0.01);
//! ```
//!
//! Enable the `parallel` feature to scan the period grid with rayon; the
//! reduction stays deterministic either way.

pub mod model;
pub mod periodogram;
pub mod traits;
pub mod types;

pub use model::box_model;
pub use periodogram::{BlsParameters, BlsSearch};
pub use traits::{PeriodSearch, PeriodSearchProperties};
pub use types::{Periodogram, SearchResult, TransitFit};
