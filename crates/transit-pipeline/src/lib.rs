//! Iterative detect-and-subtract transit search
//!
//! Ties the workspace together into the classic pipeline: load a
//! photometry table, flatten and clip the light curve, then repeatedly
//! search for the strongest periodic box dip and subtract its model so
//! weaker signals surface on later iterations.
//!
//! The loop is generic over the periodogram backend via
//! [`transit_bls::PeriodSearch`]; [`process_target`] wires it to the BLS
//! implementation with one call.
//!
//! # Example
//!
//! ```rust
//! use transit_bls::BlsSearch;
//! use transit_core::PeriodGrid;
//! use transit_pipeline::{test_data::TestSignals, SignalSearch};
//!
//! let lc = TestSignals::single_transit(1000, 0.01, 2.0, 0.5, 0.2, 0.02, 0.003);
//! let grid = PeriodGrid::linear(1.0, 4.0, 500).unwrap();
//!
//! let search = SignalSearch::new(BlsSearch::with_resolution(100).unwrap(), 1, 1.0);
//! let outcome = search.run(&lc, &grid).unwrap();
//!
//! assert_eq!(outcome.detections().len(), 1);
//! assert!((outcome.detections()[0].period - 2.0).abs() < 0.05);
//! ```

pub mod config;
pub mod loader;
pub mod search;
pub mod test_data;

pub use config::SearchConfig;
pub use loader::load_table;
pub use search::{process_target, IterationReport, SearchOutcome, SignalSearch};
