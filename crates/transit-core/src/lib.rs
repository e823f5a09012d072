//! Core types for photometric transit searches
//!
//! This crate provides the shared vocabulary of the transit-search
//! workspace: the [`LightCurve`] sample container, phase [`fold`]ing, the
//! trial [`PeriodGrid`], detected signals, and the unified [`Error`] type.
//!
//! # Invariants
//!
//! - Light curve timestamps are finite and strictly increasing.
//! - Every transformation is a pure function returning a new curve; the
//!   prewhitening loop reassigns its working signal instead of mutating it.
//!
//! # Example
//!
//! ```rust
//! use transit_core::{LightCurve, PeriodGrid};
//!
//! let lc = LightCurve::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 0.99, 1.0, 1.01]).unwrap();
//! let folded = lc.fold(2.0, 0.0).unwrap();
//! assert_eq!(folded.len(), lc.len());
//!
//! let grid = PeriodGrid::linear(1.0, 20.0, 10_000).unwrap();
//! assert_eq!(grid.len(), 10_000);
//! ```

pub mod detection;
pub mod error;
pub mod fold;
pub mod grid;
pub mod lightcurve;

pub use detection::Detection;
pub use error::{Error, Result};
pub use fold::FoldedCurve;
pub use grid::{PeriodGrid, DEFAULT_GRID_POINTS};
pub use lightcurve::LightCurve;
