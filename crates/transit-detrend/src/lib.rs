//! Light curve cleaning: flattening and outlier rejection
//!
//! The preprocessor turns a raw brightness series into the flat, gap-free
//! relative flux the periodogram expects:
//!
//! 1. [`MovingMedianFlatten`] divides out a centered moving-median trend
//!    estimate, leaving relative flux near 1.
//! 2. [`SigmaClip`] drops non-finite samples and anything farther than a
//!    configured number of robust sigmas (standardized MAD) from the
//!    median.
//!
//! Both stages are robust: the trend and scale estimates are median-based,
//! so transits and cosmic-ray hits do not drag them around.
//!
//! # Example
//!
//! ```rust
//! use transit_core::LightCurve;
//! use transit_detrend::{Detrender, MovingMedianFlatten, OutlierFilter, SigmaClip};
//!
//! let time: Vec<f64> = (0..200).map(|i| i as f64 * 0.1).collect();
//! let flux: Vec<f64> = (0..200).map(|i| 100.0 + 0.1 * i as f64).collect();
//! let lc = LightCurve::new(time, flux).unwrap();
//!
//! let flat = MovingMedianFlatten::new(31).unwrap().detrend(&lc).unwrap();
//! let cleaned = SigmaClip::default().clean(&flat).unwrap();
//! assert_eq!(cleaned.len(), lc.len());
//! ```

pub mod flatten;
pub mod outliers;
pub mod scale;
pub mod traits;

pub use flatten::{FlattenParameters, MovingMedianFlatten};
pub use outliers::{SigmaClip, DEFAULT_SIGMA};
pub use scale::{mad, median, standardized_mad, MAD_CONSISTENCY};
pub use traits::{CleaningStageProperties, Detrender, OutlierFilter};
