//! Synthetic light curve generators
//!
//! Standardized signals used across the workspace's tests and examples so
//! scenarios stay consistent and reproducible. All generators seed their
//! own RNG.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use transit_core::LightCurve;

/// An injected periodic box dip.
#[derive(Debug, Clone, Copy)]
pub struct InjectedTransit {
    /// Orbital period
    pub period: f64,
    /// Mid-transit time of the first transit
    pub epoch: f64,
    /// Transit duration
    pub duration: f64,
    /// Fractional depth
    pub depth: f64,
}

impl InjectedTransit {
    /// Whether time `t` falls inside a transit window.
    pub fn in_transit(&self, t: f64) -> bool {
        let dphase =
            (t - self.epoch + self.period / 2.0).rem_euclid(self.period) - self.period / 2.0;
        dphase.abs() < self.duration / 2.0
    }
}

/// Standard synthetic targets for transit search testing
pub struct TestSignals;

impl TestSignals {
    /// Flat relative flux with Gaussian noise.
    pub fn flat(n: usize, cadence: f64, noise: f64) -> LightCurve {
        Self::with_transits(n, cadence, noise, &[])
    }

    /// Relative flux with one injected box transit.
    #[allow(clippy::too_many_arguments)]
    pub fn single_transit(
        n: usize,
        cadence: f64,
        period: f64,
        epoch: f64,
        duration: f64,
        depth: f64,
        noise: f64,
    ) -> LightCurve {
        Self::with_transits(
            n,
            cadence,
            noise,
            &[InjectedTransit {
                period,
                epoch,
                duration,
                depth,
            }],
        )
    }

    /// Relative flux with any number of injected box transits.
    ///
    /// Depths stack where transits overlap.
    pub fn with_transits(
        n: usize,
        cadence: f64,
        noise: f64,
        transits: &[InjectedTransit],
    ) -> LightCurve {
        let mut rng = StdRng::seed_from_u64(42);
        let noise_dist = Normal::new(0.0, noise.max(f64::MIN_POSITIVE)).unwrap();

        let time: Vec<f64> = (0..n).map(|i| i as f64 * cadence).collect();
        let flux: Vec<f64> = time
            .iter()
            .map(|&t| {
                let dip: f64 = transits
                    .iter()
                    .filter(|tr| tr.in_transit(t))
                    .map(|tr| tr.depth)
                    .sum();
                1.0 - dip + if noise > 0.0 { noise_dist.sample(&mut rng) } else { 0.0 }
            })
            .collect();
        LightCurve::new(time, flux).unwrap()
    }

    /// A raw instrument-like target: counts with a slow trend, injected
    /// transits, noise, a few spikes and a few gaps. Exercises the whole
    /// cleaning chain.
    pub fn raw_target(
        n: usize,
        cadence: f64,
        noise: f64,
        transits: &[InjectedTransit],
    ) -> LightCurve {
        let relative = Self::with_transits(n, cadence, noise, transits);
        let span = n as f64 * cadence;
        let mut flux: Vec<f64> = relative
            .time()
            .iter()
            .zip(relative.flux())
            .map(|(&t, &f)| {
                let trend = 5000.0 * (1.0 + 0.02 * (2.0 * std::f64::consts::PI * t / span).sin());
                trend * f
            })
            .collect();

        // A couple of cosmic-ray hits and detector dropouts
        let mut rng = StdRng::seed_from_u64(7);
        let spike = Normal::<f64>::new(8.0, 1.0).unwrap();
        for k in 0..(n / 500).max(1) {
            let i = (k * 499 + 131) % n;
            flux[i] *= 1.0 + spike.sample(&mut rng).abs() * noise.max(1e-3);
            let j = (k * 811 + 257) % n;
            flux[j] = f64::NAN;
        }
        LightCurve::new(relative.time().to_vec(), flux).unwrap()
    }

    /// Write a light curve to a CSV photometry table.
    pub fn write_csv(lc: &LightCurve, path: &std::path::Path) -> std::io::Result<()> {
        use std::io::Write;
        let mut out = String::from("time,flux\n");
        for (&t, &f) in lc.time().iter().zip(lc.flux()) {
            out.push_str(&format!("{t},{f}\n"));
        }
        let mut file = std::fs::File::create(path)?;
        file.write_all(out.as_bytes())
    }
}
