//! End-to-end scenarios for the detect-and-subtract pipeline

use approx::assert_relative_eq;
use transit_bls::BlsSearch;
use transit_core::{Error, LightCurve, PeriodGrid};
use transit_detrend::{Detrender, MovingMedianFlatten, OutlierFilter, SigmaClip};
use transit_pipeline::test_data::{InjectedTransit, TestSignals};
use transit_pipeline::{process_target, SearchConfig, SignalSearch};

fn grid() -> PeriodGrid {
    PeriodGrid::linear(1.0, 10.0, 2500).unwrap()
}

fn backend() -> BlsSearch {
    BlsSearch::with_resolution(250).unwrap()
}

#[test]
fn test_detection_list_has_exact_length() {
    let lc = TestSignals::single_transit(2000, 0.01, 3.0, 1.0, 0.2, 0.01, 0.004);
    let search = SignalSearch::new(backend(), 3, 1.0);

    let outcome = search.run(&lc, &grid()).unwrap();
    // No convergence check: exactly max_signals detections, significant
    // or not
    assert_eq!(outcome.detections().len(), 3);
    assert_eq!(outcome.reports().len(), 3);
}

#[test]
fn test_recovers_injected_transit() {
    let lc = TestSignals::single_transit(2000, 0.01, 3.0, 1.0, 0.2, 0.01, 0.004);
    let flat = MovingMedianFlatten::new(301).unwrap().detrend(&lc).unwrap();
    let cleaned = SigmaClip::new(5.0).unwrap().clean(&flat).unwrap();

    let search = SignalSearch::new(backend(), 1, 1.0);
    let outcome = search.run(&cleaned, &grid()).unwrap();

    assert_eq!(outcome.detections().len(), 1);
    let detection = &outcome.detections()[0];
    assert_relative_eq!(detection.period, 3.0, epsilon = 0.02);
    assert_relative_eq!(detection.epoch, 1.0, epsilon = 0.05);
    assert_relative_eq!(detection.duration, 0.2, epsilon = 0.08);

    let fit = &outcome.reports()[0].fit;
    assert_relative_eq!(fit.depth, 0.01, epsilon = 0.003);
}

#[test]
fn test_prefix_determinism() {
    let lc = TestSignals::single_transit(2000, 0.01, 3.0, 1.0, 0.2, 0.01, 0.004);

    let one = SignalSearch::new(backend(), 1, 1.0).run(&lc, &grid()).unwrap();
    let two = SignalSearch::new(backend(), 2, 1.0).run(&lc, &grid()).unwrap();

    // Prewhitening order is deterministic: the k-run output is a prefix
    // of the (k+1)-run output
    assert_eq!(one.detections(), &two.detections()[..1]);
}

#[test]
fn test_prewhitening_suppresses_found_signal() {
    let lc = TestSignals::single_transit(2000, 0.01, 3.0, 1.0, 0.2, 0.01, 0.004);
    let search = SignalSearch::new(backend(), 2, 1.0);

    let outcome = search.run(&lc, &grid()).unwrap();
    let first = &outcome.reports()[0].fit;
    let second = &outcome.reports()[1].fit;

    // Once the genuine signal is subtracted, the strongest thing left is
    // far weaker. The second detection itself may be spurious; that is
    // the documented no-stopping-rule policy, not a bug.
    assert!(second.power < 0.5 * first.power);
}

#[test]
fn test_two_signals_recovered_in_power_order() {
    let transits = [
        InjectedTransit {
            period: 2.7,
            epoch: 0.8,
            duration: 0.18,
            depth: 0.02,
        },
        InjectedTransit {
            period: 6.1,
            epoch: 2.0,
            duration: 0.25,
            depth: 0.015,
        },
    ];
    let lc = TestSignals::with_transits(4000, 0.01, 0.004, &transits);
    let search = SignalSearch::new(backend(), 2, 1.0);

    let outcome = search.run(&lc, &grid()).unwrap();
    assert_eq!(outcome.detections().len(), 2);
    // The deeper signal dominates the first scan; subtracting it exposes
    // the shallower one
    assert_relative_eq!(outcome.detections()[0].period, 2.7, epsilon = 0.05);
    assert_relative_eq!(outcome.detections()[1].period, 6.1, epsilon = 0.05);
}

#[test]
fn test_zero_max_signals_returns_input_unchanged() {
    let lc = TestSignals::single_transit(1000, 0.01, 2.0, 0.5, 0.2, 0.02, 0.003);
    let search = SignalSearch::new(backend(), 0, 1.0);

    let outcome = search.run(&lc, &grid()).unwrap();
    assert!(outcome.detections().is_empty());
    assert_eq!(outcome.residual(), &lc);
}

#[test]
fn test_empty_signal_after_cleaning_fails_downstream() {
    // Every sample is a gap; cleaning leaves nothing and the search is
    // the stage that reports it
    let time: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
    let lc = LightCurve::new(time, vec![f64::NAN; 100]).unwrap();
    let cleaned = SigmaClip::new(5.0).unwrap().clean(&lc).unwrap();
    assert!(cleaned.is_empty());

    let search = SignalSearch::new(backend(), 1, 1.0);
    match search.run(&cleaned, &grid()) {
        Err(Error::InsufficientData { .. }) => {}
        other => panic!("expected insufficient-data error, got {other:?}"),
    }
}

#[test]
fn test_process_target_from_csv() {
    let transit = InjectedTransit {
        period: 3.3,
        epoch: 1.2,
        duration: 0.22,
        depth: 0.012,
    };
    let raw = TestSignals::raw_target(3000, 0.01, 0.003, &[transit]);
    let path = std::env::temp_dir().join(format!(
        "transit_pipeline_e2e_{}.csv",
        std::process::id()
    ));
    TestSignals::write_csv(&raw, &path).unwrap();

    let config = SearchConfig {
        period_range: (1.0, 8.0),
        grid_points: 2000,
        window_length: 301,
        resolution: 250,
        max_signals: 1,
        ..SearchConfig::default()
    };
    let outcome = process_target(&path, &config);
    std::fs::remove_file(&path).ok();

    let outcome = outcome.unwrap();
    assert_eq!(outcome.detections().len(), 1);
    assert_relative_eq!(outcome.detections()[0].period, 3.3, epsilon = 0.05);
}

#[test]
fn test_process_target_missing_file() {
    let config = SearchConfig::default();
    assert!(process_target("/nonexistent/target.csv", &config).is_err());
}

#[test]
fn test_process_target_rejects_bad_config() {
    let config = SearchConfig {
        window_length: 900,
        ..SearchConfig::default()
    };
    match process_target("/nonexistent/target.csv", &config) {
        Err(Error::InvalidParameter(_)) => {}
        other => panic!("expected parameter error before any IO, got {other:?}"),
    }
}
