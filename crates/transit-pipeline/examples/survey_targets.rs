//! Five demo targets processed end to end
//!
//! Mirrors a small survey session: each target is staged as a CSV
//! photometry table, then run through load -> flatten -> clip ->
//! detect-and-subtract with a per-target configuration.

use anyhow::Result;
use std::path::PathBuf;
use transit_pipeline::test_data::{InjectedTransit, TestSignals};
use transit_pipeline::{process_target, SearchConfig};

fn stage_target(name: &str, n: usize, transits: &[InjectedTransit]) -> Result<PathBuf> {
    let lc = TestSignals::raw_target(n, 0.01, 0.003, transits);
    let path = std::env::temp_dir().join(format!("survey_{}_{name}.csv", std::process::id()));
    TestSignals::write_csv(&lc, &path)?;
    Ok(path)
}

fn transit(period: f64, epoch: f64, duration: f64, depth: f64) -> InjectedTransit {
    InjectedTransit {
        period,
        epoch,
        duration,
        depth,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base = SearchConfig {
        period_range: (1.0, 10.0),
        grid_points: 4000,
        window_length: 301,
        resolution: 250,
        ..SearchConfig::default()
    };

    // Target 1: one clear signal, single search pass
    let path = stage_target("a", 2000, &[transit(3.3, 1.2, 0.22, 0.015)])?;
    report("target a", &process_target(&path, &SearchConfig { max_signals: 1, ..base })?)?;
    std::fs::remove_file(&path).ok();

    // Target 2: two planets, default two-pass search
    let path = stage_target(
        "b",
        4000,
        &[transit(2.6, 0.9, 0.18, 0.02), transit(7.4, 2.5, 0.28, 0.012)],
    )?;
    report("target b", &process_target(&path, &base)?)?;
    std::fs::remove_file(&path).ok();

    // Target 3: longer minimum period and a tighter folded view
    let path = stage_target("c", 2000, &[transit(4.1, 0.7, 0.24, 0.014)])?;
    report(
        "target c",
        &process_target(
            &path,
            &SearchConfig {
                period_range: (1.5, 10.0),
                fold_half_width: 0.5,
                max_signals: 1,
                ..base
            },
        )?,
    )?;
    std::fs::remove_file(&path).ok();

    // Target 4: shallow signal near the long-period end
    let path = stage_target("d", 3000, &[transit(5.7, 2.1, 0.3, 0.01)])?;
    report("target d", &process_target(&path, &SearchConfig { max_signals: 1, ..base })?)?;
    std::fs::remove_file(&path).ok();

    // Target 5: short-period signal
    let path = stage_target("e", 2000, &[transit(2.2, 0.4, 0.15, 0.018)])?;
    report("target e", &process_target(&path, &SearchConfig { max_signals: 1, ..base })?)?;
    std::fs::remove_file(&path).ok();

    Ok(())
}

fn report(name: &str, outcome: &transit_pipeline::SearchOutcome) -> Result<()> {
    println!("{name}: {} detection(s)", outcome.detections().len());
    for (detection, iteration) in outcome.detections().iter().zip(outcome.reports()) {
        println!(
            "  {detection}  depth: {:.5}  power: {:.3e}",
            iteration.fit.depth, iteration.fit.power
        );
    }
    Ok(())
}
