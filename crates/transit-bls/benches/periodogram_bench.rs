use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transit_bls::{BlsSearch, PeriodSearch};
use transit_core::{LightCurve, PeriodGrid};

fn synthetic_target(n: usize) -> LightCurve {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.002).unwrap();
    let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let flux: Vec<f64> = time
        .iter()
        .map(|&t| {
            let dphase = (t - 1.0 + 1.6).rem_euclid(3.2) - 1.6;
            let base = if dphase.abs() < 0.12 { 0.99 } else { 1.0 };
            base + noise.sample(&mut rng)
        })
        .collect();
    LightCurve::new(time, flux).unwrap()
}

fn bench_periodogram_scan(c: &mut Criterion) {
    let lc = synthetic_target(2000);
    let grid = PeriodGrid::linear(1.0, 10.0, 500).unwrap();
    let search = BlsSearch::with_resolution(200).unwrap();

    c.bench_function("bls_scan_500_periods", |b| {
        b.iter(|| {
            let result = search.search(black_box(&lc), black_box(&grid)).unwrap();
            black_box(result.best().period)
        })
    });
}

fn bench_single_resolution_sweep(c: &mut Criterion) {
    let lc = synthetic_target(2000);
    let grid = PeriodGrid::linear(1.0, 10.0, 200).unwrap();

    let mut group = c.benchmark_group("bls_resolution");
    for resolution in [100usize, 200, 500] {
        let search = BlsSearch::with_resolution(resolution).unwrap();
        group.bench_function(format!("bins_{resolution}"), |b| {
            b.iter(|| {
                let result = search.search(black_box(&lc), black_box(&grid)).unwrap();
                black_box(result.best().power)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_periodogram_scan, bench_single_resolution_sweep);
criterion_main!(benches);
