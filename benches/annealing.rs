//! Benchmarks for the annealing regression.
//!
//! Compares sequential and rayon-parallel candidate scoring on one- and
//! two-curve problems.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loglet_rs::anneal::{AnnealConfig, AnnealingRegression, BestResult};
use loglet_rs::series::synthesize;
use loglet_rs::{logistic, CurveParams, CurveType, ParameterSet, SampleSeries};
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn series(n_curves: usize) -> SampleSeries {
    let x = Array1::linspace(0.0, 100.0, 101);
    let y = x.mapv(|t| {
        (0..n_curves)
            .map(|i| logistic(t, 15.0, 10.0, 25.0 + 50.0 * i as f64).unwrap())
            .sum::<f64>()
    });
    SampleSeries::new(x, y).unwrap()
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing_regression");
    group.sample_size(10);

    for n_curves in [1usize, 2] {
        let data = series(n_curves);
        let start = BestResult {
            energy: f64::MAX,
            params: ParameterSet::initial(n_curves),
        };

        for parallel in [false, true] {
            let config = AnnealConfig::new()
                .with_mc_iterations(2000)
                .with_anneal_iterations(5)
                .with_parallel(parallel);
            let engine = AnnealingRegression::new(CurveType::Logistic, config);
            let label = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(label, n_curves), &data, |b, data| {
                b.iter(|| {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    engine.run(black_box(data), &start, None, &mut rng).unwrap()
                })
            });
        }
    }

    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let x = Array1::linspace(0.0, 100.0, 1001);
    let params = ParameterSet::new(
        0.5,
        vec![
            CurveParams::new(15.0, 10.0, 25.0),
            CurveParams::new(20.0, 5.0, 70.0),
        ],
    );

    c.bench_function("synthesize_two_gompertz", |b| {
        b.iter(|| synthesize(black_box(&x), black_box(&params), CurveType::Gompertz).unwrap())
    });
}

criterion_group!(benches, bench_regression, bench_synthesize);
criterion_main!(benches);
