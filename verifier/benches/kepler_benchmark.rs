use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use orbit_verify::checks::{check_periods, check_velocities};
use orbit_verify::orbit::{circular_velocity_ms, orbital_period_days};
use orbit_verify::{Verifier, PLANETS};

fn bench_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_formulas");

    group.bench_function("orbital_period_days", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let a = 5.0e10 + (i as f64 * 1.0e9);
                black_box(orbital_period_days(black_box(a)));
            }
        });
    });

    group.bench_function("circular_velocity_ms", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let a = 5.0e10 + (i as f64 * 1.0e9);
                black_box(circular_velocity_ms(black_box(a)));
            }
        });
    });

    group.finish();
}

fn bench_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("checks");

    for tolerance in [0.5, 2.0] {
        group.bench_with_input(
            BenchmarkId::new("periods_and_velocities", tolerance),
            &tolerance,
            |b, &tolerance| {
                b.iter(|| {
                    black_box(check_periods(&PLANETS, tolerance));
                    black_box(check_velocities(&PLANETS, tolerance));
                });
            },
        );
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    group.bench_function("text", |b| {
        b.iter(|| {
            let mut verifier = Verifier::new(Vec::with_capacity(8 * 1024));
            black_box(verifier.run().unwrap());
        });
    });

    group.bench_function("json", |b| {
        b.iter(|| {
            let mut verifier = Verifier::new(Vec::with_capacity(8 * 1024));
            black_box(verifier.write_json().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formulas, bench_checks, bench_full_report);
criterion_main!(benches);
