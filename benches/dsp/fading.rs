//! Benchmarks for fading generator evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::dsp::{hadamard, FadingGenerator, FadingType};
use chansim_dsp::random::seeded;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_fading(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fading");

    for &size in BLOCK_SIZES {
        // Jakes - one evaluation produces `size` realizations
        let mut fading = FadingGenerator::with_source(50.0, FadingType::Jakes, size, &mut seeded(1));
        let mut t = 0.0;
        group.bench_with_input(BenchmarkId::new("evaluate_jakes", size), &size, |b, _| {
            b.iter(|| {
                t += 1.0 / 48_000.0;
                fading.evaluate(black_box(t));
            })
        });

        // Direct O(N²) sum-of-sinusoids for comparison with the Hadamard mix
        let phases: Vec<f64> = (0..size).map(|i| i as f64 * 0.37).collect();
        let mut out = vec![Complex64::new(0.0, 0.0); size];
        group.bench_with_input(BenchmarkId::new("direct_sum", size), &size, |b, _| {
            b.iter(|| {
                for (row, o) in out.iter_mut().enumerate() {
                    let mut acc = Complex64::new(0.0, 0.0);
                    for (col, phase) in phases.iter().enumerate() {
                        let sign = if (row & col).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
                        acc += Complex64::new(sign * (phase + black_box(t)).sin(), 0.0);
                    }
                    *o = acc;
                }
            })
        });

        // Just the mixing stage
        let mut buffer = vec![Complex64::new(1.0, 0.5); size];
        group.bench_with_input(BenchmarkId::new("mix_only", size), &size, |b, _| {
            b.iter(|| {
                hadamard::normalized(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
