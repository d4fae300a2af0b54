//! Benchmarks for the fast Walsh–Hadamard transform.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::dsp::hadamard;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_hadamard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/hadamard");

    for &size in BLOCK_SIZES {
        let input: Vec<Complex64> = (0..size)
            .map(|i| Complex64::new((i as f64 * 0.1).sin(), (i as f64 * 0.2).cos()))
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("unnormalized", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                hadamard::unnormalized(black_box(&mut buffer));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("normalized", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                hadamard::normalized(black_box(&mut buffer));
            })
        });

        // Real-valued path - half the arithmetic of complex
        let real: Vec<f64> = input.iter().map(|z| z.re).collect();
        let mut buffer = real.clone();
        group.bench_with_input(BenchmarkId::new("real", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&real);
                hadamard::unnormalized(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
