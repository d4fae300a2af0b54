//! Benchmarks for the Fourier transform engine.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::dsp::FourierTransform;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_fourier(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fourier");

    for &size in BLOCK_SIZES {
        let input: Vec<Complex64> = (0..size)
            .map(|i| Complex64::from_polar(1.0, i as f64 * 0.3))
            .collect();

        // Forward only, unit scale skips the scaling pass
        let mut fft = FourierTransform::<f64>::new(size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                fft.forward(black_box(&mut buffer));
            })
        });

        // Forward + inverse, inverse pays the 1/N scaling pass
        let mut fft = FourierTransform::<f64>::new(size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("round_trip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                fft.forward(black_box(&mut buffer));
                fft.inverse(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
