//! Benchmarks for complex Gaussian noise generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::dsp::NoiseSource;
use chansim_dsp::random::seeded;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");
    let noise = NoiseSource::new(0.5).expect("valid stdev");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![Complex64::new(0.0, 0.0); size];

        // Seeded ChaCha8 stream
        let mut rng = seeded(1);
        group.bench_with_input(BenchmarkId::new("fill_seeded", size), &size, |b, _| {
            b.iter(|| {
                noise.fill(black_box(&mut buffer), &mut rng);
            })
        });

        // Thread-local generator, one sample at a time
        group.bench_with_input(BenchmarkId::new("sample_thread_rng", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = noise.sample();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
