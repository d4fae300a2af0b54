//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::dsp::DelayLine;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    // Delay line capacities (in samples)
    let capacities: &[usize] = &[
        8,     // short multipath spread
        512,   // long echo
        48000, // 1 second at 48kHz
    ];

    for &size in BLOCK_SIZES {
        let input: Vec<Complex64> = (0..size)
            .map(|i| Complex64::new((i as f64 * 0.1).sin(), 0.0))
            .collect();

        for &capacity in capacities {
            let mut delay = DelayLine::new(capacity);
            let mut buffer = input.clone();
            group.bench_with_input(
                BenchmarkId::new(format!("render_cap{capacity}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        delay.render(black_box(&mut buffer), black_box(capacity - 1));
                    })
                },
            );
        }

        // Multi-tap read (tapped delay line channel access pattern)
        let mut delay = DelayLine::new(64);
        for &sample in &input {
            delay.push(sample);
        }
        group.bench_with_input(BenchmarkId::new("read_taps", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = Complex64::new(0.0, 0.0);
                for i in 0..size {
                    sum += delay.at(black_box(i % 64));
                }
                sum
            })
        });
    }

    group.finish();
}
