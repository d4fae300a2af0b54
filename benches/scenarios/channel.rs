//! Benchmarks for complete fading channels.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use chansim_dsp::channel::{ChannelConfig, FadingChannel, TapConfig};
use chansim_dsp::dsp::FadingType;
use num_complex::Complex64;

use crate::BLOCK_SIZES;

pub fn bench_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/channel");

    for &size in BLOCK_SIZES {
        let input: Vec<Complex64> = (0..size)
            .map(|i| Complex64::from_polar(1.0, i as f64 * 0.05))
            .collect();
        let mut buffer = input.clone();

        // === FLAT FADING ===
        // single tap, no noise - the cheapest useful channel
        let mut flat = FadingChannel::new(ChannelConfig::default().with_seed(1))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::new("flat", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                flat.process(black_box(&mut buffer));
            })
        });

        // === URBAN MULTIPATH ===
        // four taps with decaying power, fast Doppler, 20 dB SNR
        let taps = vec![
            TapConfig::new(0, 0.0),
            TapConfig::new(2, -3.0),
            TapConfig::new(5, -6.0),
            TapConfig::new(11, -10.0),
        ];
        let config = ChannelConfig::default()
            .with_sample_rate(1e6)
            .with_doppler(200.0, FadingType::Jakes)
            .with_taps(taps)
            .with_snr_db(20.0)
            .with_seed(2);
        let mut urban = FadingChannel::new(config).expect("valid config");
        group.bench_with_input(BenchmarkId::new("urban", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                urban.process(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
