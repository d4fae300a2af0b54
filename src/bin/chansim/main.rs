//! chansim - run a tone through a fading channel and summarize what comes out
//!
//! Run with: cargo run --bin chansim -- --doppler 50 --fading jakes --snr 20

use chansim_dsp::{
    channel::{ChannelConfig, FadingChannel},
    dsp::FadingType,
    spectrum::{PowerSpectrum, Window},
    units,
};
use clap::Parser;
use num_complex::Complex64;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Spectrum block used for the peak estimate
const SPECTRUM_SIZE: usize = 4096;

#[derive(Parser, Debug)]
#[command(name = "chansim", about = "Rayleigh fading channel simulator")]
struct Args {
    /// Maximum Doppler shift in Hz
    #[arg(long, default_value_t = 10.0)]
    doppler: f64,

    /// Doppler spectrum: jakes or flat
    #[arg(long, default_value = "jakes")]
    fading: FadingType,

    /// Sinusoid processes per generator (rounded up to a power of two, minimum 16)
    #[arg(long, default_value_t = 16)]
    processes: usize,

    /// Samples to simulate
    #[arg(long, default_value_t = 48_000)]
    samples: usize,

    #[arg(long, default_value_t = 48_000.0)]
    sample_rate: f64,

    /// Tone offset from the carrier in Hz
    #[arg(long, default_value_t = 1_000.0)]
    tone: f64,

    /// Signal-to-noise ratio in dB (noise disabled when omitted)
    #[arg(long)]
    snr: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `RUST_LOG` wins when it parses; otherwise `-v` picks the level.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter = log_filter(args.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config = ChannelConfig::default()
        .with_sample_rate(args.sample_rate)
        .with_doppler(args.doppler, args.fading)
        .with_processes(args.processes);
    if let Some(snr) = args.snr {
        config = config.with_snr_db(snr);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut channel = FadingChannel::new(config)?;
    info!(processes = channel.fading().size(), "channel ready");

    let step = std::f64::consts::TAU * args.tone / args.sample_rate;
    let mut buffer: Vec<Complex64> = (0..args.samples)
        .map(|n| Complex64::from_polar(1.0, step * n as f64))
        .collect();
    channel.process(&mut buffer);

    let (mut min_env, mut max_env, mut power) = (f64::INFINITY, 0.0f64, 0.0);
    for s in &buffer {
        let env = s.norm();
        min_env = min_env.min(env);
        max_env = max_env.max(env);
        power += s.norm_sqr();
    }
    let mean_power = power / buffer.len().max(1) as f64;

    println!("fading        {} @ {} Hz", args.fading, args.doppler);
    println!("processes     {}", channel.fading().size());
    println!("samples       {}", buffer.len());
    let mean_db = units::linear_to_db(mean_power).unwrap_or(f64::NEG_INFINITY);
    println!("mean power    {:.3} dB", mean_db);
    println!("envelope      {:.4} .. {:.4}", min_env, max_env);

    if buffer.len() >= SPECTRUM_SIZE {
        let mut spectrum = PowerSpectrum::new(SPECTRUM_SIZE, Window::Hann);
        spectrum.compute(&buffer[buffer.len() - SPECTRUM_SIZE..]);
        if let Some((bin, peak)) = spectrum.peak() {
            println!(
                "spectral peak {:.1} Hz ({:.1} dB)",
                spectrum.bin_frequency(bin, args.sample_rate),
                units::linear_to_db(peak).unwrap_or(f64::NEG_INFINITY)
            );
        }
    }

    Ok(())
}
