//! Envelope-extraction command (the full pipeline).

use crate::plot;
use clap::Args;
use std::path::PathBuf;
use tonetrace_analysis::{EnvelopeConfig, trace_envelope};
use tonetrace_io::read_wav;

/// Extract the smoothed power envelope of a recording.
#[derive(Args)]
pub struct TraceArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PNG file
    #[arg(short, long, default_value = "envelope.png")]
    output: PathBuf,

    /// Also dump the trace as CSV (time_s,power)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Lower edge of the tone search band in Hz
    #[arg(long, default_value = "200.0")]
    band_low: f32,

    /// Upper edge of the tone search band in Hz
    #[arg(long, default_value = "2000.0")]
    band_high: f32,

    /// Peak-confirmation threshold (0-1]
    #[arg(long, default_value = "0.5")]
    threshold: f32,

    /// Resonator bandwidth in octaves
    #[arg(long, default_value = "0.1")]
    bandwidth: f32,

    /// Number of smoothing passes
    #[arg(long, default_value = "4")]
    passes: usize,

    /// Smoothing window length in tone periods
    #[arg(long, default_value = "6")]
    cycles: usize,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    println!("Tracing envelope of {}...", args.input.display());

    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let config = EnvelopeConfig {
        band_low_hz: args.band_low,
        band_high_hz: args.band_high,
        peak_threshold: args.threshold,
        bandwidth: args.bandwidth,
        smoothing_passes: args.passes,
        cycles_per_window: args.cycles,
    };

    tracing::debug!(?config, "running envelope pipeline");
    let trace = trace_envelope(&samples, sample_rate, &config)?;

    println!("  Dominant tone: {:.1} Hz", trace.dominant_freq);
    println!(
        "  Smoothing window: {} samples x {} passes",
        trace.window, args.passes
    );

    if let Some(csv_path) = &args.csv {
        let mut csv = String::new();
        csv.push_str("time_s,power\n");
        for (t, power) in trace.points() {
            csv.push_str(&format!("{:.6},{:.9}\n", t, power));
        }
        std::fs::write(csv_path, csv)?;
        println!("Wrote envelope CSV to {}", csv_path.display());
    }

    let points: Vec<(f32, f32)> = trace.points().collect();
    plot::render_line_chart(&args.output, &points, "signal power", "t", "power")?;
    println!("Wrote envelope plot to {}", args.output.display());

    Ok(())
}
