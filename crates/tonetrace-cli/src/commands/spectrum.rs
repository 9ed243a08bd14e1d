//! Band-limited spectrum inspection command.

use clap::Args;
use std::path::PathBuf;
use tonetrace_analysis::{band_limited_spectrum, detect_peaks};
use tonetrace_io::read_wav;

/// Show the band-limited Welch spectrum and its confirmed peaks.
#[derive(Args)]
pub struct SpectrumArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Lower edge of the analysis band in Hz
    #[arg(long, default_value = "200.0")]
    band_low: f32,

    /// Upper edge of the analysis band in Hz
    #[arg(long, default_value = "2000.0")]
    band_high: f32,

    /// Peak-confirmation threshold (0-1]
    #[arg(long, default_value = "0.5")]
    threshold: f32,

    /// Show top N peaks
    #[arg(long, default_value = "10")]
    peaks: usize,

    /// Output JSON file (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output CSV file (optional)
    #[arg(long)]
    csv: Option<PathBuf>,
}

pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    println!("Analyzing spectrum of {}...", args.input.display());

    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let spectrum = band_limited_spectrum(&samples, sample_rate, args.band_low, args.band_high)?;
    if spectrum.is_empty() {
        anyhow::bail!(
            "analysis band ({} - {} Hz) contains no spectrum bins",
            args.band_low,
            args.band_high
        );
    }

    let detected = detect_peaks(args.threshold, spectrum.powers())?;

    println!(
        "\n{} confirmed peak(s) in {} - {} Hz:",
        detected.len(),
        args.band_low,
        args.band_high
    );
    println!("  {:>10}  {:>12}", "Freq (Hz)", "Power");
    println!("  {:>10}  {:>12}", "---------", "-----");
    for peak in detected.iter().take(args.peaks) {
        println!(
            "  {:>10.1}  {:>12.6}",
            spectrum.freqs()[peak.index],
            peak.power
        );
    }

    if let Some(csv_path) = &args.csv {
        let mut csv = String::new();
        csv.push_str("frequency_hz,power\n");
        for (freq, power) in spectrum.pairs() {
            csv.push_str(&format!("{:.2},{:.9}\n", freq, power));
        }
        std::fs::write(csv_path, csv)?;
        println!("\nWrote spectrum to {}", csv_path.display());
    }

    if let Some(output_path) = &args.output {
        let json = serde_json::json!({
            "sample_rate": sample_rate,
            "band_hz": [args.band_low, args.band_high],
            "threshold": args.threshold,
            "frequencies": spectrum.freqs(),
            "powers": spectrum.powers(),
            "peaks": detected
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "frequency_hz": spectrum.freqs()[p.index],
                        "power": p.power,
                    })
                })
                .collect::<Vec<_>>(),
        });
        std::fs::write(output_path, serde_json::to_string_pretty(&json)?)?;
        println!("\nWrote spectrum JSON to {}", output_path.display());
    }

    Ok(())
}
