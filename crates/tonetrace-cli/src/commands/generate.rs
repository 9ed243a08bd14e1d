//! Test signal generation command.

use clap::{Args, Subcommand};
use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use tonetrace_io::{WavSpec, write_wav};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a continuous sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "600.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "8000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,

        /// Additive white-noise amplitude (0-1)
        #[arg(long, default_value = "0.0")]
        noise: f32,
    },

    /// Generate a Morse-keyed tone
    Cw {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Keying pattern: '.' = dot, '-' = dash, ' ' = word gap
        #[arg(long, default_value = "... --- ...")]
        pattern: String,

        /// Dot (unit) duration in milliseconds
        #[arg(long, default_value = "60.0")]
        unit_ms: f32,

        /// Tone frequency in Hz
        #[arg(long, default_value = "600.0")]
        freq: f32,

        /// Sample rate
        #[arg(long, default_value = "8000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,

        /// Additive white-noise amplitude (0-1)
        #[arg(long, default_value = "0.0")]
        noise: f32,
    },

    /// Generate white noise
    Noise {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "8000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.5")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
            noise,
        } => {
            println!("Generating sine tone...");
            println!("  {} Hz for {:.2}s", freq, duration);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|i| {
                    let t = i as f32 / sample_rate as f32;
                    (2.0 * PI * freq * t).sin() * amplitude + noise * (rand_f32() * 2.0 - 1.0)
                })
                .collect();

            write_mono(&output, &samples, sample_rate)?;
        }

        GenerateCommand::Cw {
            output,
            pattern,
            unit_ms,
            freq,
            sample_rate,
            amplitude,
            noise,
        } => {
            if !pattern.chars().all(|c| matches!(c, '.' | '-' | ' ')) {
                anyhow::bail!("keying pattern may only contain '.', '-' and ' '");
            }

            println!("Generating keyed tone...");
            println!(
                "  \"{}\" at {} Hz, {:.0} ms unit",
                pattern, freq, unit_ms
            );

            let unit = (unit_ms / 1000.0 * sample_rate as f32) as usize;
            let mut key = Vec::new();
            for c in pattern.chars() {
                match c {
                    // element followed by one unit of intra-character gap
                    '.' => {
                        key.extend(std::iter::repeat_n(true, unit));
                        key.extend(std::iter::repeat_n(false, unit));
                    }
                    '-' => {
                        key.extend(std::iter::repeat_n(true, 3 * unit));
                        key.extend(std::iter::repeat_n(false, unit));
                    }
                    // a space widens the gap to a word break (total 4 units)
                    ' ' => key.extend(std::iter::repeat_n(false, 3 * unit)),
                    _ => unreachable!(),
                }
            }
            // trailing silence so the last element's envelope can settle
            key.extend(std::iter::repeat_n(false, 4 * unit));

            let samples: Vec<f32> = key
                .iter()
                .enumerate()
                .map(|(i, &on)| {
                    let t = i as f32 / sample_rate as f32;
                    let tone = if on { (2.0 * PI * freq * t).sin() * amplitude } else { 0.0 };
                    tone + noise * (rand_f32() * 2.0 - 1.0)
                })
                .collect();

            write_mono(&output, &samples, sample_rate)?;
        }

        GenerateCommand::Noise {
            output,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating white noise...");
            println!("  {:.2}s at {} Hz", duration, sample_rate);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|_| (rand_f32() * 2.0 - 1.0) * amplitude)
                .collect();

            write_mono(&output, &samples, sample_rate)?;
        }
    }

    Ok(())
}

fn write_mono(output: &Path, samples: &[f32], sample_rate: u32) -> anyhow::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
    };

    write_wav(output, samples, spec)?;
    println!("Wrote {} samples to {}", samples.len(), output.display());
    Ok(())
}

/// Simple PRNG for noise generation (xorshift32)
fn rand_f32() -> f32 {
    use std::cell::Cell;
    thread_local! {
        static STATE: Cell<u32> = const { Cell::new(0x12345678) };
    }

    STATE.with(|state| {
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state.set(x);
        (x as f32) / (u32::MAX as f32)
    })
}
