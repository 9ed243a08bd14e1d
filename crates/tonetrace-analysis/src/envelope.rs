//! The envelope-extraction pipeline.
//!
//! Composes the analysis stages end to end:
//!
//! 1. band-limited Welch spectrum of the raw signal
//! 2. hysteresis peak pick → dominant tone frequency
//! 3. resonator bandpass of the squared signal around that frequency
//! 4. four cascaded boxcar passes, window sized to the tone period
//!
//! The result is a time-indexed power envelope suitable for plotting or
//! Morse-timing extraction. One call, one batch, no state between calls.

use crate::spectrum::band_limited_spectrum;
use crate::{AnalysisError, Result, peaks};
use tonetrace_core::{BoxcarSmoother, Resonator};

/// Tuning knobs for [`trace_envelope`].
///
/// The defaults are the analysis constants the pipeline was built around;
/// override individual fields for unusual recordings (e.g. a tone outside
/// the 200-2000 Hz search band).
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeConfig {
    /// Lower edge of the dominant-tone search band, Hz (exclusive).
    pub band_low_hz: f32,
    /// Upper edge of the dominant-tone search band, Hz (exclusive).
    pub band_high_hz: f32,
    /// Hysteresis threshold for peak confirmation, in `(0, 1]`.
    pub peak_threshold: f32,
    /// Resonator bandwidth in octaves around the dominant tone.
    pub bandwidth: f32,
    /// Number of boxcar passes in the smoothing cascade.
    pub smoothing_passes: usize,
    /// Smoothing window length, in tone periods.
    pub cycles_per_window: usize,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            band_low_hz: 200.0,
            band_high_hz: 2000.0,
            peak_threshold: 0.5,
            bandwidth: 0.1,
            smoothing_passes: 4,
            cycles_per_window: 6,
        }
    }
}

/// A smoothed power envelope over time.
#[derive(Debug, Clone)]
pub struct EnvelopeTrace {
    /// Envelope samples. The trace is `window * passes` samples shorter
    /// than the input signal (each boxcar pass trims one window).
    pub values: Vec<f32>,
    /// Sample rate of the source signal, Hz.
    pub sample_rate: f32,
    /// The detected dominant tone frequency, Hz.
    pub dominant_freq: f32,
    /// The derived boxcar window, in samples.
    pub window: usize,
}

impl EnvelopeTrace {
    /// Iterate over `(time_secs, power)` points, `t = index / sample_rate`.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f32 / self.sample_rate, v))
    }

    /// Duration covered by the trace, in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.values.len() as f32 / self.sample_rate
    }
}

/// Run the full pipeline over a captured sample buffer.
///
/// # Errors
///
/// Input and parameter problems fail fast before or during the run:
/// [`AnalysisError::NoPeaks`] when the band contains no confirmed peak to
/// select a dominant frequency from, [`AnalysisError::SignalTooShort`] /
/// [`AnalysisError::InvalidConfig`] for an unusable signal or config, and
/// [`AnalysisError::Dsp`] when the derived filter parameters are out of
/// domain (e.g. a smoothing window the trimmed signal cannot support).
pub fn trace_envelope(
    samples: &[f32],
    sample_rate: f32,
    config: &EnvelopeConfig,
) -> Result<EnvelopeTrace> {
    let spectrum = band_limited_spectrum(
        samples,
        sample_rate,
        config.band_low_hz,
        config.band_high_hz,
    )?;

    let detected = peaks::detect_peaks(config.peak_threshold, spectrum.powers())?;
    let strongest = detected.first().ok_or(AnalysisError::NoPeaks)?;
    let dominant_freq = spectrum.freqs()[strongest.index];

    let window = config.cycles_per_window * (sample_rate / dominant_freq).round() as usize;

    let squared: Vec<f32> = samples.iter().map(|&x| x * x).collect();
    let mut resonator = Resonator::new(sample_rate, dominant_freq, config.bandwidth)?;
    let bandpassed = resonator.filter(&squared);

    let values = BoxcarSmoother::new(window).smooth_cascade(&bandpassed, config.smoothing_passes)?;

    Ok(EnvelopeTrace {
        values,
        sample_rate,
        dominant_freq,
        window,
    })
}
