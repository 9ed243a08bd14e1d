//! Welch's method PSD estimation.
//!
//! Averages one-sided periodograms of overlapping segments:
//!
//! ```text
//! stride   = segment_len - overlap
//! Pxx[k]   = sum over segments of |FFT(window * segment, pad)[k]|^2
//!            / num_segments          (interior bins doubled)
//! freqs[k] = k * sample_rate / pad
//! ```
//!
//! Only full segments are analyzed; a trailing partial segment is ignored.
//! No window-power or sample-rate normalization is applied — the envelope
//! pipeline consumes relative magnitudes only, and its peak picker
//! thresholds against the in-band maximum, so a uniform scale factor would
//! cancel anyway.

use crate::fft::{Fft, Window};
use crate::spectrum::Spectrum;
use crate::{AnalysisError, Result};

/// Parameters for [`welch_psd`].
#[derive(Debug, Clone, Copy)]
pub struct WelchConfig {
    /// Samples per segment.
    pub segment_len: usize,
    /// Overlap between consecutive segments, in samples.
    pub overlap: usize,
    /// FFT length; segments are zero-padded up to this.
    pub pad: usize,
    /// Window applied to each segment before the FFT.
    pub window: Window,
}

impl Default for WelchConfig {
    /// The envelope pipeline's fixed analysis constants: 4096-sample
    /// segments, 1024-sample overlap, zero-pad to 4096, no windowing.
    fn default() -> Self {
        Self {
            segment_len: 4096,
            overlap: 1024,
            pad: 4096,
            window: Window::Rectangular,
        }
    }
}

/// Estimate the power spectral density of `signal`.
///
/// Returns a [`Spectrum`] with `pad/2 + 1` bins from DC to Nyquist.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] for an empty signal
/// - [`AnalysisError::SignalTooShort`] when the signal does not cover one
///   segment
/// - [`AnalysisError::InvalidConfig`] for a zero segment length,
///   `overlap >= segment_len`, or `pad < segment_len`
pub fn welch_psd(signal: &[f32], sample_rate: f32, config: &WelchConfig) -> Result<Spectrum> {
    if signal.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if config.segment_len == 0 {
        return Err(AnalysisError::InvalidConfig(
            "segment length must be non-zero".into(),
        ));
    }
    if config.overlap >= config.segment_len {
        return Err(AnalysisError::InvalidConfig(format!(
            "overlap {} must be smaller than segment length {}",
            config.overlap, config.segment_len
        )));
    }
    if config.pad < config.segment_len {
        return Err(AnalysisError::InvalidConfig(format!(
            "pad {} must cover the segment length {}",
            config.pad, config.segment_len
        )));
    }
    if signal.len() < config.segment_len {
        return Err(AnalysisError::SignalTooShort {
            len: signal.len(),
            segment_len: config.segment_len,
        });
    }

    let stride = config.segment_len - config.overlap;
    let num_segments = (signal.len() - config.overlap) / stride;

    let fft = Fft::new(config.pad);
    let num_bins = config.pad / 2 + 1;
    let coeffs = config.window.coefficients(config.segment_len);

    let mut powers = vec![0.0f32; num_bins];
    for seg in 0..num_segments {
        let start = seg * stride;
        let windowed: Vec<f32> = signal[start..start + config.segment_len]
            .iter()
            .zip(coeffs.iter())
            .map(|(&x, &w)| x * w)
            .collect();

        // forward() zero-pads the segment up to the FFT length
        let bins = fft.forward(&windowed);
        for (acc, c) in powers.iter_mut().zip(bins.iter()) {
            *acc += c.norm_sqr();
        }
    }

    let scale = 1.0 / num_segments as f32;
    for (k, p) in powers.iter_mut().enumerate() {
        // One-sided spectrum: interior bins carry the energy of their
        // negative-frequency mirror as well.
        let fold = if k == 0 || k == num_bins - 1 { 1.0 } else { 2.0 };
        *p *= scale * fold;
    }

    let freqs: Vec<f32> = (0..num_bins)
        .map(|k| k as f32 * sample_rate / config.pad as f32)
        .collect();

    Spectrum::new(freqs, powers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(sample_rate: f32, freq: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn tone_peaks_in_its_bin() {
        let config = WelchConfig {
            segment_len: 1024,
            overlap: 256,
            pad: 1024,
            window: Window::Rectangular,
        };
        // 8000 / 1024 = 7.8125 Hz per bin; 500 Hz is exactly bin 64
        let signal = sine(8000.0, 500.0, 8000);
        let psd = welch_psd(&signal, 8000.0, &config).unwrap();

        let peak_bin = psd
            .powers()
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 64);
        assert!((psd.freqs()[peak_bin] - 500.0).abs() < 1e-3);
    }

    #[test]
    fn bin_count_and_spacing_follow_pad() {
        let config = WelchConfig {
            segment_len: 512,
            overlap: 128,
            pad: 2048,
            window: Window::Hann,
        };
        let signal = sine(48000.0, 1000.0, 4096);
        let psd = welch_psd(&signal, 48000.0, &config).unwrap();

        assert_eq!(psd.len(), 1025);
        assert_eq!(psd.freqs()[0], 0.0);
        let step = psd.freqs()[1] - psd.freqs()[0];
        assert!((step - 48000.0 / 2048.0).abs() < 1e-3);
    }

    #[test]
    fn averaging_is_consistent_across_segment_counts() {
        // A stationary tone should give (nearly) the same peak power
        // whether two or six segments are averaged.
        let config = WelchConfig {
            segment_len: 1024,
            overlap: 0,
            pad: 1024,
            window: Window::Rectangular,
        };
        let short = sine(8000.0, 500.0, 2048);
        let long = sine(8000.0, 500.0, 6144);

        let p_short = welch_psd(&short, 8000.0, &config).unwrap();
        let p_long = welch_psd(&long, 8000.0, &config).unwrap();

        let max_short = p_short.powers().iter().fold(0.0f32, |a, &b| a.max(b));
        let max_long = p_long.powers().iter().fold(0.0f32, |a, &b| a.max(b));
        let ratio = max_short / max_long;
        assert!(
            (0.99..1.01).contains(&ratio),
            "peak power should not depend on segment count, ratio = {ratio}"
        );
    }

    #[test]
    fn rejects_empty_signal() {
        let err = welch_psd(&[], 8000.0, &WelchConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn rejects_signal_shorter_than_segment() {
        let signal = vec![0.0f32; 1000];
        let err = welch_psd(&signal, 8000.0, &WelchConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::SignalTooShort {
                len: 1000,
                segment_len: 4096
            }
        ));
    }

    #[test]
    fn rejects_overlap_not_below_segment() {
        let config = WelchConfig {
            segment_len: 256,
            overlap: 256,
            pad: 256,
            window: Window::Rectangular,
        };
        let signal = vec![0.0f32; 1024];
        assert!(matches!(
            welch_psd(&signal, 8000.0, &config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
