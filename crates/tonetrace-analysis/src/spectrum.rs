//! The paired (frequency, power) spectrum type and band-limited extraction.

use crate::welch::{WelchConfig, welch_psd};
use crate::{AnalysisError, Result};

/// A power spectrum: two parallel sequences of equal length.
///
/// `freqs[i]` is the frequency (Hz) of `powers[i]`. The pairing is enforced
/// by construction — fields are private and every operation that narrows
/// the spectrum goes through [`Spectrum::band`], so the two sequences can
/// never desynchronize.
///
/// # Invariants
///
/// - `freqs.len() == powers.len()`
/// - `freqs` is strictly increasing
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    freqs: Vec<f32>,
    powers: Vec<f32>,
}

impl Spectrum {
    /// Build a spectrum from parallel frequency/power sequences.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidConfig`] when the lengths differ or the
    /// frequencies are not strictly increasing.
    pub fn new(freqs: Vec<f32>, powers: Vec<f32>) -> Result<Self> {
        if freqs.len() != powers.len() {
            return Err(AnalysisError::InvalidConfig(format!(
                "frequency/power length mismatch: {} vs {}",
                freqs.len(),
                powers.len()
            )));
        }
        if freqs.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(AnalysisError::InvalidConfig(
                "frequencies must be strictly increasing".into(),
            ));
        }

        Ok(Self { freqs, powers })
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// True when the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Frequency sequence in Hz.
    pub fn freqs(&self) -> &[f32] {
        &self.freqs
    }

    /// Power sequence, parallel to [`Spectrum::freqs`].
    pub fn powers(&self) -> &[f32] {
        &self.powers
    }

    /// Iterate over `(frequency, power)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.freqs.iter().copied().zip(self.powers.iter().copied())
    }

    /// Restrict to the open band `(low_hz, high_hz)`.
    ///
    /// Both ends are exclusive. Relative order and pairing are preserved;
    /// the result may be empty.
    pub fn band(&self, low_hz: f32, high_hz: f32) -> Spectrum {
        let (freqs, powers) = self
            .pairs()
            .filter(|&(f, _)| f > low_hz && f < high_hz)
            .unzip();

        // Filtering an increasing sequence keeps it increasing, so the
        // invariant holds without re-validation.
        Spectrum { freqs, powers }
    }
}

/// Welch spectrum of `signal`, restricted to the open band
/// `(low_hz, high_hz)`.
///
/// PSD estimation runs with the pipeline's fixed analysis constants —
/// segment length 4096, overlap 1024, zero-pad to 4096, rectangular
/// window, no output scaling ([`WelchConfig::default`]). They are not
/// tunable through this entry point: downstream peak magnitudes are only
/// comparable across recordings when every caller analyzes the same way.
///
/// # Errors
///
/// [`AnalysisError::SignalTooShort`] when the signal does not cover one
/// segment; [`AnalysisError::InvalidConfig`] when `low_hz >= high_hz`.
pub fn band_limited_spectrum(
    signal: &[f32],
    sample_rate: f32,
    low_hz: f32,
    high_hz: f32,
) -> Result<Spectrum> {
    if low_hz >= high_hz {
        return Err(AnalysisError::InvalidConfig(format!(
            "band low {low_hz} Hz must be below band high {high_hz} Hz"
        )));
    }

    let full = welch_psd(signal, sample_rate, &WelchConfig::default())?;
    Ok(full.band(low_hz, high_hz))
}
