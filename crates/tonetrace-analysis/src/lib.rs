//! Tonetrace Analysis - spectral tools for radio-tone envelope extraction
//!
//! This crate turns a raw mono recording into a smoothed power-envelope
//! trace of its dominant tone:
//!
//! - [`fft`] - FFT wrapper with windowing functions
//! - [`welch`] - Welch's method PSD estimator
//! - [`spectrum`] - the paired (frequency, power) [`Spectrum`] type and
//!   band-limited extraction with the pipeline's fixed analysis constants
//! - [`peaks`] - hysteresis peak picking over a power sequence
//! - [`envelope`] - the pipeline driver composing all of the above with the
//!   filters from `tonetrace-core`
//!
//! ## Example Workflow
//!
//! ```rust,ignore
//! use tonetrace_analysis::{EnvelopeConfig, trace_envelope};
//!
//! let (samples, spec) = tonetrace_io::read_wav("keyed_tone.wav")?;
//! let trace = trace_envelope(&samples, spec.sample_rate as f32, &EnvelopeConfig::default())?;
//!
//! println!("dominant tone: {:.1} Hz", trace.dominant_freq);
//! for (t, power) in trace.points() {
//!     // plot or decode
//! }
//! ```
//!
//! The whole pipeline is a single-threaded batch computation over an
//! in-memory buffer; every stage consumes an immutable input sequence and
//! allocates a fresh output. Failures are immediate and final — there is no
//! partial-result recovery.

pub mod envelope;
pub mod fft;
pub mod peaks;
pub mod spectrum;
pub mod welch;

use tonetrace_core::DspError;

// Re-export main types at crate root
pub use envelope::{EnvelopeConfig, EnvelopeTrace, trace_envelope};
pub use fft::{Fft, Window};
pub use peaks::{Peak, detect_peaks};
pub use spectrum::{Spectrum, band_limited_spectrum};
pub use welch::{WelchConfig, welch_psd};

/// Error types for spectral analysis and the envelope pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// An input sequence that must be non-empty was empty.
    #[error("input sequence is empty")]
    EmptyInput,

    /// The signal does not cover a single Welch segment.
    #[error("signal of {len} samples is shorter than one analysis segment ({segment_len})")]
    SignalTooShort {
        /// Number of samples in the signal.
        len: usize,
        /// Required segment length.
        segment_len: usize,
    },

    /// A parameter is outside its documented domain.
    #[error("invalid analysis configuration: {0}")]
    InvalidConfig(String),

    /// The band-limited spectrum produced no confirmed peaks, so there is
    /// no dominant frequency to select.
    #[error("no confirmed peaks in the analysis band")]
    NoPeaks,

    /// A core filter rejected its parameters.
    #[error("filter error: {0}")]
    Dsp(#[from] DspError),
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
