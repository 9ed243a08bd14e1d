//! Audio file I/O for the tonetrace pipeline.
//!
//! The analysis core works on one fully materialized mono buffer; this
//! crate produces it:
//!
//! - [`read_wav`] - load a WAV file as mono f32 samples in `[-1, 1]`
//! - [`read_wav_info`] - header-only metadata without loading samples
//! - [`write_wav`] - save samples (used by the signal generator and tests)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tonetrace_io::read_wav;
//!
//! let (samples, spec) = read_wav("recording.wav")?;
//! println!("Loaded {} samples at {} Hz", samples.len(), spec.sample_rate);
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file decodes to zero sample frames — nothing to analyze.
    #[error("WAV file contains no samples")]
    EmptyFile,

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
