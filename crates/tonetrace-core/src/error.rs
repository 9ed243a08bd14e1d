//! Error type shared by the core filters.

/// Errors raised by [`crate::Resonator`] and [`crate::BoxcarSmoother`]
/// parameter validation.
///
/// Every variant is a numeric-domain error: the computation that follows
/// would divide by zero, produce NaN, or construct a zero/negative-length
/// buffer, so construction refuses up front instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DspError {
    /// The smoothing window is zero or not smaller than the source length.
    InvalidWindow {
        /// Requested window length in samples.
        window: usize,
        /// Length of the source buffer.
        len: usize,
    },
    /// The bandpass center frequency is at or beyond DC/Nyquist, where
    /// `sin(omega)` vanishes and the coefficient design is undefined.
    InvalidCenterFrequency {
        /// Requested center frequency in Hz.
        center_hz: f32,
        /// Sample rate in Hz.
        sample_rate: f32,
    },
}

#[cfg(feature = "std")]
impl std::fmt::Display for DspError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidWindow { window, len } => write!(
                f,
                "smoothing window {window} is invalid for a source of {len} samples \
                 (need 0 < window < len)"
            ),
            Self::InvalidCenterFrequency {
                center_hz,
                sample_rate,
            } => write!(
                f,
                "bandpass center {center_hz} Hz is outside (0, {}) Hz at {sample_rate} Hz \
                 sample rate",
                sample_rate / 2.0
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DspError {}
