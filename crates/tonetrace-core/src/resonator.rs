//! Resonator: second-order IIR bandpass for tone isolation.
//!
//! A band-pass biquad with constant 0 dB peak gain (the "BPF, constant
//! skirt gain" design from the RBJ Audio EQ Cookbook), with the bandwidth
//! expressed in octaves around the center frequency:
//!
//! ```text
//! omega = 2π * center / sample_rate
//! alpha = sin(omega) * sinh(ln(2)/2 * bw * omega / sin(omega))
//!
//! b0 =  alpha        a0 = 1 + alpha
//! b1 =  0            a1 = -2 cos(omega)
//! b2 = -alpha        a2 = 1 - alpha
//! ```
//!
//! All coefficients are normalized by `a0` at construction. The filter runs
//! the Direct Form I recurrence
//!
//! ```text
//! y[n] = b0*x[n] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
//! ```
//!
//! (`b1` is identically zero for this topology). Gain is exactly unity at
//! the center frequency; the skirt rolls off at 6 dB/octave on both sides.
//!
//! # Reference
//!
//! Robert Bristow-Johnson, "Cookbook formulae for audio EQ biquad filter
//! coefficients", BPF (constant skirt gain) with bandwidth in octaves.

use crate::DspError;
use core::f32::consts::PI;
use libm::{cosf, logf, sinf, sinhf};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

/// Second-order bandpass filter tuned to a center frequency.
///
/// # Invariants
///
/// - `0 < center_hz < sample_rate / 2` (enforced at construction)
/// - delay lines start at zero; [`Resonator::filter`] re-zeroes them, so a
///   batch call never sees state from an earlier buffer
#[derive(Debug, Clone)]
pub struct Resonator {
    /// Feedforward coefficients (b1 is always zero).
    b0: f32,
    b2: f32,

    /// Feedback coefficients.
    a1: f32,
    a2: f32,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl Resonator {
    /// Design a bandpass filter around `center_hz`.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz
    /// * `center_hz` - Center frequency in Hz, in `(0, sample_rate / 2)`
    /// * `bandwidth` - Bandwidth in octaves (e.g. 0.1 for a narrow resonator)
    ///
    /// # Errors
    ///
    /// [`DspError::InvalidCenterFrequency`] when the center is at or beyond
    /// DC/Nyquist (or any input is non-finite) — there `sin(omega)`
    /// vanishes and `alpha` is undefined.
    pub fn new(sample_rate: f32, center_hz: f32, bandwidth: f32) -> Result<Self, DspError> {
        let valid = sample_rate > 0.0
            && center_hz.is_finite()
            && bandwidth.is_finite()
            && center_hz > 0.0
            && center_hz < sample_rate / 2.0;
        if !valid {
            return Err(DspError::InvalidCenterFrequency {
                center_hz,
                sample_rate,
            });
        }

        let omega = 2.0 * PI * center_hz / sample_rate;
        let sin_omega = sinf(omega);
        let cos_omega = cosf(omega);
        let alpha = sin_omega * sinhf(logf(2.0) * 0.5 * bandwidth * omega / sin_omega);

        let a0_inv = 1.0 / (1.0 + alpha);

        Ok(Self {
            b0: alpha * a0_inv,
            b2: -alpha * a0_inv,
            a1: -2.0 * cos_omega * a0_inv,
            a2: (1.0 - alpha) * a0_inv,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        })
    }

    /// Process a single sample through the filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b2 * self.x2 - self.a1 * self.y1 - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clear the delay lines without changing coefficients.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Filter a whole buffer from fresh state.
    ///
    /// Resets the delay lines first, so separate calls are independent.
    /// Output has the same length as the input; the startup transient is
    /// left in place (no warm-up trimming).
    pub fn filter(&mut self, input: &[f32]) -> Vec<f32> {
        self.reset();
        input.iter().map(|&x| self.process(x)).collect()
    }
}
