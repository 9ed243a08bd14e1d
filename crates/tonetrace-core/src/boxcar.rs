//! Boxcar (moving-average) smoother.
//!
//! An O(n) sliding-window mean with the running-sum recurrence:
//!
//! ```text
//! out[0] = mean(src[0..w))
//! out[i] = out[i-1] - src[i-1]/w + src[i-1+w]/w
//! ```
//!
//! so `out[i] = mean(src[i..i+w))` and the output is `w` samples shorter
//! than the source. A single pass is a 1st-order lowpass with a sinc-shaped
//! response; the envelope pipeline cascades four passes with the same
//! window to approximate a higher-order rolloff.
//!
//! The running mean is accumulated in f64 so rounding does not drift over
//! long traces.

use crate::DspError;

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

/// Moving-average lowpass over a fixed window.
///
/// Stateless across calls: each [`BoxcarSmoother::smooth`] is a pure
/// function of its input.
#[derive(Debug, Clone, Copy)]
pub struct BoxcarSmoother {
    window: usize,
}

impl BoxcarSmoother {
    /// Create a smoother with the given window length in samples.
    ///
    /// The window is validated against the source length on each call, not
    /// here — the same smoother may be applied to buffers of any length.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Window length in samples.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Smooth `source`, producing `source.len() - window` samples.
    ///
    /// # Errors
    ///
    /// [`DspError::InvalidWindow`] when `window == 0` or
    /// `window >= source.len()` — the output would be empty or
    /// negative-length.
    pub fn smooth(&self, source: &[f32]) -> Result<Vec<f32>, DspError> {
        let w = self.window;
        if w == 0 || w >= source.len() {
            return Err(DspError::InvalidWindow {
                window: w,
                len: source.len(),
            });
        }

        let n = w as f64;
        let mut result = Vec::with_capacity(source.len() - w);

        let mut ave = 0.0f64;
        for &x in &source[..w] {
            ave += f64::from(x) / n;
        }
        result.push(ave as f32);

        for i in 1..source.len() - w {
            ave = ave - f64::from(source[i - 1]) / n + f64::from(source[i - 1 + w]) / n;
            result.push(ave as f32);
        }

        Ok(result)
    }

    /// Apply [`BoxcarSmoother::smooth`] `passes` times in succession.
    ///
    /// Each pass shortens the buffer by `window`; validation re-fires per
    /// pass, so a source too short for the full cascade fails fast partway
    /// rather than producing a malformed tail.
    pub fn smooth_cascade(&self, source: &[f32], passes: usize) -> Result<Vec<f32>, DspError> {
        let mut current = source.to_vec();
        for _ in 0..passes {
            current = self.smooth(&current)?;
        }
        Ok(current)
    }
}
