//! FFT wrapper with windowing functions

use rustfft::{FftPlanner, num_complex::Complex};
use std::f32::consts::PI;
use std::sync::Arc;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Rectangular (no windowing) — what the Welch estimator runs with by
    /// default, matching the pipeline's fixed analysis constants
    Rectangular,
    /// Hann window (raised cosine)
    Hann,
}

impl Window {
    /// Apply window to a buffer
    pub fn apply(&self, buffer: &mut [f32]) {
        let n = buffer.len();
        match self {
            Window::Rectangular => {}
            Window::Hann => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let w = 0.5 * (1.0 - (2.0 * PI * i as f32 / n as f32).cos());
                    *sample *= w;
                }
            }
        }
    }

    /// Get window coefficients
    pub fn coefficients(&self, size: usize) -> Vec<f32> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }
}

/// Forward FFT processor with a cached plan
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f32>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);

        Self { fft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on real input
    ///
    /// Input shorter than the FFT size is zero-padded; longer input is
    /// truncated. Returns the positive-frequency half of the spectrum
    /// (`size/2 + 1` bins, DC to Nyquist).
    pub fn forward(&self, input: &[f32]) -> Vec<Complex<f32>> {
        let mut buffer: Vec<Complex<f32>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.size / 2 + 1);
        buffer
    }
}
