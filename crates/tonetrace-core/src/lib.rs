//! Tonetrace Core - DSP primitives for power-envelope extraction
//!
//! This crate provides the two filters at the heart of the tonetrace
//! pipeline, usable on their own:
//!
//! - [`Resonator`] - second-order IIR bandpass (constant-skirt-gain biquad)
//!   tuned by center frequency and octave bandwidth, used to isolate the
//!   dominant tone of a signal
//! - [`BoxcarSmoother`] - O(n) moving-average lowpass over a fixed window,
//!   cascaded by the pipeline to approximate a higher-order response
//!
//! Both are batch filters: one call consumes an input buffer and produces a
//! fresh output buffer, with no state surviving across calls. Invalid
//! parameters (a window larger than the source, a center frequency at DC or
//! Nyquist) fail fast with [`DspError`] instead of producing NaN or a
//! malformed buffer.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`). Disable the default
//! `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tonetrace-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod boxcar;
pub mod error;
pub mod resonator;

// Re-export main types at crate root
pub use boxcar::BoxcarSmoother;
pub use error::DspError;
pub use resonator::Resonator;
